use kairo::decoder::{DecodableFrom, Decoder};
use kairo_dynamic::{DynamicValue, Object};
use serde::Serialize;

use crate::base::BaseParameters;
use crate::common::CommonParameters;
use crate::coordinate::Cardinality;
use crate::error::{Error, Result};
use crate::field::{Choice, object, optional_choice};
use crate::waypoints::waypoints;

/// Which road segments a coordinate may snap to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Snapping {
    /// Only segments the engine considers startable.
    #[default]
    Default,
    /// Any segment, including ones that cannot start a route.
    Any,
}

impl Choice for Snapping {
    const FIELD: &'static str = "snapping";
    const CHOICES: &'static [(&'static str, Self)] =
        &[("default", Snapping::Default), ("any", Snapping::Any)];
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteParameters {
    #[serde(flatten)]
    pub base: BaseParameters,
    #[serde(flatten)]
    pub common: CommonParameters,
    /// `None` leaves the choice to the engine.
    pub continue_straight: Option<bool>,
    pub alternatives: bool,
    pub number_of_alternatives: u32,
    pub waypoints: Vec<usize>,
    pub snapping: Snapping,
}

impl RouteParameters {
    pub const CARDINALITY: Cardinality = Cardinality::Multiple;

    pub fn from_dynamic(value: &DynamicValue, cardinality: Cardinality) -> Result<Self> {
        let object = object(value)?;
        let base = BaseParameters::from_object(object, cardinality)?;

        let continue_straight = continue_straight(object)?;

        let (alternatives, number_of_alternatives) = object
            .get("alternatives")
            .map(alternatives)
            .transpose()?
            .unwrap_or((false, 0));

        let waypoints = waypoints(object, base.coordinates.len())?;
        let snapping: Snapping = optional_choice(object)?.unwrap_or_default();
        let common = CommonParameters::from_object(object)?;

        Ok(RouteParameters {
            base,
            common,
            continue_straight,
            alternatives,
            number_of_alternatives,
            waypoints,
            snapping,
        })
    }
}

fn continue_straight(object: &Object) -> Result<Option<bool>> {
    match object.get("continue_straight") {
        None | Some(DynamicValue::Null) => Ok(None),
        Some(DynamicValue::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(Error::ExpectedBooleanOrNull("continue_straight")),
    }
}

// `true`/`false` toggle a single alternative; a count asks for that many.
fn alternatives(value: &DynamicValue) -> Result<(bool, u32)> {
    match value {
        DynamicValue::Bool(true) => Ok((true, 1)),
        DynamicValue::Bool(false) => Ok((false, 0)),
        _ => value
            .as_u32()
            .map(|count| (count > 0, count))
            .ok_or(Error::InvalidAlternatives),
    }
}

impl DecodableFrom<DynamicValue> for RouteParameters {}

impl Decoder<DynamicValue, RouteParameters> for DynamicValue {
    type Error = Error;

    fn decode(&self) -> Result<RouteParameters> {
        RouteParameters::from_dynamic(self, RouteParameters::CARDINALITY)
    }
}
