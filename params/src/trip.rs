use kairo::decoder::{DecodableFrom, Decoder};
use kairo_dynamic::DynamicValue;
use serde::Serialize;

use crate::base::BaseParameters;
use crate::common::CommonParameters;
use crate::coordinate::Cardinality;
use crate::error::{Error, Result};
use crate::field::{Choice, object, optional_bool, optional_choice};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TripSource {
    #[default]
    Any,
    First,
}

impl Choice for TripSource {
    const FIELD: &'static str = "source";
    const CHOICES: &'static [(&'static str, Self)] =
        &[("any", TripSource::Any), ("first", TripSource::First)];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TripDestination {
    #[default]
    Any,
    Last,
}

impl Choice for TripDestination {
    const FIELD: &'static str = "destination";
    const CHOICES: &'static [(&'static str, Self)] =
        &[("any", TripDestination::Any), ("last", TripDestination::Last)];
}

/// Travelling-salesman style request over all coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripParameters {
    #[serde(flatten)]
    pub base: BaseParameters,
    #[serde(flatten)]
    pub common: CommonParameters,
    pub roundtrip: bool,
    pub source: TripSource,
    pub destination: TripDestination,
}

impl TripParameters {
    pub const CARDINALITY: Cardinality = Cardinality::Multiple;

    pub fn from_dynamic(value: &DynamicValue, cardinality: Cardinality) -> Result<Self> {
        let object = object(value)?;
        let base = BaseParameters::from_object(object, cardinality)?;
        let common = CommonParameters::from_object(object)?;

        let roundtrip = optional_bool(object, "roundtrip")?.unwrap_or(true);
        let source: TripSource = optional_choice(object)?.unwrap_or_default();
        let destination: TripDestination = optional_choice(object)?.unwrap_or_default();

        Ok(TripParameters {
            base,
            common,
            roundtrip,
            source,
            destination,
        })
    }
}

impl DecodableFrom<DynamicValue> for TripParameters {}

impl Decoder<DynamicValue, TripParameters> for DynamicValue {
    type Error = Error;

    fn decode(&self) -> Result<TripParameters> {
        TripParameters::from_dynamic(self, TripParameters::CARDINALITY)
    }
}
