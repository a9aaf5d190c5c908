use kairo_dynamic::Object;
use serde::Serialize;

use crate::annotations::{AnnotationsType, route_annotations};
use crate::error::Result;
use crate::field::{Choice, optional_bool, optional_choice};

/// Encoding of returned geometries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Geometries {
    #[default]
    Polyline,
    Polyline6,
    GeoJSON,
}

impl Choice for Geometries {
    const FIELD: &'static str = "geometries";
    const CHOICES: &'static [(&'static str, Self)] = &[
        ("polyline", Geometries::Polyline),
        ("polyline6", Geometries::Polyline6),
        ("geojson", Geometries::GeoJSON),
    ];
}

/// Level of detail of the overview geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Overview {
    #[default]
    Simplified,
    Full,
    False,
}

impl Choice for Overview {
    const FIELD: &'static str = "overview";
    const CHOICES: &'static [(&'static str, Self)] = &[
        ("simplified", Overview::Simplified),
        ("full", Overview::Full),
        ("false", Overview::False),
    ];
}

/// Result-shaping fields shared by route, trip and match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CommonParameters {
    pub steps: bool,
    pub annotations: bool,
    pub annotations_type: AnnotationsType,
    pub geometries: Geometries,
    pub overview: Overview,
}

impl CommonParameters {
    pub(crate) fn from_object(object: &Object) -> Result<Self> {
        let steps = optional_bool(object, "steps")?.unwrap_or_default();

        let annotations_type = object
            .get("annotations")
            .map(route_annotations)
            .transpose()?
            .unwrap_or_default();

        let geometries: Geometries = optional_choice(object)?.unwrap_or_default();
        let overview: Overview = optional_choice(object)?.unwrap_or_default();

        Ok(CommonParameters {
            steps,
            annotations: !annotations_type.is_empty(),
            annotations_type,
            geometries,
            overview,
        })
    }
}
