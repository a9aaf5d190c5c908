use kairo_dynamic::{DynamicValue, Object};
use serde::Serialize;

use crate::approach::Approach;
use crate::bearing::Bearing;
use crate::coordinate::{self, Cardinality, Coordinate};
use crate::error::{Error, Field, Result};
use crate::field::{choice, nullable, optional_bool, per_coordinate};
use crate::hint::Hint;

/// Fields shared by every coordinate-based request.
///
/// Each per-coordinate vector is either empty (the key was absent) or
/// holds exactly one entry per coordinate, where `None` means no
/// constraint for that coordinate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaseParameters {
    pub coordinates: Vec<Coordinate>,
    pub approaches: Vec<Option<Approach>>,
    pub bearings: Vec<Option<Bearing>>,
    pub hints: Vec<Option<Hint>>,
    pub radiuses: Vec<Option<f64>>,
    pub generate_hints: bool,
    pub exclude: Vec<String>,
}

impl Default for BaseParameters {
    fn default() -> Self {
        BaseParameters {
            coordinates: Vec::new(),
            approaches: Vec::new(),
            bearings: Vec::new(),
            hints: Vec::new(),
            radiuses: Vec::new(),
            generate_hints: true,
            exclude: Vec::new(),
        }
    }
}

impl BaseParameters {
    pub(crate) fn from_object(object: &Object, cardinality: Cardinality) -> Result<Self> {
        let coordinates = coordinate::coordinates(object, cardinality)?;
        let count = coordinates.len();

        let approaches = per_coordinate(object, Field::Approaches, count)?
            .map(|values| nullable(values, choice::<Approach>))
            .transpose()?
            .unwrap_or_default();

        let bearings = per_coordinate(object, Field::Bearings, count)?
            .map(|values| nullable(values, |value| Bearing::try_from(value)))
            .transpose()?
            .unwrap_or_default();

        let hints = per_coordinate(object, Field::Hints, count)?
            .map(|values| nullable(values, |value| Hint::try_from(value)))
            .transpose()?
            .unwrap_or_default();

        let radiuses = per_coordinate(object, Field::Radiuses, count)?
            .map(|values| nullable(values, radius))
            .transpose()?
            .unwrap_or_default();

        let generate_hints = optional_bool(object, "generate_hints")?.unwrap_or(true);

        let exclude = object.get("exclude").map(exclude).transpose()?.unwrap_or_default();

        Ok(BaseParameters {
            coordinates,
            approaches,
            bearings,
            hints,
            radiuses,
            generate_hints,
            exclude,
        })
    }
}

fn radius(value: &DynamicValue) -> Result<f64> {
    value
        .as_f64()
        .filter(|r| *r >= 0.0)
        .ok_or(Error::InvalidRadius)
}

fn exclude(value: &DynamicValue) -> Result<Vec<String>> {
    let classes = value.as_array().ok_or(Error::InvalidExclude)?;
    classes
        .iter()
        .map(|class| {
            class
                .as_str()
                .map(str::to_string)
                .ok_or(Error::InvalidExclude)
        })
        .collect()
}
