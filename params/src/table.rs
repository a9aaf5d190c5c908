use kairo::decoder::{DecodableFrom, Decoder};
use kairo_dynamic::{DynamicValue, Object};
use serde::Serialize;

use crate::annotations::{TableAnnotations, table_annotations};
use crate::base::BaseParameters;
use crate::coordinate::Cardinality;
use crate::error::{Error, IndexList, Result};
use crate::field::{Choice, object, optional_choice, optional_positive};

/// Which coordinate a fallback distance is estimated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackCoordinate {
    #[default]
    Input,
    Snapped,
}

impl Choice for FallbackCoordinate {
    const FIELD: &'static str = "fallback_coordinate";
    const CHOICES: &'static [(&'static str, Self)] = &[
        ("input", FallbackCoordinate::Input),
        ("snapped", FallbackCoordinate::Snapped),
    ];
}

/// Matrix request. Empty `sources` or `destinations` select every
/// coordinate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableParameters {
    #[serde(flatten)]
    pub base: BaseParameters,
    pub sources: Vec<usize>,
    pub destinations: Vec<usize>,
    pub annotations: TableAnnotations,
    /// Speed in m/s used to estimate entries with no route.
    pub fallback_speed: Option<f64>,
    pub fallback_coordinate: FallbackCoordinate,
    pub scale_factor: f64,
}

impl TableParameters {
    pub const CARDINALITY: Cardinality = Cardinality::Multiple;

    pub fn from_dynamic(value: &DynamicValue, cardinality: Cardinality) -> Result<Self> {
        let object = object(value)?;
        let base = BaseParameters::from_object(object, cardinality)?;
        let count = base.coordinates.len();

        let sources = indices(object, IndexList::Sources, count)?;
        let destinations = indices(object, IndexList::Destinations, count)?;

        let annotations = object
            .get("annotations")
            .map(table_annotations)
            .transpose()?
            .unwrap_or(TableAnnotations::DURATION);

        let fallback_speed = optional_positive(object, "fallback_speed")?;
        let fallback_coordinate: FallbackCoordinate = optional_choice(object)?.unwrap_or_default();
        let scale_factor = optional_positive(object, "scale_factor")?.unwrap_or(1.0);

        Ok(TableParameters {
            base,
            sources,
            destinations,
            annotations,
            fallback_speed,
            fallback_coordinate,
            scale_factor,
        })
    }
}

fn indices(object: &Object, list: IndexList, coordinate_count: usize) -> Result<Vec<usize>> {
    let Some(value) = object.get(list.key()) else {
        return Ok(Vec::new());
    };
    let values = value.as_array().ok_or(Error::IndicesNotArray(list))?;
    values
        .iter()
        .map(|value| {
            let index = value.as_u32().ok_or(Error::IndexNotInteger(list))? as usize;
            if index >= coordinate_count {
                return Err(Error::IndexOutOfRange(list));
            }
            Ok(index)
        })
        .collect()
}

impl DecodableFrom<DynamicValue> for TableParameters {}

impl Decoder<DynamicValue, TableParameters> for DynamicValue {
    type Error = Error;

    fn decode(&self) -> Result<TableParameters> {
        TableParameters::from_dynamic(self, TableParameters::CARDINALITY)
    }
}
