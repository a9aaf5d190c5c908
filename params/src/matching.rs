use kairo::decoder::{DecodableFrom, Decoder};
use kairo_dynamic::{DynamicValue, is_integral};
use serde::Serialize;

use crate::base::BaseParameters;
use crate::common::CommonParameters;
use crate::coordinate::Cardinality;
use crate::error::{Error, Field, Result};
use crate::field::{Choice, object, optional_bool, optional_choice, per_coordinate};
use crate::waypoints::waypoints;

/// Whether large gaps between timestamps split the trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gaps {
    #[default]
    Split,
    Ignore,
}

impl Choice for Gaps {
    const FIELD: &'static str = "gaps";
    const CHOICES: &'static [(&'static str, Self)] = &[("split", Gaps::Split), ("ignore", Gaps::Ignore)];
}

/// Map matching request: snap a noisy trace onto the road network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchParameters {
    #[serde(flatten)]
    pub base: BaseParameters,
    #[serde(flatten)]
    pub common: CommonParameters,
    /// Seconds since the epoch, one per coordinate, or empty.
    pub timestamps: Vec<u64>,
    pub gaps: Gaps,
    pub tidy: bool,
    pub waypoints: Vec<usize>,
}

impl MatchParameters {
    pub const CARDINALITY: Cardinality = Cardinality::Multiple;

    pub fn from_dynamic(value: &DynamicValue, cardinality: Cardinality) -> Result<Self> {
        let object = object(value)?;
        let base = BaseParameters::from_object(object, cardinality)?;
        let count = base.coordinates.len();

        let timestamps = per_coordinate(object, Field::Timestamps, count)?
            .map(|values| values.iter().map(timestamp).collect::<Result<Vec<_>>>())
            .transpose()?
            .unwrap_or_default();

        let gaps: Gaps = optional_choice(object)?.unwrap_or_default();
        let tidy = optional_bool(object, "tidy")?.unwrap_or_default();
        let waypoints = waypoints(object, count)?;
        let common = CommonParameters::from_object(object)?;

        Ok(MatchParameters {
            base,
            common,
            timestamps,
            gaps,
            tidy,
            waypoints,
        })
    }
}

fn timestamp(value: &DynamicValue) -> Result<u64> {
    value
        .as_f64()
        .filter(|t| is_integral(*t) && *t >= 0.0 && *t < u64::MAX as f64)
        .map(|t| t as u64)
        .ok_or(Error::InvalidTimestamp)
}

impl DecodableFrom<DynamicValue> for MatchParameters {}

impl Decoder<DynamicValue, MatchParameters> for DynamicValue {
    type Error = Error;

    fn decode(&self) -> Result<MatchParameters> {
        MatchParameters::from_dynamic(self, MatchParameters::CARDINALITY)
    }
}
