use kairo_dynamic::DynamicValue;
use serde::Serialize;

use crate::error::{Error, Result};

/// Heading constraint for snapping a coordinate: the allowed direction of
/// travel is `bearing ± range` degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bearing {
    pub bearing: i16,
    pub range: i16,
}

impl Bearing {
    pub const MAX_BEARING: f64 = 360.0;
    pub const MAX_RANGE: f64 = 180.0;
}

impl TryFrom<&DynamicValue> for Bearing {
    type Error = Error;

    fn try_from(value: &DynamicValue) -> Result<Self> {
        let Some([bearing, range]) = value.as_array() else {
            return Err(Error::BearingNotPair);
        };
        let (Some(bearing), Some(range)) = (bearing.as_f64(), range.as_f64()) else {
            return Err(Error::BearingNotNumber);
        };
        if !(0.0..=Self::MAX_BEARING).contains(&bearing) || !(0.0..=Self::MAX_RANGE).contains(&range) {
            return Err(Error::BearingOutOfRange);
        }

        // Both values are in range, so truncation cannot overflow.
        Ok(Bearing {
            bearing: bearing as i16,
            range: range as i16,
        })
    }
}
