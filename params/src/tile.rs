use kairo::decoder::{DecodableFrom, Decoder};
use kairo_dynamic::DynamicValue;
use serde::Serialize;

use crate::error::{Error, Result};

/// A vector tile address on the slippy-map grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TileParameters {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl TileParameters {
    pub const MIN_ZOOM: u32 = 12;
    pub const MAX_ZOOM: u32 = 19;

    /// Default validity rule: a supported zoom level and `x`, `y` inside
    /// the `2^z` by `2^z` grid.
    pub fn fits_grid(&self) -> bool {
        if !(Self::MIN_ZOOM..=Self::MAX_ZOOM).contains(&self.z) {
            return false;
        }
        let size = 1u64 << self.z;
        u64::from(self.x) < size && u64::from(self.y) < size
    }

    /// Decodes `[x, y, z]` and checks it with the router's predicate.
    pub fn from_dynamic(value: &DynamicValue, is_valid: impl Fn(&TileParameters) -> bool) -> Result<Self> {
        let Some([x, y, z]) = value.as_array() else {
            return Err(Error::ExpectedTileTriple);
        };
        let axis = |value: &DynamicValue, name: char| {
            value.as_u32().ok_or(Error::TileCoordinateNotUnsigned(name))
        };
        let tile = TileParameters {
            x: axis(x, 'x')?,
            y: axis(y, 'y')?,
            z: axis(z, 'z')?,
        };
        if !is_valid(&tile) {
            return Err(Error::InvalidTile);
        }
        Ok(tile)
    }
}

impl DecodableFrom<DynamicValue> for TileParameters {}

impl Decoder<DynamicValue, TileParameters> for DynamicValue {
    type Error = Error;

    fn decode(&self) -> Result<TileParameters> {
        TileParameters::from_dynamic(self, TileParameters::fits_grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest(
        input,
        expected,
        case("[17059, 11948, 15]", Ok(TileParameters { x: 17059, y: 11948, z: 15 })),
        case("[0, 0, 12]", Ok(TileParameters { x: 0, y: 0, z: 12 })),
        case("[524287, 524287, 19]", Ok(TileParameters { x: 524287, y: 524287, z: 19 })),
        case("[4096, 0, 12]", Err(Error::InvalidTile)),
        case("[0, 0, 11]", Err(Error::InvalidTile)),
        case("[0, 0, 20]", Err(Error::InvalidTile)),
        case("[-1, 0, 12]", Err(Error::TileCoordinateNotUnsigned('x'))),
        case("[0, 1.5, 12]", Err(Error::TileCoordinateNotUnsigned('y'))),
        case(r#"[0, 0, "12"]"#, Err(Error::TileCoordinateNotUnsigned('z'))),
        case("[0, 0]", Err(Error::ExpectedTileTriple)),
        case(r#"{"x": 0, "y": 0, "z": 12}"#, Err(Error::ExpectedTileTriple))
    )]
    fn test_decode(input: &str, expected: Result<TileParameters>) {
        let value: DynamicValue = input.parse().unwrap();
        assert_eq!(expected, value.decode());
    }

    #[test]
    fn test_custom_predicate() {
        let value: DynamicValue = "[1, 2, 3]".parse().unwrap();
        assert_eq!(
            Ok(TileParameters { x: 1, y: 2, z: 3 }),
            TileParameters::from_dynamic(&value, |_| true)
        );
        assert_eq!(
            Err(Error::InvalidTile),
            TileParameters::from_dynamic(&value, |tile| tile.z > 3)
        );
    }
}
