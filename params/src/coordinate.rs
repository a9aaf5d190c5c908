use kairo_dynamic::{DynamicValue, Object};
use serde::Serialize;

use crate::error::{Error, Result};

/// A WGS84 position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
}

impl Coordinate {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Coordinate {
            longitude,
            latitude,
        }
    }

    /// Bounds are inclusive.
    pub fn is_within_world_bounds(&self) -> bool {
        (-180.0..=180.0).contains(&self.longitude) && (-90.0..=90.0).contains(&self.latitude)
    }
}

impl TryFrom<&DynamicValue> for Coordinate {
    type Error = Error;

    fn try_from(value: &DynamicValue) -> Result<Self> {
        let [longitude, latitude] = value.as_array().ok_or(Error::CoordinatesNotPairs)? else {
            return Err(Error::CoordinatesNotPairs);
        };
        let (Some(longitude), Some(latitude)) = (longitude.as_f64(), latitude.as_f64()) else {
            return Err(Error::CoordinateNotNumber);
        };
        if !longitude.is_finite() || !latitude.is_finite() {
            return Err(Error::CoordinateNotFinite);
        }

        let coordinate = Coordinate::new(longitude, latitude);
        if !coordinate.is_within_world_bounds() {
            return Err(Error::CoordinateOutOfBounds);
        }
        Ok(coordinate)
    }
}

/// How many coordinates an endpoint expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// Exactly one.
    Single,
    /// Two or more.
    Multiple,
}

impl Cardinality {
    fn check(self, count: usize) -> Result<()> {
        match self {
            Cardinality::Single if count != 1 => Err(Error::ExpectedSingleCoordinate),
            Cardinality::Multiple if count < 2 => Err(Error::TooFewCoordinates),
            _ => Ok(()),
        }
    }
}

pub(crate) fn coordinates(object: &Object, cardinality: Cardinality) -> Result<Vec<Coordinate>> {
    let value = object.get("coordinates").ok_or(Error::MissingCoordinates)?;
    let pairs = value.as_array().ok_or(Error::CoordinatesNotPairs)?;
    let coordinates = pairs
        .iter()
        .map(Coordinate::try_from)
        .collect::<Result<Vec<_>>>()?;
    cardinality.check(coordinates.len())?;
    Ok(coordinates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn request(json: &str) -> Object {
        let value: DynamicValue = json.parse().unwrap();
        value.as_object().unwrap().clone()
    }

    #[rstest(
        input,
        expected,
        case("[13.388860, 52.517037]", Ok(Coordinate::new(13.38886, 52.517037))),
        case("[180, 90]", Ok(Coordinate::new(180.0, 90.0))),
        case("[-180, -90]", Ok(Coordinate::new(-180.0, -90.0))),
        case("[0, 0]", Ok(Coordinate::new(0.0, 0.0))),
        case("[180.000001, 0]", Err(Error::CoordinateOutOfBounds)),
        case("[0, -90.5]", Err(Error::CoordinateOutOfBounds)),
        case("[-200, 10]", Err(Error::CoordinateOutOfBounds)),
        case(r#"["13.3", 52.5]"#, Err(Error::CoordinateNotNumber)),
        case("[13.3, null]", Err(Error::CoordinateNotNumber)),
        case("[13.3]", Err(Error::CoordinatesNotPairs)),
        case("[13.3, 52.5, 0]", Err(Error::CoordinatesNotPairs)),
        case("13.3", Err(Error::CoordinatesNotPairs))
    )]
    fn test_coordinate_try_from(input: &str, expected: Result<Coordinate>) {
        let value: DynamicValue = input.parse().unwrap();
        assert_eq!(expected, Coordinate::try_from(&value));
    }

    #[test]
    fn test_coordinate_rejects_non_finite() {
        let value = DynamicValue::Array(vec![DynamicValue::Number(f64::NAN), DynamicValue::Number(0.0)]);
        assert_eq!(Err(Error::CoordinateNotFinite), Coordinate::try_from(&value));

        let value = DynamicValue::Array(vec![DynamicValue::Number(0.0), DynamicValue::Number(f64::INFINITY)]);
        assert_eq!(Err(Error::CoordinateNotFinite), Coordinate::try_from(&value));
    }

    #[rstest(
        json,
        cardinality,
        expected,
        case(r#"{"coordinates": [[1, 2], [3, 4]]}"#, Cardinality::Multiple, Ok(2)),
        case(r#"{"coordinates": [[1, 2]]}"#, Cardinality::Single, Ok(1)),
        case(r#"{"coordinates": [[1, 2]]}"#, Cardinality::Multiple, Err(Error::TooFewCoordinates)),
        case(r#"{"coordinates": []}"#, Cardinality::Multiple, Err(Error::TooFewCoordinates)),
        case(r#"{"coordinates": []}"#, Cardinality::Single, Err(Error::ExpectedSingleCoordinate)),
        case(
            r#"{"coordinates": [[1, 2], [3, 4]]}"#,
            Cardinality::Single,
            Err(Error::ExpectedSingleCoordinate)
        ),
        case(r#"{}"#, Cardinality::Multiple, Err(Error::MissingCoordinates)),
        case(r#"{"coordinates": "1,2;3,4"}"#, Cardinality::Multiple, Err(Error::CoordinatesNotPairs)),
        case(r#"{"coordinates": [[1, 2], [300, 4]]}"#, Cardinality::Multiple, Err(Error::CoordinateOutOfBounds))
    )]
    fn test_coordinates(json: &str, cardinality: Cardinality, expected: Result<usize>) {
        let actual = coordinates(&request(json), cardinality).map(|c| c.len());
        assert_eq!(expected, actual);
    }
}
