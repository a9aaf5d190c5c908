use kairo::decoder::{DecodableFrom, Decoder};
use kairo_dynamic::DynamicValue;
use serde::Serialize;

use crate::base::BaseParameters;
use crate::coordinate::Cardinality;
use crate::error::{Error, Result};
use crate::field::object;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearestParameters {
    #[serde(flatten)]
    pub base: BaseParameters,
    pub number_of_results: u32,
}

impl NearestParameters {
    pub const CARDINALITY: Cardinality = Cardinality::Single;

    pub fn from_dynamic(value: &DynamicValue, cardinality: Cardinality) -> Result<Self> {
        let object = object(value)?;
        let base = BaseParameters::from_object(object, cardinality)?;

        let number_of_results = match object.get("number") {
            None => 1,
            Some(value) => value
                .as_u32()
                .filter(|n| *n >= 1)
                .ok_or(Error::InvalidNumberOfResults)?,
        };

        Ok(NearestParameters {
            base,
            number_of_results,
        })
    }
}

impl DecodableFrom<DynamicValue> for NearestParameters {}

impl Decoder<DynamicValue, NearestParameters> for DynamicValue {
    type Error = Error;

    fn decode(&self) -> Result<NearestParameters> {
        NearestParameters::from_dynamic(self, NearestParameters::CARDINALITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest(
        json,
        expected,
        case(r#"{"coordinates": [[-0.12, 51.5]]}"#, Ok(1)),
        case(r#"{"coordinates": [[-0.12, 51.5]], "number": 3}"#, Ok(3)),
        case(
            r#"{"coordinates": [[-0.12, 51.5]], "number": 0}"#,
            Err(Error::InvalidNumberOfResults)
        ),
        case(
            r#"{"coordinates": [[-0.12, 51.5]], "number": 2.5}"#,
            Err(Error::InvalidNumberOfResults)
        ),
        case(
            r#"{"coordinates": [[-0.12, 51.5]], "number": "3"}"#,
            Err(Error::InvalidNumberOfResults)
        ),
        case(
            r#"{"coordinates": [[-0.12, 51.5], [-0.13, 51.6]]}"#,
            Err(Error::ExpectedSingleCoordinate)
        )
    )]
    fn test_decode(json: &str, expected: Result<u32>) {
        let value: DynamicValue = json.parse().unwrap();
        let actual: Result<NearestParameters> = value.decode();
        assert_eq!(expected, actual.map(|params| params.number_of_results));
    }

    #[test]
    fn test_cardinality_override() {
        let value: DynamicValue = r#"{"coordinates": [[-0.12, 51.5], [-0.13, 51.6]]}"#.parse().unwrap();
        let params = NearestParameters::from_dynamic(&value, Cardinality::Multiple).unwrap();
        assert_eq!(2, params.base.coordinates.len());
    }
}
