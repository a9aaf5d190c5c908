use serde::Serialize;

use crate::field::Choice;

/// Side of the road a coordinate may be approached from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Approach {
    Curb,
    Unrestricted,
}

impl Choice for Approach {
    const FIELD: &'static str = "approaches";
    const CHOICES: &'static [(&'static str, Self)] =
        &[("curb", Approach::Curb), ("unrestricted", Approach::Unrestricted)];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::field::choice;
    use kairo_dynamic::DynamicValue;
    use rstest::rstest;

    #[rstest(
        input,
        expected,
        case("curb", Some(Approach::Curb)),
        case("unrestricted", Some(Approach::Unrestricted)),
        case("Curb", None),
        case("", None)
    )]
    fn test_approach_from_name(input: &str, expected: Option<Approach>) {
        assert_eq!(expected, Approach::from_name(input));
    }

    #[test]
    fn test_approach_invalid_message() {
        let err = choice::<Approach>(&DynamicValue::from("left")).unwrap_err();
        assert!(matches!(err, Error::InvalidChoice { field: "approaches", .. }));
        assert_eq!(
            "'approaches' param must be one of [curb, unrestricted]",
            err.to_string()
        );
    }
}
