//! Shared field decoders.
//!
//! Every endpoint decoder is a sequence of these calls over the request
//! object. Each one checks the type first and the domain second, and
//! stops at the first problem.

use kairo_dynamic::{DynamicValue, Object, is_integral};

use crate::error::{Error, Field, Result};

/// A string-valued enumeration accepted by exact, case-sensitive match.
pub trait Choice: Sized + Copy + PartialEq + 'static {
    /// Key of the field in the request object.
    const FIELD: &'static str;
    /// Accepted spellings. Several spellings may map to the same value.
    const CHOICES: &'static [(&'static str, Self)];

    fn allowed() -> String {
        Self::CHOICES
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::CHOICES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, value)| *value)
    }

    /// First spelling of the value.
    fn name(&self) -> &'static str {
        Self::CHOICES
            .iter()
            .find(|(_, value)| value == self)
            .map(|(name, _)| *name)
            .unwrap_or_default()
    }
}

pub(crate) fn choice<T: Choice>(value: &DynamicValue) -> Result<T> {
    let name = value.as_str().ok_or_else(|| Error::ChoiceNotString {
        field: T::FIELD,
        allowed: T::allowed(),
    })?;
    T::from_name(name).ok_or_else(|| Error::InvalidChoice {
        field: T::FIELD,
        allowed: T::allowed(),
    })
}

pub(crate) fn optional_choice<T: Choice>(object: &Object) -> Result<Option<T>> {
    object.get(T::FIELD).map(choice).transpose()
}

pub(crate) fn object(value: &DynamicValue) -> Result<&Object> {
    value.as_object().ok_or(Error::ExpectedObject)
}

pub(crate) fn optional_bool(object: &Object, key: &'static str) -> Result<Option<bool>> {
    object
        .get(key)
        .map(|value| value.as_bool().ok_or(Error::ExpectedBoolean(key)))
        .transpose()
}

pub(crate) fn optional_number(object: &Object, key: &'static str) -> Result<Option<f64>> {
    object
        .get(key)
        .map(|value| value.as_f64().ok_or(Error::ExpectedNumber(key)))
        .transpose()
}

/// A number strictly greater than zero.
pub(crate) fn optional_positive(object: &Object, key: &'static str) -> Result<Option<f64>> {
    match optional_number(object, key)? {
        Some(n) if n > 0.0 => Ok(Some(n)),
        Some(_) => Err(Error::NotPositive(key)),
        None => Ok(None),
    }
}

pub(crate) fn optional_string<'a>(object: &'a Object, key: &'static str) -> Result<Option<&'a str>> {
    object
        .get(key)
        .map(|value| value.as_str().ok_or(Error::ExpectedString(key)))
        .transpose()
}

/// An integral number that fits in an `i32`.
pub(crate) fn optional_integral(object: &Object, key: &'static str) -> Result<Option<i32>> {
    object
        .get(key)
        .map(|value| {
            value
                .as_f64()
                .filter(|n| is_integral(*n))
                .filter(|n| (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(n))
                .map(|n| n as i32)
                .ok_or(Error::ExpectedIntegral(key))
        })
        .transpose()
}

/// A per-coordinate array. When the key is present the value must be an
/// array with exactly one entry per coordinate.
pub(crate) fn per_coordinate<'a>(
    object: &'a Object,
    field: Field,
    coordinate_count: usize,
) -> Result<Option<&'a [DynamicValue]>> {
    let Some(value) = object.get(field.key()) else {
        return Ok(None);
    };
    let values = value.as_array().ok_or(Error::NotAnArray(field))?;
    if values.len() != coordinate_count {
        return Err(Error::LengthMismatch(field));
    }
    Ok(Some(values))
}

/// Decodes every entry, keeping `null` as "no constraint for this
/// coordinate".
pub(crate) fn nullable<T>(
    values: &[DynamicValue],
    decode: impl Fn(&DynamicValue) -> Result<T>,
) -> Result<Vec<Option<T>>> {
    values
        .iter()
        .map(|value| {
            if value.is_null() {
                Ok(None)
            } else {
                decode(value).map(Some)
            }
        })
        .collect()
}
