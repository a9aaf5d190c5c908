//! Host-side dynamic values.
//!
//! `DynamicValue` is the closed union every inbound argument is reduced to
//! before decoding. Decoders pattern-match on it instead of probing types
//! at runtime, and the result renderer produces it on the way out.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use indexmap::IndexMap;
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub mod error;

pub use error::Error;

/// Insertion-ordered mapping from keys to host values.
pub type Object = IndexMap<String, DynamicValue>;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DynamicValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<DynamicValue>),
    Object(Object),
}

impl DynamicValue {
    /// Looks up `key` when this value is an object.
    pub fn get(&self, key: &str) -> Option<&DynamicValue> {
        match self {
            DynamicValue::Object(object) => object.get(key),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, DynamicValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DynamicValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DynamicValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            DynamicValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[DynamicValue]> {
        match self {
            DynamicValue::Array(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            DynamicValue::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Returns the number if it is an integer representable as `u32`.
    ///
    /// Fractional, negative, non-finite and oversized numbers yield `None`.
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            DynamicValue::Number(n) if is_integral(*n) && (0.0..=u32::MAX as f64).contains(n) => {
                Some(*n as u32)
            }
            _ => None,
        }
    }

    /// Name of the variant, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            DynamicValue::Null => "null",
            DynamicValue::Bool(_) => "boolean",
            DynamicValue::Number(_) => "number",
            DynamicValue::String(_) => "string",
            DynamicValue::Array(_) => "array",
            DynamicValue::Object(_) => "object",
        }
    }
}

/// True for finite numbers without a fractional part.
pub fn is_integral(n: f64) -> bool {
    n.is_finite() && n.fract() == 0.0
}

/// Writes a number the way both host values and result trees print it.
///
/// Integral values that fit in `i64` are written without a fraction,
/// other finite values as floats and non-finite values as `null`.
pub fn serialize_number<S>(n: f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if !n.is_finite() {
        return serializer.serialize_unit();
    }
    if n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
        return serializer.serialize_i64(n as i64);
    }
    serializer.serialize_f64(n)
}

impl Serialize for DynamicValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            DynamicValue::Null => serializer.serialize_unit(),
            DynamicValue::Bool(b) => serializer.serialize_bool(*b),
            DynamicValue::Number(n) => serialize_number(*n, serializer),
            DynamicValue::String(s) => serializer.serialize_str(s),
            DynamicValue::Array(values) => {
                let mut seq = serializer.serialize_seq(Some(values.len()))?;
                for value in values {
                    seq.serialize_element(value)?;
                }
                seq.end()
            }
            DynamicValue::Object(object) => {
                let mut map = serializer.serialize_map(Some(object.len()))?;
                for (key, value) in object {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

struct DynamicValueVisitor;

impl<'de> Visitor<'de> for DynamicValueVisitor {
    type Value = DynamicValue;

    fn expecting(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "any JSON value")
    }

    fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E> {
        Ok(DynamicValue::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E> {
        Ok(DynamicValue::Number(v as f64))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E> {
        Ok(DynamicValue::Number(v as f64))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E> {
        Ok(DynamicValue::Number(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E> {
        Ok(DynamicValue::String(v.to_string()))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E> {
        Ok(DynamicValue::String(v))
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E> {
        Ok(DynamicValue::Null)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E> {
        Ok(DynamicValue::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        DynamicValue::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(value) = seq.next_element()? {
            values.push(value);
        }
        Ok(DynamicValue::Array(values))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut object = Object::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, DynamicValue>()? {
            object.insert(key, value);
        }
        Ok(DynamicValue::Object(object))
    }
}

impl<'de> Deserialize<'de> for DynamicValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DynamicValueVisitor)
    }
}

impl FromStr for DynamicValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_json::from_str(s)?)
    }
}

impl Display for DynamicValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{}", text)
    }
}

impl From<serde_json::Value> for DynamicValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => DynamicValue::Null,
            serde_json::Value::Bool(b) => DynamicValue::Bool(b),
            serde_json::Value::Number(n) => n.as_f64().map_or(DynamicValue::Null, DynamicValue::Number),
            serde_json::Value::String(s) => DynamicValue::String(s),
            serde_json::Value::Array(values) => {
                DynamicValue::Array(values.into_iter().map(DynamicValue::from).collect())
            }
            serde_json::Value::Object(map) => DynamicValue::Object(
                map.into_iter()
                    .map(|(key, value)| (key, DynamicValue::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for DynamicValue {
    fn from(value: bool) -> Self {
        DynamicValue::Bool(value)
    }
}

impl From<f64> for DynamicValue {
    fn from(value: f64) -> Self {
        DynamicValue::Number(value)
    }
}

impl From<&str> for DynamicValue {
    fn from(value: &str) -> Self {
        DynamicValue::String(value.to_string())
    }
}

impl From<String> for DynamicValue {
    fn from(value: String) -> Self {
        DynamicValue::String(value)
    }
}

impl From<Vec<DynamicValue>> for DynamicValue {
    fn from(values: Vec<DynamicValue>) -> Self {
        DynamicValue::Array(values)
    }
}

impl From<Object> for DynamicValue {
    fn from(object: Object) -> Self {
        DynamicValue::Object(object)
    }
}
