//! Generic result trees.
//!
//! The routing engine reports every result as a `Value` tree. The tree is
//! built once by the engine, handed to exactly one render call and never
//! mutated by the renderer.

use indexmap::IndexMap;
use kairo_dynamic::{DynamicValue, serialize_number};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

pub mod error;
pub mod render;

pub use error::Error;
pub use render::{Rendered, ResultBody, render, render_body};

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Number(f64),
    Object(Object),
    Array(Array),
    True,
    False,
    Null,
}

/// Ordered mapping; iteration follows insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object {
    values: IndexMap<String, Value>,
}

impl Object {
    pub fn new() -> Self {
        Object::default()
    }

    /// Inserts `value` under `key`, keeping the original position when the
    /// key already exists.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Removes `key` while preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Object {
            values: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Array {
    values: Vec<Value>,
}

impl Array {
    pub fn new() -> Self {
        Array::default()
    }

    pub fn push(&mut self, value: impl Into<Value>) {
        self.values.push(value.into());
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Array {
            values: iter.into_iter().collect(),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        if value { Value::True } else { Value::False }
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

impl From<Array> for Value {
    fn from(value: Array) -> Self {
        Value::Array(value)
    }
}

// A host value maps back onto a tree one variant at a time; this is what
// lets a rendered value be re-encoded.
impl From<&DynamicValue> for Value {
    fn from(value: &DynamicValue) -> Self {
        match value {
            DynamicValue::Null => Value::Null,
            DynamicValue::Bool(b) => Value::from(*b),
            DynamicValue::Number(n) => Value::Number(*n),
            DynamicValue::String(s) => Value::String(s.clone()),
            DynamicValue::Array(values) => Value::Array(values.iter().map(Value::from).collect()),
            DynamicValue::Object(object) => Value::Object(
                object
                    .iter()
                    .map(|(key, value)| (key.clone(), Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Number(n) => serialize_number(*n, serializer),
            Value::Object(object) => object.serialize(serializer),
            Value::Array(array) => array.serialize(serializer),
            Value::True => serializer.serialize_bool(true),
            Value::False => serializer.serialize_bool(false),
            Value::Null => serializer.serialize_unit(),
        }
    }
}

impl Serialize for Object {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for Array {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self.iter() {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_object_remove_keeps_order() {
        let mut object = Object::new();
        object.insert("code", "Ok");
        object.insert("routes", Array::new());
        object.insert("message", "fine");
        object.insert("waypoints", Array::new());

        assert_eq!(Some(Value::from("Ok")), object.remove("code"));
        assert_eq!(None, object.remove("code"));

        let keys = object.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>();
        assert_eq!(vec!["routes", "message", "waypoints"], keys);
    }

    #[test]
    fn test_object_insert_existing_key_keeps_position() {
        let mut object = Object::new();
        object.insert("a", 1.0);
        object.insert("b", 2.0);
        assert_eq!(Some(Value::Number(1.0)), object.insert("a", 3.0));

        let entries = object
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect::<Vec<_>>();
        assert_eq!(
            vec![
                ("a".to_string(), Value::Number(3.0)),
                ("b".to_string(), Value::Number(2.0)),
            ],
            entries
        );
    }

    #[rstest(
        input,
        expected,
        case(Value::Number(1.0), "1"),
        case(Value::Number(13.388798), "13.388798"),
        case(Value::Number(f64::NAN), "null"),
        case(Value::True, "true"),
        case(Value::Null, "null"),
        case(Value::from("Ok"), r#""Ok""#)
    )]
    fn test_serialize_scalar(input: Value, expected: &str) {
        assert_eq!(expected, serde_json::to_string(&input).unwrap());
    }

    #[test]
    fn test_serialize_nested_tree() {
        let mut leg = Object::new();
        leg.insert("distance", 1886.3);
        leg.insert("steps", Array::new());
        let legs = [Value::from(leg)].into_iter().collect::<Array>();

        let mut route = Object::new();
        route.insert("legs", legs);
        route.insert("weight_name", "routability");

        assert_eq!(
            r#"{"legs":[{"distance":1886.3,"steps":[]}],"weight_name":"routability"}"#,
            serde_json::to_string(&route).unwrap()
        );
    }

    #[test]
    fn test_from_dynamic_value() {
        let host: DynamicValue = r#"{"ok": true, "items": [1, "two", null]}"#.parse().unwrap();
        let mut expected = Object::new();
        expected.insert("ok", Value::True);
        expected.insert(
            "items",
            [Value::Number(1.0), Value::from("two"), Value::Null]
                .into_iter()
                .collect::<Array>(),
        );
        assert_eq!(Value::Object(expected), Value::from(&host));
    }
}
