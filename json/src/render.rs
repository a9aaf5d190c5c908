//! Rendering result trees into host values or byte buffers.

use std::convert::Infallible;

use kairo::encoder::{EncodableTo, Encoder};
use kairo_dynamic::{self as dynamic, DynamicValue};

use crate::error::Error;
use crate::{Object, Value};

/// What the routing engine hands back: a result tree, or a payload that is
/// already serialized (vector tiles, for instance).
#[derive(Debug, Clone, PartialEq)]
pub enum ResultBody {
    Object(Object),
    Text(String),
}

/// Caller-visible output of a successful call.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Native(DynamicValue),
    Buffer(Vec<u8>),
}

/// Converts a result tree into the matching host value.
///
/// Keys, key order, element order and array lengths carry over exactly.
/// Every number becomes an `f64`.
pub fn render(value: &Value) -> DynamicValue {
    match value {
        Value::String(s) => DynamicValue::String(s.clone()),
        Value::Number(n) => DynamicValue::Number(*n),
        Value::Object(object) => render_object(object),
        Value::Array(array) => DynamicValue::Array(array.iter().map(render).collect()),
        Value::True => DynamicValue::Bool(true),
        Value::False => DynamicValue::Bool(false),
        Value::Null => DynamicValue::Null,
    }
}

pub fn render_object(object: &Object) -> DynamicValue {
    DynamicValue::Object(
        object
            .iter()
            .map(|(key, value)| (key.clone(), render(value)))
            .collect::<dynamic::Object>(),
    )
}

/// Renders a call result.
///
/// A tree becomes a host value, or its JSON text when `as_buffer` is set.
/// Pre-serialized text is always passed through as a buffer.
pub fn render_body(body: &ResultBody, as_buffer: bool) -> Result<Rendered, Error> {
    match body {
        ResultBody::Object(object) if as_buffer => Ok(Rendered::Buffer(serde_json::to_vec(object)?)),
        ResultBody::Object(object) => Ok(Rendered::Native(render_object(object))),
        ResultBody::Text(text) => Ok(Rendered::Buffer(text.as_bytes().to_vec())),
    }
}

impl EncodableTo<Value> for DynamicValue {}

impl Encoder<Value, DynamicValue> for Value {
    type Error = Infallible;

    fn encode(&self) -> Result<DynamicValue, Self::Error> {
        Ok(render(self))
    }
}

impl EncodableTo<Value> for Vec<u8> {}

impl Encoder<Value, Vec<u8>> for Value {
    type Error = Error;

    fn encode(&self) -> Result<Vec<u8>, Self::Error> {
        Ok(serde_json::to_vec(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Array;
    use rstest::rstest;

    fn route_tree() -> Object {
        let mut geometry = Object::new();
        geometry.insert("type", "LineString");
        geometry.insert(
            "coordinates",
            [
                Value::from([Value::Number(13.38), Value::Number(52.51)].into_iter().collect::<Array>()),
                Value::from([Value::Number(13.42), Value::Number(52.5)].into_iter().collect::<Array>()),
            ]
            .into_iter()
            .collect::<Array>(),
        );

        let mut route = Object::new();
        route.insert("geometry", geometry);
        route.insert("duration", 260.1);
        route.insert("legs", Array::new());

        let mut root = Object::new();
        root.insert("routes", [Value::from(route)].into_iter().collect::<Array>());
        root.insert("waypoints", Array::new());
        root.insert("alternative", false);
        root.insert("note", Value::Null);
        root
    }

    #[rstest(
        input,
        expected,
        case(Value::from("Berlin"), DynamicValue::String("Berlin".to_string())),
        case(Value::Number(42.0), DynamicValue::Number(42.0)),
        case(Value::True, DynamicValue::Bool(true)),
        case(Value::False, DynamicValue::Bool(false)),
        case(Value::Null, DynamicValue::Null),
        case(Value::Array(Array::new()), DynamicValue::Array(vec![]))
    )]
    fn test_render_leaf(input: Value, expected: DynamicValue) {
        assert_eq!(expected, render(&input));
    }

    #[test]
    fn test_render_is_structural_isomorphism() {
        let tree = route_tree();
        let expected: DynamicValue = r#"{
            "routes": [{
                "geometry": {"type": "LineString", "coordinates": [[13.38, 52.51], [13.42, 52.5]]},
                "duration": 260.1,
                "legs": []
            }],
            "waypoints": [],
            "alternative": false,
            "note": null
        }"#
        .parse()
        .unwrap();

        let rendered = render_object(&tree);
        assert_eq!(expected, rendered);

        let keys = rendered
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect::<Vec<_>>();
        assert_eq!(vec!["routes", "waypoints", "alternative", "note"], keys);
    }

    #[test]
    fn test_render_round_trip_is_idempotent() {
        let tree = Value::Object(route_tree());
        let first = render(&tree);
        let reencoded = Value::from(&first);
        let second = render(&reencoded);

        assert_eq!(tree, reencoded);
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_does_not_touch_input() {
        let tree = Value::Object(route_tree());
        let before = tree.clone();
        let _: DynamicValue = tree.encode().unwrap();
        assert_eq!(before, tree);
    }

    #[test]
    fn test_render_body_object_as_native() {
        let body = ResultBody::Object(route_tree());
        let rendered = render_body(&body, false).unwrap();
        assert_eq!(Rendered::Native(render_object(&route_tree())), rendered);
    }

    #[test]
    fn test_render_body_buffer_matches_serialized_native_value() {
        let body = ResultBody::Object(route_tree());

        let Rendered::Native(native) = render_body(&body, false).unwrap() else {
            panic!("expected a native value");
        };
        let Rendered::Buffer(buffer) = render_body(&body, true).unwrap() else {
            panic!("expected a buffer");
        };

        assert_eq!(serde_json::to_vec(&native).unwrap(), buffer);
    }

    #[rstest(as_buffer, case(false), case(true))]
    fn test_render_body_text_passes_through(as_buffer: bool) {
        let payload = "\u{1a}\u{0}binary-ish tile payload".to_string();
        let body = ResultBody::Text(payload.clone());
        assert_eq!(
            Rendered::Buffer(payload.into_bytes()),
            render_body(&body, as_buffer).unwrap()
        );
    }

    #[test]
    fn test_encode_to_bytes() {
        let mut object = Object::new();
        object.insert("distance", 0.5);
        object.insert("name", "");
        let bytes: Vec<u8> = Value::Object(object).encode().unwrap();
        assert_eq!(br#"{"distance":0.5,"name":""}"#.to_vec(), bytes);
    }
}
