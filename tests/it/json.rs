// Copyright 2023 Datafuse Labs.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use jsonres::{parse_value, JsonKind, JsonValue, Number, Object, Value};
use serde_json::json;

fn object(json: serde_json::Value) -> Object {
    Value::from(json).into_object().unwrap()
}

fn test_classify(tests: Vec<(&str, JsonKind)>) {
    for (s, kind) in tests {
        let json = JsonValue::from_slice(s.as_bytes()).unwrap();
        assert_eq!(json.kind(), kind, "{s}");
    }
}

#[test]
fn test_from_slice_object() {
    let buf = br#"{"name": "jsonres", "tags": ["a", "b"], "n": 1.5}"#;
    let json = JsonValue::from_slice(buf).unwrap();
    assert!(json.is_object());
    assert_eq!(
        json.as_object(),
        &object(json!({"name": "jsonres", "tags": ["a", "b"], "n": 1.5}))
    );
    assert!(json.as_array().is_empty());
    assert_eq!(json.raw(), buf);
}

#[test]
fn test_from_slice_array_of_objects() {
    let buf = br#"[{"x": 1}, {"x": 2, "y": null}]"#;
    let json = JsonValue::from_slice(buf).unwrap();
    assert!(json.is_array());
    assert_eq!(
        json.as_array(),
        &[object(json!({"x": 1})), object(json!({"x": 2, "y": null}))]
    );
    assert!(json.as_object().is_empty());
    assert_eq!(json.raw(), buf);
}

#[test]
fn test_from_slice_none() {
    test_classify(vec![
        ("null", JsonKind::None),
        ("true", JsonKind::None),
        ("-12.5", JsonKind::None),
        (r#""text""#, JsonKind::None),
        ("[1, 2, 3]", JsonKind::None),
        (r#"[{"a": 1}, 2]"#, JsonKind::None),
        (r#"[{"a": 1}, [{"b": 2}]]"#, JsonKind::None),
        ("[null]", JsonKind::None),
    ]);

    let json = JsonValue::from_slice(b"[{}, 1]").unwrap();
    assert!(json.as_object().is_empty());
    assert!(json.as_array().is_empty());
}

#[test]
fn test_from_slice_empty_containers() {
    test_classify(vec![
        ("{}", JsonKind::Object),
        ("[]", JsonKind::Array),
        (" [ ] ", JsonKind::Array),
        (r#"[{}, {}]"#, JsonKind::Array),
    ]);
}

#[test]
fn test_from_slice_invalid() {
    let errors = vec!["", "   ", "{", r#"{"a" 1}"#, "[1,]", "{'a': 1}", "[] x", "NaN"];
    for s in errors {
        let res = JsonValue::from_slice(s.as_bytes());
        assert!(res.unwrap_err().is_decode(), "{s:?}");
    }
    assert!(JsonValue::from_slice(b"\"\xff\"").unwrap_err().is_decode());
}

#[test]
fn test_from_object_round_trip() {
    let body = object(json!({"a": 1, "b": [true, null], "c": {"d": "e"}}));
    let json = JsonValue::from_object(body.clone()).unwrap();
    assert!(json.is_object());
    assert_eq!(json.as_object(), &body);
    assert_eq!(json.raw(), br#"{"a":1,"b":[true,null],"c":{"d":"e"}}"#);
    assert_eq!(JsonValue::from_slice(json.raw()).unwrap(), json);
}

#[test]
fn test_from_array_round_trip() {
    let body = vec![object(json!({"x": 1})), object(json!({"x": -2}))];
    let json = JsonValue::from_array(body.clone()).unwrap();
    assert!(json.is_array());
    assert_eq!(json.as_array(), body.as_slice());
    assert_eq!(json.raw(), br#"[{"x":1},{"x":-2}]"#);

    let json = JsonValue::from_array(vec![]).unwrap();
    assert!(json.is_array());
    assert_eq!(json.raw(), b"[]");
}

#[test]
fn test_random_round_trip() {
    for _ in 0..64 {
        let body = Value::rand_object();
        let json = JsonValue::from_object(body.clone()).unwrap();
        assert_eq!(json.as_object(), &body);
        assert_eq!(JsonValue::from_slice(json.raw()).unwrap(), json);

        let body = vec![Value::rand_object(), Value::rand_object()];
        let json = JsonValue::from_array(body.clone()).unwrap();
        assert_eq!(json.as_array(), body.as_slice());
        assert_eq!(JsonValue::from_slice(json.raw()).unwrap(), json);
    }
}

#[test]
fn test_float_round_trip() {
    let floats: [f64; 5] = [30549.149352980818, 112155.1070256302, 0.1, 1.7976931348623157e308, 5e-324];
    for f in floats {
        let mut body = Object::new();
        body.insert("f".to_string(), Value::from(f));
        let json = JsonValue::from_object(body.clone()).unwrap();
        let decoded = JsonValue::from_slice(json.raw()).unwrap();
        assert_eq!(decoded.as_object(), &body, "{f}");
        assert!(matches!(
            decoded.as_object()["f"],
            Value::Number(Number::Float64(v)) if v.to_bits() == f.to_bits()
        ));
    }

    let json = JsonValue::from_slice(br#"{"f": 30549.149352980818}"#).unwrap();
    assert_eq!(json.as_object()["f"].as_f64(), Some(30549.149352980818));
}

#[test]
fn test_equality_beyond_f64_precision() {
    let odd = JsonValue::from_slice(br#"{"id":9007199254740993}"#).unwrap();
    let float = JsonValue::from_slice(br#"{"id":9007199254740992.0}"#).unwrap();
    let even = JsonValue::from_slice(br#"{"id":9007199254740992}"#).unwrap();
    assert_eq!(float, even);
    assert_ne!(odd, float);
    assert_ne!(odd, even);
}

#[test]
fn test_encode_failure_is_an_error() {
    let mut body = Object::new();
    body.insert("nan".to_string(), Value::Number(Number::Float64(f64::NAN)));
    assert!(JsonValue::from_object(body.clone()).unwrap_err().is_encode());
    assert!(JsonValue::from_array(vec![body]).unwrap_err().is_encode());

    let mut body = Object::new();
    body.insert(
        "deep".to_string(),
        Value::Array(vec![Value::Number(Number::Float64(f64::INFINITY))]),
    );
    assert!(JsonValue::from_object(body).unwrap_err().is_encode());
}

#[test]
fn test_structural_equality() {
    let decoded = JsonValue::from_slice(br#"{"a":1}"#).unwrap();
    let built = JsonValue::from_object(object(json!({"a": 1}))).unwrap();
    assert_eq!(decoded, built);

    // formatting and key order of the raw text do not matter
    let spaced = JsonValue::from_slice(b"{ \"b\": 2,\n  \"a\": 1.0 }").unwrap();
    let compact = JsonValue::from_slice(br#"{"a":1,"b":2}"#).unwrap();
    assert_eq!(spaced, compact);

    assert_ne!(
        JsonValue::from_slice(br#"{"a":1}"#).unwrap(),
        JsonValue::from_slice(br#"{"a":"1"}"#).unwrap()
    );
}

#[test]
fn test_empty_variants_are_not_equal() {
    // None, {} and [] all expose two empty views, but they are different values
    let none = JsonValue::from_slice(b"42").unwrap();
    let object = JsonValue::from_slice(b"{}").unwrap();
    let array = JsonValue::from_slice(b"[]").unwrap();

    assert!(none.as_object().is_empty() && none.as_array().is_empty());
    assert!(object.as_object().is_empty() && object.as_array().is_empty());
    assert!(array.as_object().is_empty() && array.as_array().is_empty());

    assert_ne!(none, object);
    assert_ne!(none, array);
    assert_ne!(object, array);
    assert_eq!(none, JsonValue::None);
    assert_eq!(none, JsonValue::default());
}

#[test]
fn test_conversions() {
    let json: JsonValue = r#"[{"k": "v"}]"#.parse().unwrap();
    assert_eq!(json.to_string(), r#"[{"k": "v"}]"#);
    assert_eq!(
        Value::from(json.clone()),
        parse_value(br#"[{"k": "v"}]"#).unwrap()
    );

    let from_vec = JsonValue::try_from(br#"{"k": "v"}"#.to_vec()).unwrap();
    let from_slice = JsonValue::try_from(&br#"{"k":"v"}"#[..]).unwrap();
    assert_eq!(from_vec, from_slice);
    assert!("{".parse::<JsonValue>().is_err());
}
