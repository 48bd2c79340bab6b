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

use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use crate::de::parse_value;
use crate::error::Error;
use crate::error::Result;
use crate::ser::encode;
use crate::value::Object;
use crate::value::Value;

static EMPTY_OBJECT: Object = Object::new();

/// A JSON payload classified by its top-level shape.
///
/// The `Object` and `Array` variants keep the JSON text they were decoded
/// from (or encoded to) next to the decoded body. Arrays are only
/// recognised when every element is an object, anything else decodes to
/// `None`.
#[derive(Clone, Default)]
pub enum JsonValue {
    /// Valid JSON that is neither an object nor an array of objects.
    #[default]
    None,
    /// A top-level JSON object.
    Object { raw: Vec<u8>, body: Object },
    /// A top-level JSON array whose elements are all objects.
    Array { raw: Vec<u8>, body: Vec<Object> },
}

/// The shape of a [`JsonValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    None,
    Object,
    Array,
}

impl Display for JsonKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            JsonKind::None => write!(f, "none"),
            JsonKind::Object => write!(f, "object"),
            JsonKind::Array => write!(f, "array"),
        }
    }
}

impl JsonValue {
    /// Decode and classify JSON text, copying the buffer.
    pub fn from_slice(buf: &[u8]) -> Result<JsonValue> {
        Self::from_vec(buf.to_vec())
    }

    /// Decode and classify JSON text, taking ownership of the buffer.
    ///
    /// Returns [`Error::Decode`] if `raw` is not valid JSON. Valid JSON with
    /// another top-level shape (a scalar, `null`, or an array holding a
    /// non-object element) is [`JsonValue::None`].
    pub fn from_vec(raw: Vec<u8>) -> Result<JsonValue> {
        let value = parse_value(&raw)?;
        let json = Self::classify(raw, value);
        tracing::debug!(kind = %json.kind(), len = json.raw().len(), "classified JSON payload");
        Ok(json)
    }

    /// Wrap an in-memory object, encoding it to JSON text.
    pub fn from_object(body: Object) -> Result<JsonValue> {
        let raw = encode(&body)?;
        Ok(JsonValue::Object { raw, body })
    }

    /// Wrap an in-memory array of objects, encoding it to JSON text.
    pub fn from_array(body: Vec<Object>) -> Result<JsonValue> {
        let raw = encode(&body)?;
        Ok(JsonValue::Array { raw, body })
    }

    fn classify(raw: Vec<u8>, value: Value) -> JsonValue {
        match value {
            Value::Object(body) => JsonValue::Object { raw, body },
            Value::Array(items) if items.iter().all(Value::is_object) => {
                let body = items.into_iter().filter_map(Value::into_object).collect();
                JsonValue::Array { raw, body }
            }
            _ => JsonValue::None,
        }
    }

    pub fn kind(&self) -> JsonKind {
        match self {
            JsonValue::None => JsonKind::None,
            JsonValue::Object { .. } => JsonKind::Object,
            JsonValue::Array { .. } => JsonKind::Array,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, JsonValue::None)
    }

    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object { .. })
    }

    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array { .. })
    }

    /// The object body, or an empty object for any other variant.
    pub fn as_object(&self) -> &Object {
        match self {
            JsonValue::Object { body, .. } => body,
            _ => &EMPTY_OBJECT,
        }
    }

    /// The array body, or an empty slice for any other variant.
    pub fn as_array(&self) -> &[Object] {
        match self {
            JsonValue::Array { body, .. } => body,
            _ => &[],
        }
    }

    /// The JSON text backing this value, empty for `None`.
    pub fn raw(&self) -> &[u8] {
        match self {
            JsonValue::None => &[],
            JsonValue::Object { raw, .. } | JsonValue::Array { raw, .. } => raw,
        }
    }

    /// Drop the raw text and return the decoded body. `None` becomes `Value::Null`.
    pub fn into_value(self) -> Value {
        match self {
            JsonValue::None => Value::Null,
            JsonValue::Object { body, .. } => Value::Object(body),
            JsonValue::Array { body, .. } => {
                Value::Array(body.into_iter().map(Value::Object).collect())
            }
        }
    }
}

impl PartialEq for JsonValue {
    /// Compares variants and decoded bodies. Raw text is ignored.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (JsonValue::None, JsonValue::None) => true,
            (JsonValue::Object { body: b1, .. }, JsonValue::Object { body: b2, .. }) => b1 == b2,
            (JsonValue::Array { body: b1, .. }, JsonValue::Array { body: b2, .. }) => b1 == b2,
            (_, _) => false,
        }
    }
}

impl Eq for JsonValue {}

impl Debug for JsonValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            JsonValue::None => f.write_str("None"),
            JsonValue::Object { raw, body } => f
                .debug_struct("Object")
                .field("raw_len", &raw.len())
                .field("body", body)
                .finish(),
            JsonValue::Array { raw, body } => f
                .debug_struct("Array")
                .field("raw_len", &raw.len())
                .field("body", body)
                .finish(),
        }
    }
}

impl Display for JsonValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.raw()))
    }
}

impl TryFrom<&[u8]> for JsonValue {
    type Error = Error;

    fn try_from(buf: &[u8]) -> Result<Self> {
        JsonValue::from_slice(buf)
    }
}

impl TryFrom<Vec<u8>> for JsonValue {
    type Error = Error;

    fn try_from(buf: Vec<u8>) -> Result<Self> {
        JsonValue::from_vec(buf)
    }
}

impl FromStr for JsonValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        JsonValue::from_slice(s.as_bytes())
    }
}

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        json.into_value()
    }
}
