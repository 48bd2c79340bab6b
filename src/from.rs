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

use core::iter::FromIterator;

use ordered_float::OrderedFloat;
use serde_json::Map as JsonMap;
use serde_json::Number as JsonNumber;
use serde_json::Value as SerdeJsonValue;

use crate::value::Object;
use crate::value::Value;
use crate::Number;

macro_rules! from_signed_integer {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(Number::Int64(n as i64))
                }
            }
        )*
    };
}

macro_rules! from_unsigned_integer {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(Number::UInt64(n as u64))
                }
            }
        )*
    };
}

macro_rules! from_float {
    ($($ty:ident)*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(Number::Float64(n as f64))
                }
            }
        )*
    };
}

from_signed_integer! {
    i8 i16 i32 i64 isize
}

from_unsigned_integer! {
    u8 u16 u32 u64 usize
}

from_float! {
    f32 f64
}

impl From<OrderedFloat<f64>> for Value {
    fn from(f: OrderedFloat<f64>) -> Self {
        Value::Number(Number::Float64(f.0))
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(f: bool) -> Self {
        Value::Bool(f)
    }
}

impl From<String> for Value {
    fn from(f: String) -> Self {
        Value::String(f)
    }
}

impl From<&str> for Value {
    fn from(f: &str) -> Self {
        Value::String(f.to_string())
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Value::Object(o)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(f: Vec<T>) -> Self {
        Value::Array(f.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    fn from(f: &[T]) -> Self {
        Value::Array(f.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::Array(iter.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Object(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Value::Null
    }
}

impl From<&SerdeJsonValue> for Value {
    fn from(value: &SerdeJsonValue) -> Self {
        match value {
            SerdeJsonValue::Null => Value::Null,
            SerdeJsonValue::Bool(v) => Value::Bool(*v),
            SerdeJsonValue::Number(v) => {
                if let Some(n) = v.as_u64() {
                    Value::Number(Number::UInt64(n))
                } else if let Some(n) = v.as_i64() {
                    Value::Number(Number::Int64(n))
                } else if let Some(n) = v.as_f64() {
                    Value::Number(Number::Float64(n))
                } else {
                    Value::Null
                }
            }
            SerdeJsonValue::String(v) => Value::String(v.clone()),
            SerdeJsonValue::Array(arr) => Value::Array(arr.iter().map(Value::from).collect()),
            SerdeJsonValue::Object(obj) => {
                let mut map = Object::new();
                for (k, v) in obj.iter() {
                    map.insert(k.to_string(), v.into());
                }
                Value::Object(map)
            }
        }
    }
}

impl From<SerdeJsonValue> for Value {
    fn from(value: SerdeJsonValue) -> Self {
        (&value).into()
    }
}

impl From<Value> for SerdeJsonValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => SerdeJsonValue::Null,
            Value::Bool(v) => SerdeJsonValue::Bool(v),
            Value::Number(v) => match v {
                Number::Int64(n) => SerdeJsonValue::Number(n.into()),
                Number::UInt64(n) => SerdeJsonValue::Number(n.into()),
                Number::Float64(n) => match JsonNumber::from_f64(n) {
                    Some(n) => SerdeJsonValue::Number(n),
                    // If the value is NaN or Infinity, fallback to NULL
                    None => SerdeJsonValue::Null,
                },
            },
            Value::String(v) => SerdeJsonValue::String(v),
            Value::Array(arr) => {
                SerdeJsonValue::Array(arr.into_iter().map(SerdeJsonValue::from).collect())
            }
            Value::Object(obj) => {
                let mut map = JsonMap::new();
                for (k, v) in obj {
                    map.insert(k, v.into());
                }
                SerdeJsonValue::Object(map)
            }
        }
    }
}
