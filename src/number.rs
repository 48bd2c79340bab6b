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

use std::cmp::Ordering;
use std::fmt::Display;
use std::fmt::Formatter;

use ordered_float::OrderedFloat;
use serde::de;
use serde::de::Deserialize;
use serde::de::Deserializer;
use serde::de::Visitor;
use serde::ser;
use serde::ser::Serialize;
use serde::ser::Serializer;

/// Represents a JSON number.
///
/// Integers keep their exact value, everything else is stored as `f64`.
/// Comparison is numeric across representations, so `Int64(1)`,
/// `UInt64(1)` and `Float64(1.0)` are all equal.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// 64-bit signed integer, used for negative whole numbers
    Int64(i64),
    /// 64-bit unsigned integer, used for non-negative whole numbers
    UInt64(u64),
    /// 64-bit floating-point, for fractions and exponents
    Float64(f64),
}

impl<'de> Deserialize<'de> for Number {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct NumberVisitor;

        impl Visitor<'_> for NumberVisitor {
            type Value = Number;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a number (int64, uint64, or float64)")
            }

            fn visit_i64<E>(self, v: i64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Number::Int64(v))
            }

            fn visit_u64<E>(self, v: u64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Number::UInt64(v))
            }

            fn visit_f64<E>(self, v: f64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Number::Float64(v))
            }
        }
        deserializer.deserialize_any(NumberVisitor)
    }
}

impl Serialize for Number {
    /// Serializes the number as a JSON integer or float.
    ///
    /// NaN and infinities have no JSON text form and are reported as errors.
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Number::Int64(v) => serializer.serialize_i64(*v),
            Number::UInt64(v) => serializer.serialize_u64(*v),
            Number::Float64(v) if v.is_finite() => serializer.serialize_f64(*v),
            Number::Float64(v) => Err(ser::Error::custom(format!(
                "number {v} is not representable in JSON"
            ))),
        }
    }
}

impl Number {
    /// Returns the i64 representation of the number, if possible.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Int64(v) => Some(*v),
            Number::UInt64(v) => i64::try_from(*v).ok(),
            Number::Float64(_) => None,
        }
    }

    /// Returns the u64 representation of the number, if possible.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Number::Int64(v) => u64::try_from(*v).ok(),
            Number::UInt64(v) => Some(*v),
            Number::Float64(_) => None,
        }
    }

    /// Returns the f64 representation of the number.
    ///
    /// This may lose precision for integers beyond 2^53.
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int64(v) => *v as f64,
            Number::UInt64(v) => *v as f64,
            Number::Float64(v) => *v,
        }
    }

    pub fn is_finite(&self) -> bool {
        match self {
            Number::Float64(v) => v.is_finite(),
            _ => true,
        }
    }
}

impl Default for Number {
    #[inline]
    fn default() -> Self {
        Number::UInt64(0)
    }
}

impl PartialEq for Number {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    /// Compares the exact numeric values. NaN sorts above every other
    /// number, as `OrderedFloat` does.
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Number::Float64(l), Number::Float64(r)) => OrderedFloat(*l).cmp(&OrderedFloat(*r)),
            (Number::Float64(l), _) => cmp_int_float(other.as_i128(), *l).reverse(),
            (_, Number::Float64(r)) => cmp_int_float(self.as_i128(), *r),
            (_, _) => self.as_i128().cmp(&other.as_i128()),
        }
    }
}

impl Number {
    fn as_i128(&self) -> i128 {
        match self {
            Number::Int64(v) => *v as i128,
            Number::UInt64(v) => *v as i128,
            Number::Float64(v) => *v as i128,
        }
    }
}

// 2^64 and -2^63 bound every Int64 and UInt64 value.
const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;
const NEG_TWO_POW_63: f64 = -9_223_372_036_854_775_808.0;

/// Exact comparison of an integer with a float.
fn cmp_int_float(int: i128, float: f64) -> Ordering {
    if float.is_nan() || float >= TWO_POW_64 {
        return Ordering::Less;
    }
    if float < NEG_TWO_POW_63 {
        return Ordering::Greater;
    }
    // |trunc| < 2^64, so the cast is exact
    let whole = float.trunc();
    match int.cmp(&(whole as i128)) {
        Ordering::Equal => {
            let fraction = float - whole;
            if fraction > 0.0 {
                Ordering::Less
            } else if fraction < 0.0 {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        }
        ord => ord,
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Number::Int64(v) => {
                let mut buffer = itoa::Buffer::new();
                f.write_str(buffer.format(*v))
            }
            Number::UInt64(v) => {
                let mut buffer = itoa::Buffer::new();
                f.write_str(buffer.format(*v))
            }
            Number::Float64(v) => {
                let mut buffer = ryu::Buffer::new();
                f.write_str(buffer.format(*v))
            }
        }
    }
}
