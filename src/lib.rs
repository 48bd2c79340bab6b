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

//! `jsonres` classifies JSON payloads by their top-level shape and loads
//! JSON resource files from bundles.
//!
//! ## Values
//!
//! Decoded JSON is represented by [`Value`], a recursive tagged union of
//! `null`, booleans, [`Number`]s, strings, arrays and objects. Text is
//! decoded with [`parse_value`] and encoded with [`to_vec`]; both go
//! through `serde_json`.
//!
//! [`JsonValue`] wraps a payload that is either an object or an array of
//! objects, together with the JSON text it came from:
//!
//! ```
//! use jsonres::JsonValue;
//!
//! let json = JsonValue::from_slice(br#"[{"id": 1}, {"id": 2}]"#).unwrap();
//! assert!(json.is_array());
//! assert_eq!(json.as_array().len(), 2);
//! assert!(json.as_object().is_empty());
//!
//! let json = JsonValue::from_slice(b"[1, 2]").unwrap();
//! assert!(json.is_none());
//! ```
//!
//! ## Resources
//!
//! A [`Bundle`] resolves a logical name such as `config.json` to a file.
//! [`DirBundle`] searches one or more directories; there is no implicit
//! global bundle, callers always pass one in.
//!
//! ```no_run
//! use jsonres::{load_json, DirBundle};
//!
//! let bundle = DirBundle::main().unwrap();
//! let config = load_json("config", &bundle).unwrap();
//! println!("{}", config);
//! ```

#![allow(clippy::uninlined_format_args)]

mod bundle;
mod de;
mod error;
mod from;
mod json;
mod loader;
mod name;
mod number;
mod ser;
mod value;

pub use bundle::Bundle;
pub use bundle::DirBundle;
pub use de::parse_value;
pub use error::Error;
pub use error::Result;
pub use json::JsonKind;
pub use json::JsonValue;
pub use loader::load;
pub use loader::load_json;
pub use loader::DEFAULT_EXTENSION;
pub use name::ResourceName;
pub use number::Number;
pub use ser::to_vec;
pub use value::*;
