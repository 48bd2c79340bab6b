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

use std::path::PathBuf;

use crate::bundle::Bundle;
use crate::de::parse_value;
use crate::error::Error;
use crate::error::Result;
use crate::json::JsonValue;
use crate::name::ResourceName;
use crate::value::Value;

/// Extension used when the requested file name has none.
pub const DEFAULT_EXTENSION: &str = "json";

/// Load and decode a JSON resource from `bundle`.
///
/// `file_name` is split into base name and extension (`json` when absent)
/// and resolved through the bundle. The decoded value is returned as is,
/// so a file holding a bare scalar yields that scalar.
///
/// # Errors
///
/// - [`Error::NotFound`] if the name is invalid or the bundle has no such resource.
/// - [`Error::Read`] if the resolved file cannot be read.
/// - [`Error::Decode`] if the file is not valid JSON.
pub fn load_json<B>(file_name: &str, bundle: &B) -> Result<Value>
where
    B: Bundle + ?Sized,
{
    let buf = read_resource(file_name, bundle)?;
    parse_value(&buf)
}

/// Load a JSON resource from `bundle` and classify it as a [`JsonValue`],
/// keeping the file contents as the raw bytes.
///
/// Fails the same way as [`load_json`].
pub fn load<B>(file_name: &str, bundle: &B) -> Result<JsonValue>
where
    B: Bundle + ?Sized,
{
    let buf = read_resource(file_name, bundle)?;
    JsonValue::from_vec(buf)
}

fn read_resource<B>(file_name: &str, bundle: &B) -> Result<Vec<u8>>
where
    B: Bundle + ?Sized,
{
    let name = ResourceName::parse(file_name)?.with_default_extension(DEFAULT_EXTENSION);
    let path = resolve(&name, bundle).ok_or_else(|| {
        tracing::debug!(%name, "resource not found in bundle");
        Error::not_found(file_name)
    })?;
    tracing::debug!(%name, path = %path.display(), "resolved resource");

    bundle
        .read(&path)
        .map_err(|source| Error::Read { path, source })
}

fn resolve<B>(name: &ResourceName, bundle: &B) -> Option<PathBuf>
where
    B: Bundle + ?Sized,
{
    let extension = name.extension().unwrap_or_default();
    bundle.resolve_path(name.base(), extension)
}
