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

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned while decoding, encoding or loading JSON resources.
#[derive(Debug, Error)]
pub enum Error {
    /// The named resource does not exist in the bundle, or the name could
    /// not be parsed as a resource name at all.
    #[error("resource `{name}` not found")]
    NotFound { name: String },
    /// The resource was resolved but its bytes could not be read.
    #[error("failed to read `{}`: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The directory of the running executable could not be determined.
    #[error("cannot locate the running executable: {0}")]
    ExecutableDir(#[source] io::Error),
    /// The bytes are not valid JSON.
    #[error("invalid JSON: {0}")]
    Decode(#[source] serde_json::Error),
    /// The value cannot be written as JSON text.
    #[error("failed to encode JSON: {0}")]
    Encode(#[source] serde_json::Error),
}

impl Error {
    pub(crate) fn not_found(name: impl Into<String>) -> Self {
        Error::NotFound { name: name.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    pub fn is_read(&self) -> bool {
        matches!(self, Error::Read { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_))
    }

    pub fn is_encode(&self) -> bool {
        matches!(self, Error::Encode(_))
    }
}
