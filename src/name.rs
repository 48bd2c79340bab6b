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

use std::fmt::Display;
use std::fmt::Formatter;

use nom::bytes::complete::take_while1;
use nom::character::complete::char;
use nom::multi::separated_list1;
use nom::IResult;
use nom::Parser;

use crate::error::Error;
use crate::error::Result;

/// A logical resource name split into base name and extension.
///
/// `fixtures/config.json` has base `fixtures/config` and extension `json`.
/// The extension is taken from the final segment only, and a leading dot
/// does not start one, so `.env` has no extension.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct ResourceName {
    base: String,
    extension: Option<String>,
}

impl ResourceName {
    /// Parse a relative, `/`-separated resource name.
    ///
    /// Names that cannot identify a resource (empty, absolute, containing
    /// empty, `.` or `..` segments, backslashes or NUL) are reported as
    /// [`Error::NotFound`].
    pub fn parse(input: &str) -> Result<ResourceName> {
        let segments = match segments(input) {
            Ok((rest, segments)) if rest.is_empty() => segments,
            Ok(_) | Err(_) => return Err(Error::not_found(input)),
        };
        if segments.iter().any(|s| *s == "." || *s == "..") {
            return Err(Error::not_found(input));
        }

        let (dir, file) = match input.rfind('/') {
            Some(idx) => input.split_at(idx + 1),
            None => ("", input),
        };
        match file.rfind('.') {
            Some(idx) if idx > 0 && idx + 1 < file.len() => Ok(ResourceName {
                base: format!("{dir}{}", &file[..idx]),
                extension: Some(file[idx + 1..].to_string()),
            }),
            _ => Ok(ResourceName {
                base: input.to_string(),
                extension: None,
            }),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    /// Fill in `extension` when the name has none.
    pub fn with_default_extension(mut self, extension: &str) -> ResourceName {
        if self.extension.is_none() && !extension.is_empty() {
            self.extension = Some(extension.to_string());
        }
        self
    }
}

impl Display for ResourceName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.extension {
            Some(ext) => write!(f, "{}.{}", self.base, ext),
            None => write!(f, "{}", self.base),
        }
    }
}

fn segment(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c != '/' && c != '\\' && c != '\0').parse(input)
}

fn segments(input: &str) -> IResult<&str, Vec<&str>> {
    separated_list1(char('/'), segment).parse(input)
}
