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

use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use crate::error::Error;
use crate::error::Result;

/// A place that named resource files can be looked up in.
pub trait Bundle {
    /// Resolve `base` and `extension` to the path of an existing resource.
    fn resolve_path(&self, base: &str, extension: &str) -> Option<PathBuf>;

    /// Read the full contents of a resolved resource.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }
}

impl<B: Bundle + ?Sized> Bundle for &B {
    fn resolve_path(&self, base: &str, extension: &str) -> Option<PathBuf> {
        (**self).resolve_path(base, extension)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        (**self).read(path)
    }
}

impl<B: Bundle + ?Sized> Bundle for Box<B> {
    fn resolve_path(&self, base: &str, extension: &str) -> Option<PathBuf> {
        (**self).resolve_path(base, extension)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        (**self).read(path)
    }
}

impl<B: Bundle + ?Sized> Bundle for Arc<B> {
    fn resolve_path(&self, base: &str, extension: &str) -> Option<PathBuf> {
        (**self).resolve_path(base, extension)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        (**self).read(path)
    }
}

/// A bundle of resource files under one or more directories.
///
/// Roots are searched in the order they were added and the first regular
/// file found wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirBundle {
    roots: Vec<PathBuf>,
}

impl DirBundle {
    pub fn new(root: impl Into<PathBuf>) -> DirBundle {
        DirBundle {
            roots: vec![root.into()],
        }
    }

    /// The directory holding the running executable.
    pub fn main() -> Result<DirBundle> {
        let exe = std::env::current_exe().map_err(Error::ExecutableDir)?;
        match exe.parent() {
            Some(dir) => Ok(DirBundle::new(dir)),
            None => Err(Error::ExecutableDir(io::Error::new(
                io::ErrorKind::NotFound,
                format!("`{}` has no parent directory", exe.display()),
            ))),
        }
    }

    /// Append another directory to search after the existing ones.
    pub fn with_search_path(mut self, dir: impl Into<PathBuf>) -> DirBundle {
        self.roots.push(dir.into());
        self
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}

impl Bundle for DirBundle {
    fn resolve_path(&self, base: &str, extension: &str) -> Option<PathBuf> {
        let file_name = if extension.is_empty() {
            base.to_string()
        } else {
            format!("{base}.{extension}")
        };
        self.roots
            .iter()
            .map(|root| root.join(&file_name))
            .find(|path| path.is_file())
    }
}
