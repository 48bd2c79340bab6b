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

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use jsonres::{load, load_json, Bundle, DirBundle, Error, JsonKind, Value};
use serde_json::json;
use tempfile::TempDir;

fn bundle_with(files: &[(&str, &str)]) -> (TempDir, DirBundle) {
    let dir = tempfile::tempdir().unwrap();
    for (name, content) in files {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
    let bundle = DirBundle::new(dir.path());
    (dir, bundle)
}

/// Resolves every name to a path that does not exist.
struct VanishingBundle;

impl Bundle for VanishingBundle {
    fn resolve_path(&self, base: &str, extension: &str) -> Option<PathBuf> {
        Some(PathBuf::from(format!("/nonexistent/{base}.{extension}")))
    }
}

/// Serves resources from memory.
struct MemoryBundle(BTreeMap<String, Vec<u8>>);

impl Bundle for MemoryBundle {
    fn resolve_path(&self, base: &str, extension: &str) -> Option<PathBuf> {
        let key = format!("{base}.{extension}");
        self.0.contains_key(&key).then(|| PathBuf::from(key))
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        let key = path.to_string_lossy();
        self.0
            .get(&*key)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, key.to_string()))
    }
}

#[test]
fn test_load_object() {
    let (_dir, bundle) = bundle_with(&[("config.json", r#"{"a": 1}"#)]);
    let value = load_json("config", &bundle).unwrap();
    assert_eq!(value, Value::from(json!({"a": 1})));

    let value = load_json("config.json", &bundle).unwrap();
    assert_eq!(value, Value::from(json!({"a": 1})));
}

#[test]
fn test_load_array() {
    let (_dir, bundle) = bundle_with(&[("list.json", r#"[{"x": 1}, {"x": 2}]"#)]);
    let value = load_json("list", &bundle).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0], Value::from(json!({"x": 1})));
    assert_eq!(items[1], Value::from(json!({"x": 2})));
}

#[test]
fn test_load_scalar() {
    let (_dir, bundle) = bundle_with(&[("version.json", "3")]);
    let value = load_json("version", &bundle).unwrap();
    assert_eq!(value.as_u64(), Some(3));

    let json = load("version", &bundle).unwrap();
    assert_eq!(json.kind(), JsonKind::None);
}

#[test]
fn test_load_other_extension_and_subdirectory() {
    let (_dir, bundle) = bundle_with(&[
        ("data.geojson", r#"{"type": "Feature"}"#),
        ("fixtures/users.json", r#"[{"id": 7}]"#),
    ]);
    let value = load_json("data.geojson", &bundle).unwrap();
    assert_eq!(value.get("type"), Some(&Value::from("Feature")));

    let json = load("fixtures/users", &bundle).unwrap();
    assert!(json.is_array());
    assert_eq!(json.raw(), br#"[{"id": 7}]"#);
    assert!(load_json("data", &bundle).unwrap_err().is_not_found());
}

#[test]
fn test_load_missing() {
    let (_dir, bundle) = bundle_with(&[("config.json", "{}")]);
    let err = load_json("missing", &bundle).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "resource `missing` not found");

    assert!(load("missing.json", &bundle).unwrap_err().is_not_found());
}

#[test]
fn test_load_invalid_names() {
    let (_dir, bundle) = bundle_with(&[("config.json", "{}")]);
    for name in ["", "/config.json", "../config", "a//config"] {
        let err = load_json(name, &bundle).unwrap_err();
        assert!(err.is_not_found(), "{name:?}");
    }
}

#[test]
fn test_load_malformed() {
    let (_dir, bundle) = bundle_with(&[("broken.json", r#"{"a": "#)]);
    let err = load_json("broken", &bundle).unwrap_err();
    assert!(err.is_decode());
    assert!(load("broken", &bundle).unwrap_err().is_decode());
}

#[test]
fn test_load_unreadable() {
    let err = load_json("config", &VanishingBundle).unwrap_err();
    match err {
        Error::Read { path, source } => {
            assert_eq!(path, PathBuf::from("/nonexistent/config.json"));
            assert_eq!(source.kind(), io::ErrorKind::NotFound);
        }
        other => panic!("expected read error, got {other:?}"),
    }
}

#[test]
fn test_load_custom_bundle() {
    let mut files = BTreeMap::new();
    files.insert("config.json".to_string(), br#"{"a": 1}"#.to_vec());
    let bundle: Arc<dyn Bundle> = Arc::new(MemoryBundle(files));

    let json = load("config", &bundle).unwrap();
    assert!(json.is_object());
    assert_eq!(json.as_object().get("a").and_then(Value::as_u64), Some(1));
    assert!(load_json("other", &bundle).unwrap_err().is_not_found());

    let boxed: Box<dyn Bundle> = Box::new(VanishingBundle);
    assert!(load_json("x", &boxed).unwrap_err().is_read());
}

#[test]
fn test_load_search_paths() {
    let (_base, base) = bundle_with(&[("config.json", r#"{"layer": "base"}"#)]);
    let (_overlay, overlay) = bundle_with(&[
        ("config.json", r#"{"layer": "overlay"}"#),
        ("extra.json", "[]"),
    ]);
    let bundle = DirBundle::new(&base.roots()[0]).with_search_path(&overlay.roots()[0]);

    let value = load_json("config", &bundle).unwrap();
    assert_eq!(value.get("layer"), Some(&Value::from("base")));
    assert!(load("extra", &bundle).unwrap().is_array());
}
