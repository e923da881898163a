/* src/server/core/rust/src/vite/manifest.rs */

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::errors::DriftError;

/// One entry of a Vite build manifest. Unknown fields (src, isEntry, imports,
/// ...) are ignored; only the output file and its stylesheets matter here.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ManifestEntry {
  pub file: String,
  #[serde(default)]
  pub css: Vec<String>,
}

/// Parsed `manifest.json`: logical entry path -> content-hashed outputs.
/// Re-read on every resolution pass; deterministic per build.
#[derive(Debug, Clone)]
pub struct Manifest {
  entries: HashMap<String, ManifestEntry>,
}

impl Manifest {
  pub fn load(path: &Path) -> Result<Self, DriftError> {
    let content = std::fs::read_to_string(path).map_err(|_| {
      DriftError::asset_config(format!("no manifest found at {}", path.display()))
    })?;
    Self::parse(&content).map_err(|_| {
      DriftError::asset_config(format!("manifest {} contains invalid data", path.display()))
    })
  }

  pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
    let entries = serde_json::from_str(content)?;
    Ok(Self { entries })
  }

  pub fn get(&self, entry_path: &str) -> Option<&ManifestEntry> {
    self.entries.get(entry_path)
  }
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use super::*;

  const SAMPLE: &str = r#"{
    "src/main.jsx": {
      "file": "assets/main.abcd1234.js",
      "src": "src/main.jsx",
      "isEntry": true,
      "css": ["assets/main.9876.css"]
    },
    "src/admin.jsx": {
      "file": "assets/admin.ff00.js"
    }
  }"#;

  #[test]
  fn parse_reads_file_and_css() {
    let manifest = Manifest::parse(SAMPLE).unwrap();
    let entry = manifest.get("src/main.jsx").unwrap();
    assert_eq!(entry.file, "assets/main.abcd1234.js");
    assert_eq!(entry.css, vec!["assets/main.9876.css"]);
  }

  #[test]
  fn css_defaults_to_empty() {
    let manifest = Manifest::parse(SAMPLE).unwrap();
    assert!(manifest.get("src/admin.jsx").unwrap().css.is_empty());
  }

  #[test]
  fn missing_entry_is_none() {
    let manifest = Manifest::parse(SAMPLE).unwrap();
    assert!(manifest.get("src/ghost.jsx").is_none());
  }

  #[test]
  fn load_missing_file_is_asset_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Manifest::load(&dir.path().join("manifest.json")).unwrap_err();
    assert_eq!(err.code(), "ASSET_CONFIG");
    assert!(err.message().contains("no manifest found"));
  }

  #[test]
  fn load_invalid_json_is_asset_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("manifest.json");
    let mut f = std::fs::File::create(&path).unwrap();
    writeln!(f, "{{ not json").unwrap();

    let err = Manifest::load(&path).unwrap_err();
    assert_eq!(err.code(), "ASSET_CONFIG");
    assert!(err.message().contains("invalid data"));
  }
}
