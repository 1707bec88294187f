//
//  logfire-cli
//  document/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Dashboard Documents on Disk
//!
//! Reading and writing dashboard YAML files, and the structural checks
//! behind `logfire-cli lint`.
//!
//! ## Submodules
//!
//! - [`validate`]: structural validation producing [`Issue`]s
//!
//! ## Notes
//!
//! - Documents are written with wire field names (`refreshInterval`),
//!   without absent optional fields, and in document order
//! - Loading requires a top-level mapping with string keys before the
//!   document is decoded into a [`Dashboard`]

mod validate;

pub use validate::*;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::Dashboard;

/// Errors raised while reading or writing dashboard files.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The file could not be read or written.
    #[error("{path}: {source}")]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The content is not valid YAML, or does not fit the dashboard model.
    #[error("Invalid dashboard YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The top-level YAML value is not a mapping.
    #[error("Invalid dashboard YAML: expected a mapping at the top level")]
    NotAMapping,

    /// A top-level key is not a string.
    #[error("Invalid dashboard YAML: expected all keys to be strings")]
    NonStringKey,

    /// The target file exists and overwriting was not requested.
    #[error("{0} already exists (use --force to overwrite)")]
    AlreadyExists(PathBuf),
}

/// Parses a dashboard from YAML text.
///
/// # Errors
///
/// - [`DocumentError::NotAMapping`] / [`DocumentError::NonStringKey`] for
///   documents that are not string-keyed mappings
/// - [`DocumentError::Yaml`] for syntax errors or shape mismatches
pub fn parse_dashboard(content: &str) -> Result<Dashboard, DocumentError> {
    let value: serde_yaml::Value = serde_yaml::from_str(content)?;
    let mapping = value.as_mapping().ok_or(DocumentError::NotAMapping)?;
    if !mapping.keys().all(|key| key.is_string()) {
        return Err(DocumentError::NonStringKey);
    }
    Ok(serde_yaml::from_value(value)?)
}

/// Reads a dashboard from a YAML file.
pub fn load_dashboard(path: &Path) -> Result<Dashboard, DocumentError> {
    let content = read_file(path)?;
    let dashboard = parse_dashboard(&content)?;
    tracing::debug!(path = %path.display(), name = %dashboard.metadata.name, "loaded dashboard");
    Ok(dashboard)
}

/// Renders a dashboard as YAML.
pub fn to_yaml(dashboard: &Dashboard) -> Result<String, DocumentError> {
    Ok(serde_yaml::to_string(dashboard)?)
}

/// Writes a dashboard to a YAML file.
///
/// Parent directories are created as needed. Unless `overwrite` is set, an
/// existing file is left alone and [`DocumentError::AlreadyExists`] is
/// returned.
pub fn write_dashboard(
    path: &Path,
    dashboard: &Dashboard,
    overwrite: bool,
) -> Result<(), DocumentError> {
    if !overwrite && path.exists() {
        return Err(DocumentError::AlreadyExists(path.to_path_buf()));
    }

    let yaml = to_yaml(dashboard)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| DocumentError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, yaml).map_err(|source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "wrote dashboard");
    Ok(())
}

/// Returns the default file name for a dashboard slug.
pub fn default_file_name(slug: &str) -> PathBuf {
    PathBuf::from(format!("{}.yaml", slug))
}

fn read_file(path: &Path) -> Result<String, DocumentError> {
    std::fs::read_to_string(path).map_err(|source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"
kind: Dashboard
metadata:
  name: test-dashboard
  project: test-project
spec:
  display:
    name: Test Dashboard
  panels:
    TestPanel:
      kind: Panel
      spec:
        display:
          name: Test Panel
        plugin:
          kind: TimeSeriesChart
          spec: {}
  layouts:
    - kind: Grid
      spec:
        items:
          - x: 0
            y: 0
            width: 12
            height: 6
            content:
              $ref: '#/spec/panels/TestPanel'
  duration: 1h
  refresh_interval: 5m
"#;

    #[test]
    fn test_parse_accepts_semantic_names() {
        let dashboard = parse_dashboard(SAMPLE).unwrap();
        assert_eq!(dashboard.metadata.name, "test-dashboard");
        assert_eq!(dashboard.spec.refresh_interval, "5m");
        assert_eq!(dashboard.spec.layouts.len(), 1);
    }

    #[test]
    fn test_output_uses_wire_names() {
        let dashboard = parse_dashboard(SAMPLE).unwrap();
        let yaml = to_yaml(&dashboard).unwrap();
        assert!(yaml.contains("refreshInterval: 5m"));
        assert!(!yaml.contains("refresh_interval"));
        assert!(!yaml.contains("version"));
    }

    #[test]
    fn test_rejects_non_mapping() {
        assert!(matches!(
            parse_dashboard("- a\n- b\n"),
            Err(DocumentError::NotAMapping)
        ));
    }

    #[test]
    fn test_rejects_non_string_keys() {
        assert!(matches!(
            parse_dashboard("1: one\nkind: Dashboard\n"),
            Err(DocumentError::NonStringKey)
        ));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("dash.yaml");

        let mut original = Dashboard::scaffold("Round Trip", Some("proj"));
        original.metadata.version = Some(2);
        original.metadata.updated_at = Some("2024-01-02T00:00:00Z".to_string());

        write_dashboard(&path, &original, false).unwrap();
        let loaded = load_dashboard(&path).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_refuses_to_overwrite() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dash.yaml");
        let dashboard = Dashboard::new("a", "A");

        write_dashboard(&path, &dashboard, false).unwrap();
        assert!(matches!(
            write_dashboard(&path, &dashboard, false),
            Err(DocumentError::AlreadyExists(_))
        ));
        write_dashboard(&path, &dashboard, true).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_dashboard(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, DocumentError::Io { .. }));
    }
}
