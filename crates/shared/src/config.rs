//! Configuration types for the classroom runner

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Runner configuration (classroom.json)
///
/// Every field has a default so a partial file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassroomConfig {
    /// Directory holding data files
    pub data_dir: PathBuf,

    /// Inventory persistence file, relative to `data_dir`
    pub inventory_file: PathBuf,

    /// Student scores CSV, relative to `data_dir`
    pub grading_input: PathBuf,

    /// Grade report output, relative to `data_dir`
    pub grading_report: PathBuf,

    /// Default tracing filter when RUST_LOG is unset
    pub log_filter: String,
}

impl Default for ClassroomConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            inventory_file: PathBuf::from("inventory.json"),
            grading_input: PathBuf::from("students.csv"),
            grading_report: PathBuf::from("report.txt"),
            log_filter: "warn".to_string(),
        }
    }
}

impl ClassroomConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from `path` if given and present, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) if path.exists() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }

    pub fn inventory_path(&self) -> PathBuf {
        self.data_dir.join(&self.inventory_file)
    }

    pub fn grading_input_path(&self) -> PathBuf {
        self.data_dir.join(&self.grading_input)
    }

    pub fn grading_report_path(&self) -> PathBuf {
        self.data_dir.join(&self.grading_report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_parse_partial() {
        let json = r#"{
            "dataDir": "/var/classroom",
            "logFilter": "debug"
        }"#;

        let config: ClassroomConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/var/classroom"));
        assert_eq!(config.log_filter, "debug");
        assert_eq!(
            config.inventory_path(),
            PathBuf::from("/var/classroom/inventory.json")
        );
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let config = ClassroomConfig::load_or_default(Some(path.as_path())).unwrap();
        assert_eq!(config, ClassroomConfig::default());
        assert_eq!(ClassroomConfig::load_or_default(None).unwrap(), config);
    }

    #[test]
    fn test_default_log_filter_keeps_reports_quiet() {
        assert_eq!(ClassroomConfig::default().log_filter, "warn");

        let config: ClassroomConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("classroom.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = ClassroomConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }));
    }
}
