//! Dashboard configuration, read from an optional YAML file.

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_DATA_PATH: &str = "data/daily_sales_data.csv";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Sales Dashboard".to_string(),
            width: 1200.0,
            height: 900.0,
        }
    }
}

/// Image size for `export --format png`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 600,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub window: WindowConfig,
    pub export: ExportConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            window: WindowConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

impl DashboardConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Defaults when no config file was given.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config = DashboardConfig::from_yaml(
            "data_path: other/sales.csv\nwindow:\n  width: 1600\n",
        )
        .unwrap();

        assert_eq!(config.data_path, PathBuf::from("other/sales.csv"));
        assert_eq!(config.window.width, 1600.0);
        assert_eq!(config.window.height, 900.0);
        assert_eq!(config.export, ExportConfig::default());
    }

    #[test]
    fn empty_or_missing_config_is_default() {
        assert_eq!(
            DashboardConfig::from_yaml("").unwrap(),
            DashboardConfig::default()
        );
        assert_eq!(
            DashboardConfig::load_or_default(None).unwrap().data_path,
            PathBuf::from(DEFAULT_DATA_PATH)
        );
    }

    #[test]
    fn unreadable_file_names_the_path() {
        let err = DashboardConfig::load("no/such/dashboard.yaml").unwrap_err();
        assert!(err.to_string().contains("no/such/dashboard.yaml"));
    }

    #[test]
    fn malformed_yaml_is_rejected() {
        assert!(matches!(
            DashboardConfig::from_yaml("window: [1, 2"),
            Err(ConfigError::Yaml(_))
        ));
    }
}
