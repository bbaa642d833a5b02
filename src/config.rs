//! Grid configuration
//!
//! Read from `~/.config/gridpad/config.yaml` or an explicit path. Files
//! ending in `.json` are parsed as JSON, everything else as YAML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::model::{CellValue, GridError, GridModel};
use crate::theme::Theme;

/// Startup configuration for a grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridConfig {
    /// Total number of cells
    #[serde(default = "default_cell_count")]
    pub cell_count: i64,

    /// Cells per row
    #[serde(default = "default_column_count")]
    pub column_count: i64,

    /// Values consumed in row-major order; `null` leaves a cell unset
    #[serde(default)]
    pub initial_values: Vec<Option<CellValue>>,

    /// Presentation-only settings, passed through untouched
    #[serde(default)]
    pub theme: Theme,
}

fn default_cell_count() -> i64 {
    4
}

fn default_column_count() -> i64 {
    2
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_count: default_cell_count(),
            column_count: default_column_count(),
            initial_values: Vec::new(),
            theme: Theme::default(),
        }
    }
}

/// Errors raised while reading a config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl GridConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Read a config file, choosing the format by extension
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let config = if is_json {
            Self::from_json(&content)
        } else {
            Self::from_yaml(&content)
        }?;

        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from an explicit path, or the default location
    ///
    /// An explicit path must load. A missing or broken file at the default
    /// location falls back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }

        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        match Self::from_path(&path) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!("Failed to load config at {}: {}", path.display(), e);
                Ok(Self::default())
            }
        }
    }

    /// Build the grid this config describes
    ///
    /// Negative counts are rejected the same way as zero.
    pub fn build_model(&self) -> Result<GridModel, GridError> {
        if self.column_count < 1 {
            return Err(GridError::InvalidColumnCount(self.column_count));
        }
        if self.cell_count < 0 {
            return Err(GridError::EmptyGrid);
        }
        let cell_count = usize::try_from(self.cell_count)
            .map_err(|_| GridError::TooManyCells(self.cell_count as u64))?;
        let column_count = usize::try_from(self.column_count)
            .map_err(|_| GridError::InvalidColumnCount(self.column_count))?;

        GridModel::new(cell_count, column_count, self.initial_values.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GridConfig::from_yaml("{}").unwrap();
        assert_eq!(config, GridConfig::default());
        assert_eq!(config.cell_count, 4);
        assert_eq!(config.column_count, 2);
    }

    #[test]
    fn test_camel_case_keys() {
        let config = GridConfig::from_yaml(
            "cellCount: 6\ncolumnCount: 3\ninitialValues: [1, null, hello, true]\n",
        )
        .unwrap();
        assert_eq!(config.cell_count, 6);
        assert_eq!(config.column_count, 3);
        assert_eq!(
            config.initial_values,
            vec![
                Some(CellValue::Number(1.0)),
                None,
                Some(CellValue::text("hello")),
                Some(CellValue::Bool(true)),
            ]
        );
    }

    #[test]
    fn test_json() {
        let config =
            GridConfig::from_json(r#"{"cellCount": 2, "columnCount": 1, "theme": {"gap": 4}}"#)
                .unwrap();
        assert_eq!(config.cell_count, 2);
        assert_eq!(config.theme.len(), 1);
    }

    #[test]
    fn test_build_model_rejects_bad_columns() {
        let config = GridConfig {
            column_count: 0,
            ..GridConfig::default()
        };
        assert_eq!(
            config.build_model().unwrap_err(),
            GridError::InvalidColumnCount(0)
        );

        let config = GridConfig {
            column_count: -3,
            ..GridConfig::default()
        };
        assert_eq!(
            config.build_model().unwrap_err(),
            GridError::InvalidColumnCount(-3)
        );
    }

    #[test]
    fn test_build_model_rejects_empty_grid() {
        for cell_count in [0, -1] {
            let config = GridConfig {
                cell_count,
                ..GridConfig::default()
            };
            assert_eq!(config.build_model().unwrap_err(), GridError::EmptyGrid);
        }
    }

    #[test]
    fn test_build_model_rejects_huge_cell_count() {
        let config = GridConfig {
            cell_count: i64::MAX,
            column_count: 1,
            ..GridConfig::default()
        };
        assert_eq!(
            config.build_model().unwrap_err(),
            GridError::TooManyCells(i64::MAX as u64)
        );
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            GridConfig::from_yaml("cellCount: [nope"),
            Err(ConfigError::Parse(_))
        ));
    }
}
