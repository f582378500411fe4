#![forbid(unsafe_code)]

//! Engine configuration.
//!
//! Every field has a default matching the standard dashboard grid, and the
//! struct deserializes with `#[serde(default)]` so partial config files work:
//!
//! ```
//! use gridboard_layout::GridConfig;
//!
//! let config: GridConfig = serde_json::from_str(r#"{"columns": 24}"#).unwrap();
//! assert_eq!(config.columns, 24);
//! assert_eq!(config.scan_rows, 100);
//! ```

use std::fmt;

use gridboard_core::DEFAULT_COLUMNS;
use serde::{Deserialize, Serialize};

/// Widest grid the occupancy bitmask can represent.
pub const MAX_COLUMNS: u16 = 64;

/// Default number of rows scanned by the empty-space finder.
pub const DEFAULT_SCAN_ROWS: u16 = 100;

/// Default cap on cascading reflow passes.
pub const DEFAULT_MAX_REFLOW_ITERATIONS: u16 = 10;

/// Environment variable overriding [`GridConfig::columns`].
pub const ENV_COLUMNS: &str = "GRIDBOARD_COLUMNS";
/// Environment variable overriding [`GridConfig::scan_rows`].
pub const ENV_SCAN_ROWS: &str = "GRIDBOARD_SCAN_ROWS";
/// Environment variable overriding [`GridConfig::max_reflow_iterations`].
pub const ENV_MAX_REFLOW_ITERATIONS: &str = "GRIDBOARD_MAX_REFLOW_ITERATIONS";

/// Configuration for the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Fixed column count of the grid.
    pub columns: u16,
    /// Rows covered by the occupancy scan before placement falls back to
    /// appending below all content.
    pub scan_rows: u16,
    /// Maximum cascade passes per reflow. Zero disables cascading: only the
    /// widgets hit directly by the resized widget are pushed.
    pub max_reflow_iterations: u16,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            scan_rows: DEFAULT_SCAN_ROWS,
            max_reflow_iterations: DEFAULT_MAX_REFLOW_ITERATIONS,
        }
    }
}

impl GridConfig {
    /// Set the column count.
    #[must_use]
    pub fn with_columns(mut self, columns: u16) -> Self {
        self.columns = columns;
        self
    }

    /// Set the number of scanned rows.
    #[must_use]
    pub fn with_scan_rows(mut self, scan_rows: u16) -> Self {
        self.scan_rows = scan_rows;
        self
    }

    /// Set the cascade pass cap.
    #[must_use]
    pub fn with_max_reflow_iterations(mut self, iterations: u16) -> Self {
        self.max_reflow_iterations = iterations;
        self
    }

    /// Check that the configuration can drive the engine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        if self.columns > MAX_COLUMNS {
            return Err(ConfigError::TooManyColumns {
                columns: self.columns,
            });
        }
        if self.scan_rows == 0 {
            return Err(ConfigError::ZeroScanRows);
        }
        Ok(())
    }

    /// Defaults overlaid with `GRIDBOARD_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().overlay_env(|key| std::env::var(key).ok())
    }

    /// Overlay values from a variable lookup onto this config, then validate.
    ///
    /// Unset variables keep the current value.
    pub fn overlay_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |var: &'static str, current: u16| -> Result<u16, ConfigError> {
            match lookup(var) {
                Some(value) => value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidEnv { var, value }),
                None => Ok(current),
            }
        };
        self.columns = read(ENV_COLUMNS, self.columns)?;
        self.scan_rows = read(ENV_SCAN_ROWS, self.scan_rows)?;
        self.max_reflow_iterations = read(ENV_MAX_REFLOW_ITERATIONS, self.max_reflow_iterations)?;
        self.validate()?;
        Ok(self)
    }
}

/// Configuration validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroColumns,
    TooManyColumns { columns: u16 },
    ZeroScanRows,
    InvalidEnv { var: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroColumns => write!(f, "grid must have at least one column"),
            Self::TooManyColumns { columns } => {
                write!(f, "grid has {columns} columns (max {MAX_COLUMNS})")
            }
            Self::ZeroScanRows => write!(f, "empty-space scan must cover at least one row"),
            Self::InvalidEnv { var, value } => {
                write!(f, "{var}={value:?} is not a valid unsigned integer")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
