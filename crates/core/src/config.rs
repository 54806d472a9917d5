//! Lot configuration via `lotkeeper.toml`
//!
//! A lot is sized once at construction. The config file only carries what is
//! needed to build one: its capacity and an optional name used as a log label.

use crate::error::{LotError, LotResult};
use crate::limits::validate_capacity;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file name.
pub const CONFIG_FILE_NAME: &str = "lotkeeper.toml";

/// Capacity used when the config omits one.
pub const DEFAULT_CAPACITY: usize = 10;

/// Lot configuration loaded from `lotkeeper.toml`.
///
/// # Example
///
/// ```toml
/// # Number of spots in the lot
/// capacity = 20
///
/// # Optional label attached to log events
/// name = "north"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotConfig {
    /// Number of spots in the lot.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Optional label attached to log events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

impl Default for LotConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            name: None,
        }
    }
}

impl LotConfig {
    /// Config for an unnamed lot of the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            name: None,
        }
    }

    /// Check the config against the capacity limits.
    pub fn validate(&self) -> LotResult<()> {
        validate_capacity(self.capacity)
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Lotkeeper configuration
#
# Number of spots in the lot (default: 10).
# Lots of capacity 0 or 1 are allowed but never fit an adjacent vehicle.
capacity = 10

# Optional label attached to log events.
# name = "north"
"#
    }

    /// Parse and validate config from TOML text.
    pub fn from_toml_str(content: &str) -> LotResult<Self> {
        let config: LotConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// capacity is out of range.
    pub fn from_file(path: &Path) -> LotResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LotError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            LotError::Config(msg) => LotError::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                msg
            )),
            other => other,
        })
    }
}
