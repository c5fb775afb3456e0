//! Driver configuration, read from TOML and overridden by the environment
//!
//! ```toml
//! [lowering]
//! jobs = 4
//!
//! [log]
//! filter = "ag_lower=debug"
//! format = "tree"
//! ```
//!
//! Every field has a default, so an empty file is a valid configuration.

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Overrides `log.filter`
pub const LOG_FILTER_VAR: &str = "AG_LOG";

/// Overrides `log.format`
pub const LOG_FORMAT_VAR: &str = "AG_LOG_FORMAT";

/// Top-level driver configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DriverConfig {
    /// How files are lowered
    pub lowering: LoweringConfig,

    /// Tracing output
    pub log: LogConfig,
}

/// Settings of the lowering stage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoweringConfig {
    /// Worker threads; `0` uses one per core, `1` lowers sequentially
    pub jobs: usize,
}

impl LoweringConfig {
    /// Whether files are lowered on a thread pool
    pub fn is_parallel(&self) -> bool {
        self.jobs != 1
    }
}

/// Settings of the tracing subscriber
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// Filter directives used when neither `AG_LOG` nor `RUST_LOG` is set
    pub filter: Option<String>,

    /// Output format
    pub format: LogFormat,
}

/// Tracing output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Flat text lines
    #[default]
    Text,
    /// Indented span tree via `tracing-tree`
    Tree,
    /// Newline-delimited JSON objects
    Json,
}

impl LogFormat {
    /// Parses a format name, ignoring case
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "tree" => Some(Self::Tree),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl DriverConfig {
    /// Loads the configuration at `path` and applies environment overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid
    /// configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;

        let mut config: Self = contents
            .parse()
            .with_context(|| format!("Failed to parse configuration file: {}", path.display()))?;
        config.apply_env();
        Ok(config)
    }

    /// Applies `AG_LOG` and `AG_LOG_FORMAT` from the process environment
    pub fn apply_env(&mut self) {
        self.apply_overrides(|name| env::var(name).ok());
    }

    /// Applies overrides looked up by variable name.
    ///
    /// An empty filter is ignored, as is a format that names no known format.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(filter) = lookup(LOG_FILTER_VAR).filter(|filter| !filter.trim().is_empty()) {
            self.log.filter = Some(filter);
        }
        if let Some(format) = lookup(LOG_FORMAT_VAR).as_deref().and_then(LogFormat::parse) {
            self.log.format = format;
        }
    }
}

impl FromStr for DriverConfig {
    type Err = toml::de::Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        toml::from_str(text)
    }
}
