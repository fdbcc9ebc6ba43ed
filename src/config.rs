//! Engine configuration
//!
//! Configuration can be built in code ([`EngineConfigBuilder`]) or loaded from
//! TOML, YAML or JSON. Every field is optional in files; absent fields take
//! the defaults below.
//!
//! ```toml
//! max_rows = 99
//! delimiter = ","
//! horizon = 30
//! top_limit = 10
//!
//! [[regions]]
//! name = "North"
//! members = ["Punjab", "Haryana"]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::error::{Error, Result};
use crate::forecast::DEFAULT_HORIZON;
use crate::region::{RegionMap, DEFAULT_TOP_LIMIT};
use crate::table::{LoadOptions, DEFAULT_MAX_ROWS};

/// Settings shared by all engine operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum number of data rows loaded
    pub max_rows: usize,
    /// Field delimiter (ASCII)
    pub delimiter: char,
    /// Number of forecast steps
    pub horizon: usize,
    /// Length of the top-consumer ranking
    pub top_limit: usize,
    /// Region groups used for aggregation
    pub regions: RegionMap,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            delimiter: ',',
            horizon: DEFAULT_HORIZON,
            top_limit: DEFAULT_TOP_LIMIT,
            regions: RegionMap::india(),
        }
    }
}

impl EngineConfig {
    /// Parse a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a YAML document
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON document
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file, choosing the format from its extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(Error::Io)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("toml") => Self::from_toml_str(&text),
            Some("yaml") | Some("yml") => Self::from_yaml_str(&text),
            Some("json") => Self::from_json_str(&text),
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Check field constraints
    pub fn validate(&self) -> Result<()> {
        if self.max_rows == 0 {
            return Err(Error::InvalidConfig("max_rows must be at least 1".into()));
        }
        if !self.delimiter.is_ascii() {
            return Err(Error::InvalidConfig(format!(
                "delimiter must be an ASCII character, got {:?}",
                self.delimiter
            )));
        }

        let mut seen = HashSet::new();
        for group in self.regions.groups() {
            if group.name.trim().is_empty() {
                return Err(Error::InvalidConfig("region name must not be empty".into()));
            }
            if !seen.insert(group.name.as_str()) {
                return Err(Error::InvalidConfig(format!(
                    "duplicate region name: {}",
                    group.name
                )));
            }
        }

        Ok(())
    }

    /// Loader options derived from this configuration
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            max_rows: self.max_rows,
            // validate() guarantees ASCII; fall back to the default otherwise
            delimiter: u8::try_from(self.delimiter).unwrap_or(b','),
        }
    }
}

/// Builder for [`EngineConfig`]
#[derive(Debug, Clone, Default)]
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    /// Creates a new builder starting from the defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of data rows
    pub fn max_rows(mut self, max_rows: usize) -> Self {
        self.config.max_rows = max_rows;
        self
    }

    /// Sets the field delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.config.delimiter = delimiter;
        self
    }

    /// Sets the forecast horizon
    pub fn horizon(mut self, horizon: usize) -> Self {
        self.config.horizon = horizon;
        self
    }

    /// Sets the top-consumer ranking length
    pub fn top_limit(mut self, top_limit: usize) -> Self {
        self.config.top_limit = top_limit;
        self
    }

    /// Sets the region groups
    pub fn regions(mut self, regions: RegionMap) -> Self {
        self.config.regions = regions;
        self
    }

    /// Validates and returns the configuration
    pub fn build(self) -> Result<EngineConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
