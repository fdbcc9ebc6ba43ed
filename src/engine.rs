//! Analytics engine facade
//!
//! Bundles a loaded table with its configuration and a statistics cache so a
//! presentation layer can issue repeated queries without recomputing series
//! totals. Every method delegates to the free functions of the crate and
//! returns exactly what they would.

use std::path::Path;

use crate::config::EngineConfig;
use crate::data::SAMPLE_CSV;
use crate::error::Result;
use crate::forecast::{forecast, ForecastResult};
use crate::region::{aggregate_regions_by, top_consumers_by, ConsumerRank, RegionalSummary};
use crate::stats::{StatisticsSummary, StatsCache};
use crate::table::{load_table_with, read_table, SeriesTable};

/// Read-only view over one table
#[derive(Debug)]
pub struct AnalyticsEngine {
    table: SeriesTable,
    config: EngineConfig,
    cache: StatsCache,
}

impl AnalyticsEngine {
    /// Engine over an empty table
    pub fn new(config: EngineConfig) -> Self {
        Self::from_table(SeriesTable::default(), config)
    }

    /// Engine over an already loaded table
    pub fn from_table(table: SeriesTable, config: EngineConfig) -> Self {
        Self {
            table,
            config,
            cache: StatsCache::new(),
        }
    }

    /// Parse `text` with the loader settings of `config`
    pub fn load(text: &str, config: EngineConfig) -> Self {
        let table = load_table_with(text, &config.load_options());
        Self::from_table(table, config)
    }

    /// Read a table file with the loader settings of `config`
    pub fn open<P: AsRef<Path>>(path: P, config: EngineConfig) -> Result<Self> {
        let table = read_table(path, &config.load_options())?;
        Ok(Self::from_table(table, config))
    }

    /// Engine over the bundled sample dataset with default settings
    pub fn sample() -> Self {
        Self::load(SAMPLE_CSV, EngineConfig::default())
    }

    /// The underlying table
    pub fn table(&self) -> &SeriesTable {
        &self.table
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Series names in header order
    pub fn series_names(&self) -> &[String] {
        self.table.series_names()
    }

    /// Cached statistics for one series
    pub fn statistics(&self, series_name: &str) -> StatisticsSummary {
        self.cache.get(&self.table, series_name)
    }

    /// Forecast over the configured horizon
    pub fn forecast(&self, series_name: &str) -> ForecastResult {
        self.forecast_with(series_name, self.config.horizon)
    }

    /// Forecast over an explicit horizon
    pub fn forecast_with(&self, series_name: &str, horizon: usize) -> ForecastResult {
        forecast(&self.table, series_name, horizon)
    }

    /// Regional totals for the configured region map
    pub fn regional_summary(&self) -> Vec<RegionalSummary> {
        aggregate_regions_by(&self.table, &self.config.regions, |name| {
            self.statistics(name)
        })
    }

    /// Top consumers limited by the configured ranking length
    pub fn top_consumers(&self) -> Vec<ConsumerRank> {
        top_consumers_by(&self.table, self.config.top_limit, |name| {
            self.statistics(name)
        })
    }

    /// Number of memoized statistics
    pub fn cached_statistics(&self) -> usize {
        self.cache.len()
    }
}
