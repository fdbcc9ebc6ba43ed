//! Energy consumption analytics
//!
//! Pure, deterministic transforms over a small tabular time series:
//!
//! - [`load_table`] parses delimited text into a [`SeriesTable`]
//! - [`compute_statistics`] summarizes one series
//! - [`forecast`] fits a least-squares line and projects it forward
//! - [`aggregate_regions`] and [`top_consumers`] roll series up by region
//!   and rank them
//!
//! [`AnalyticsEngine`] bundles a table with its configuration and a
//! statistics cache, and [`dashboard`] renders text views over it.
//!
//! # Example
//!
//! ```rust
//! use energy_analytics::{aggregate_regions, compute_statistics, forecast, load_table};
//! use energy_analytics::{RegionGroup, RegionMap, Trend};
//!
//! let table = load_table(",A,B\nd1,1,10\nd2,2,8\nd3,3,6", 99);
//!
//! let stats = compute_statistics(&table, "A");
//! assert_eq!(stats.total, 6.0);
//!
//! let result = forecast(&table, "B", 3);
//! assert_eq!(result.trend, Trend::Decreasing);
//!
//! let regions = RegionMap::new(vec![RegionGroup::new("All", ["A", "B"])]);
//! assert_eq!(aggregate_regions(&table, &regions)[0].total, 30.0);
//! ```

pub mod config;
pub mod dashboard;
pub mod data;
pub mod engine;
pub mod error;
pub mod forecast;
pub mod region;
pub mod stats;
pub mod table;
pub mod vis;

// Re-export commonly used types
pub use config::{EngineConfig, EngineConfigBuilder};
pub use engine::AnalyticsEngine;
pub use error::{Error, Result};
pub use forecast::{forecast, ForecastResult, Prediction, Trend, DEFAULT_HORIZON};
pub use region::{
    aggregate_regions, top_consumers, ConsumerRank, RegionGroup, RegionMap, RegionalSummary,
    DEFAULT_TOP_LIMIT,
};
pub use stats::{compute_statistics, StatisticsSummary, StatsCache};
pub use table::{load_table, read_table, LoadOptions, Row, SeriesTable, DEFAULT_MAX_ROWS};

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
