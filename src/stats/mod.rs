//! Descriptive statistics over a single series
//!
//! Statistics are always recomputed from the table; nothing here is mutated
//! in place. [`StatsCache`] can be layered on top to avoid recomputation when
//! the same series is requested repeatedly.

mod cache;
mod descriptive;

pub use cache::StatsCache;

use log::warn;
use serde::Serialize;

use crate::table::SeriesTable;

/// Summary statistics for one series
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSummary {
    /// Arithmetic mean
    pub average: f64,
    /// Largest reading
    pub maximum: f64,
    /// Smallest reading
    pub minimum: f64,
    /// Population standard deviation
    pub standard_deviation: f64,
    /// Sum of all readings
    pub total: f64,
}

impl StatisticsSummary {
    /// Difference between maximum and minimum
    pub fn range(&self) -> f64 {
        self.maximum - self.minimum
    }
}

/// Compute statistics for `series_name`
///
/// An unknown series, or one with no finite readings, yields the all-zero
/// summary.
///
/// # Example
/// ```rust
/// use energy_analytics::{compute_statistics, load_table};
///
/// let table = load_table(",A\nd1,2\nd2,4", 99);
/// let stats = compute_statistics(&table, "A");
/// assert_eq!(stats.average, 3.0);
/// assert_eq!(stats.total, 6.0);
/// ```
pub fn compute_statistics(table: &SeriesTable, series_name: &str) -> StatisticsSummary {
    match table.column(series_name) {
        Some(values) => summarize(&values),
        None => {
            warn!("Statistics requested for unknown series '{}'", series_name);
            StatisticsSummary::default()
        }
    }
}

/// Compute statistics over raw readings, ignoring non-finite entries
pub fn summarize(values: &[f64]) -> StatisticsSummary {
    descriptive::summarize_impl(values)
}
