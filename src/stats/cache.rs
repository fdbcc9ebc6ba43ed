//! Memoized statistics keyed by (table version, series name)

use log::debug;
use std::cell::RefCell;
use std::collections::HashMap;

use super::{compute_statistics, StatisticsSummary};
use crate::table::SeriesTable;

/// Single-threaded memo cache for [`compute_statistics`]
///
/// Returns exactly what the uncached call would. Entries for a table version
/// stay valid forever because tables are immutable.
#[derive(Debug, Default)]
pub struct StatsCache {
    entries: RefCell<HashMap<(u64, String), StatisticsSummary>>,
}

impl StatsCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics for `series_name`, computed on first request
    ///
    /// Names missing from the table are answered but never stored.
    pub fn get(&self, table: &SeriesTable, series_name: &str) -> StatisticsSummary {
        if !table.has_series(series_name) {
            return compute_statistics(table, series_name);
        }

        let key = (table.version(), series_name.to_string());
        if let Some(summary) = self.entries.borrow().get(&key) {
            debug!("Statistics cache hit for '{}'", series_name);
            return *summary;
        }

        debug!("Statistics cache miss for '{}'", series_name);
        let summary = compute_statistics(table, series_name);
        self.entries.borrow_mut().insert(key, summary);
        summary
    }

    /// Number of cached summaries
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether the cache holds nothing
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Drop all cached summaries
    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::load_table;

    #[test]
    fn test_cache_matches_direct() {
        let table = load_table(",A,B\nd1,1,10\nd2,3,20", 99);
        let cache = StatsCache::new();

        assert_eq!(cache.get(&table, "A"), compute_statistics(&table, "A"));
        assert_eq!(cache.get(&table, "A"), compute_statistics(&table, "A"));
        assert_eq!(cache.len(), 1);

        cache.get(&table, "B");
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_cache_skips_unknown_series() {
        let table = load_table(",A\nd1,1", 99);
        let cache = StatsCache::new();

        for name in ["x", "y", "z"] {
            assert_eq!(cache.get(&table, name), StatisticsSummary::default());
        }
        assert!(cache.is_empty());

        cache.get(&table, "A");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_separates_versions() {
        let first = load_table(",A\nd1,1", 99);
        let second = load_table(",A\nd1,5", 99);
        let cache = StatsCache::new();

        assert_eq!(cache.get(&first, "A").total, 1.0);
        assert_eq!(cache.get(&second, "A").total, 5.0);
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }
}
