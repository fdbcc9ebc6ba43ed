mod common;

use energy_analytics::{
    compute_statistics, load_table, StatisticsSummary, StatsCache, DEFAULT_MAX_ROWS,
};

use common::{single_series, table_of};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-10
}

#[test]
fn test_statistics_reference_values() {
    let table = single_series(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
    let stats = compute_statistics(&table, "S");

    assert!(approx(stats.average, 5.0));
    assert!(approx(stats.standard_deviation, 2.0));
    assert!(approx(stats.maximum, 9.0));
    assert!(approx(stats.minimum, 2.0));
    assert!(approx(stats.total, 40.0));
}

#[test]
fn test_statistics_total_for_every_series() {
    let table = load_table(",A,B,C\nd1,0,N/A,\nd2,0,,x", DEFAULT_MAX_ROWS);
    for name in table.series_names() {
        let stats = compute_statistics(&table, name);
        assert_eq!(stats, StatisticsSummary::default());
    }
}

#[test]
fn test_statistics_unknown_series() {
    let table = single_series(&[1.0, 2.0]);
    assert_eq!(compute_statistics(&table, "nope"), StatisticsSummary::default());
}

#[test]
fn test_statistics_empty_table() {
    let table = load_table("", DEFAULT_MAX_ROWS);
    assert_eq!(compute_statistics(&table, "S"), StatisticsSummary::default());
}

#[test]
fn test_statistics_repeatable() {
    let table = table_of(&[("A", &[1.1, 2.2, 3.3]), ("B", &[9.0, 0.5, 4.25])]);
    let first = compute_statistics(&table, "B");
    let second = compute_statistics(&table, "B");
    assert_eq!(first.total.to_bits(), second.total.to_bits());
    assert_eq!(
        first.standard_deviation.to_bits(),
        second.standard_deviation.to_bits()
    );
}

#[test]
fn test_population_not_sample_deviation() {
    let table = single_series(&[1.0, 3.0]);
    let stats = compute_statistics(&table, "S");
    // sample estimator would give sqrt(2)
    assert!(approx(stats.standard_deviation, 1.0));
}

#[test]
fn test_negative_readings() {
    let table = single_series(&[-3.0, 1.0, 2.0]);
    let stats = compute_statistics(&table, "S");
    assert!(approx(stats.minimum, -3.0));
    assert!(approx(stats.total, 0.0));
    assert!(approx(stats.range(), 5.0));
}

#[test]
fn test_cache_is_transparent() {
    let table = table_of(&[("A", &[1.0, 2.0]), ("B", &[3.0, 5.0])]);
    let cache = StatsCache::new();
    for name in ["A", "B", "A", "missing"] {
        assert_eq!(cache.get(&table, name), compute_statistics(&table, name));
    }
    // unknown names are not stored
    assert_eq!(cache.len(), 2);
}
