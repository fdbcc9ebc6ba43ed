mod common;

use energy_analytics::data::SAMPLE_CSV;
use energy_analytics::{
    aggregate_regions, compute_statistics, load_table, top_consumers, RegionGroup, RegionMap,
    DEFAULT_MAX_ROWS, DEFAULT_TOP_LIMIT,
};

use common::table_of;

#[test]
fn test_regional_completeness() {
    let table = table_of(&[
        ("A", &[1.25, 2.5]),
        ("B", &[3.0, 4.0]),
        ("C", &[10.0, 0.5]),
        ("D", &[7.75, 1.0]),
    ]);
    let regions = RegionMap::new(vec![
        RegionGroup::new("First", ["A", "C"]),
        RegionGroup::new("Second", ["B"]),
        RegionGroup::new("Third", ["D"]),
    ]);

    let regional: f64 = aggregate_regions(&table, &regions).iter().map(|r| r.total).sum();
    let direct: f64 = table
        .series_names()
        .iter()
        .map(|s| compute_statistics(&table, s).total)
        .sum();
    assert!((regional - direct).abs() < 1e-9);
}

#[test]
fn test_sample_regions_cover_all_consumption() {
    let table = load_table(SAMPLE_CSV, DEFAULT_MAX_ROWS);
    let summaries = aggregate_regions(&table, &RegionMap::india());

    let regional: f64 = summaries.iter().map(|r| r.total).sum();
    let direct: f64 = table
        .series_names()
        .iter()
        .map(|s| compute_statistics(&table, s).total)
        .sum();
    assert!((regional - direct).abs() < 0.05);

    let central = summaries.iter().find(|r| r.region == "Central").unwrap();
    // Chhattisgarh + MP + Rajasthan
    assert!((central.total - 565.8).abs() < 1e-9);
    assert_eq!(central.member_count, 3);
}

#[test]
fn test_region_order_follows_declaration() {
    let table = table_of(&[("A", &[1.0])]);
    let regions = RegionMap::new(vec![
        RegionGroup::new("Zulu", ["A"]),
        RegionGroup::new("Alpha", Vec::<String>::new()),
    ]);
    let summaries = aggregate_regions(&table, &regions);
    assert_eq!(summaries[0].region, "Zulu");
    assert_eq!(summaries[1].region, "Alpha");
    assert_eq!(summaries[1].total, 0.0);
    assert_eq!(summaries[1].member_count, 0);
}

#[test]
fn test_member_count_is_nominal() {
    let table = table_of(&[("A", &[1.0])]);
    let regions = RegionMap::new(vec![RegionGroup::new("R", ["A", "Ghost", "Phantom"])]);
    let summaries = aggregate_regions(&table, &regions);
    assert_eq!(summaries[0].member_count, 3);
    assert_eq!(summaries[0].total, 1.0);
}

#[test]
fn test_region_totals_rounded() {
    let table = table_of(&[("A", &[0.123]), ("B", &[0.456])]);
    let regions = RegionMap::new(vec![RegionGroup::new("R", ["A", "B"])]);
    assert_eq!(aggregate_regions(&table, &regions)[0].total, 0.58);
}

#[test]
fn test_top_consumers_sorted_and_limited() {
    let table = load_table(SAMPLE_CSV, DEFAULT_MAX_ROWS);
    let ranks = top_consumers(&table, DEFAULT_TOP_LIMIT);

    assert_eq!(ranks.len(), 10);
    assert!(ranks.windows(2).all(|w| w[0].total >= w[1].total));
    assert_eq!(ranks[0].series_name, "Maharashtra");
    assert_eq!(ranks[1].series_name, "Gujarat");
    assert_eq!(ranks[2].series_name, "UP");
}

#[test]
fn test_top_consumers_fewer_series_than_limit() {
    let table = table_of(&[("A", &[1.0]), ("B", &[2.0])]);
    let ranks = top_consumers(&table, 10);
    assert_eq!(ranks.len(), 2);
    assert_eq!(ranks[0].series_name, "B");
    assert_eq!(ranks[0].average, 2.0);
}

#[test]
fn test_top_consumers_stable_ties() {
    let table = table_of(&[("C", &[1.0]), ("A", &[1.0]), ("B", &[1.0])]);
    let names: Vec<String> = top_consumers(&table, 10)
        .into_iter()
        .map(|r| r.series_name)
        .collect();
    assert_eq!(names, vec!["C", "A", "B"]);
}
