mod common;

use energy_analytics::{forecast, Row, SeriesTable, Trend, DEFAULT_HORIZON};

use common::single_series;

#[test]
fn test_single_point_forecast() {
    let result = forecast(&single_series(&[7.0]), "S", 3);
    let values: Vec<f64> = result.predictions.iter().map(|p| p.value).collect();
    assert_eq!(values, vec![7.0, 7.0, 7.0]);
    assert_eq!(result.slope, 0.0);
    assert_eq!(result.trend, Trend::Stable);
}

#[test]
fn test_increasing_series() {
    let result = forecast(&single_series(&[1.0, 2.0, 3.0, 4.0, 5.0]), "S", DEFAULT_HORIZON);
    assert!(result.slope > 0.0);
    assert_eq!(result.trend, Trend::Increasing);
    assert_eq!(result.predictions.len(), 30);
    assert_eq!(result.predictions[29].label, "Day 30");
    assert_eq!(result.predictions[29].value, 35.0);
}

#[test]
fn test_decreasing_series() {
    let result = forecast(&single_series(&[5.0, 4.0, 3.0, 2.0, 1.0]), "S", 3);
    assert!(result.slope < 0.0);
    assert_eq!(result.trend, Trend::Decreasing);
}

#[test]
fn test_non_negative_clamp() {
    let result = forecast(&single_series(&[100.0, 60.0, 20.0]), "S", 10);
    assert!(result.predictions.iter().all(|p| p.value >= 0.0));
    assert!(result.predictions.iter().any(|p| p.value == 0.0));
}

#[test]
fn test_empty_series_forecast() {
    let result = forecast(&single_series(&[]), "S", 4);
    assert_eq!(result.trend, Trend::Stable);
    assert_eq!(result.predictions.len(), 4);
    assert_eq!(result.predictions[0].label, "Day 1");
    assert!(result.predictions.iter().all(|p| p.value == 0.0));
}

#[test]
fn test_non_finite_readings_do_not_take_a_slot() {
    // 1, NaN, 3 regresses over (0,1),(1,3): slope 2
    let table = SeriesTable::from_rows(
        vec!["S".to_string()],
        vec![
            Row::new("d1", vec![1.0]),
            Row::new("d2", vec![f64::NAN]),
            Row::new("d3", vec![3.0]),
        ],
    );
    let result = forecast(&table, "S", 1);
    assert!((result.slope - 2.0).abs() < 1e-10);
    assert_eq!(result.predictions[0].value, 5.0);
}

#[test]
fn test_predictions_rounded() {
    let result = forecast(&single_series(&[1.0, 1.333, 1.666]), "S", 2);
    for p in &result.predictions {
        assert_eq!((p.value * 100.0).round() / 100.0, p.value);
    }
}

#[test]
fn test_forecast_serializes() {
    let result = forecast(&single_series(&[2.0, 4.0]), "S", 1);
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["trend"], "Increasing");
    assert_eq!(json["predictions"][0]["label"], "Day 1");
    assert_eq!(json["predictions"][0]["value"], 6.0);
}
