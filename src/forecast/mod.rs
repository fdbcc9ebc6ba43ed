//! Linear trend forecasting
//!
//! Fits `y = intercept + slope * x` by ordinary least squares, where `x` is the
//! position of each finite reading within the series (non-finite readings are
//! dropped and do not consume a position), then projects the line forward.
//!
//! # Example
//!
//! ```rust
//! use energy_analytics::{forecast, load_table, Trend};
//!
//! let table = load_table(",A\nd1,1\nd2,2\nd3,3", 99);
//! let result = forecast(&table, "A", 2);
//! assert_eq!(result.trend, Trend::Increasing);
//! assert_eq!(result.predictions[0].value, 4.0);
//! assert_eq!(result.predictions[1].label, "Day 2");
//! ```

use log::{debug, warn};
use serde::Serialize;
use std::fmt;

use crate::table::SeriesTable;

/// Number of future points projected by default
pub const DEFAULT_HORIZON: usize = 30;

/// Direction of the fitted line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Trend {
    /// Positive slope
    Increasing,
    /// Negative slope
    Decreasing,
    /// Slope exactly zero
    Stable,
}

impl Trend {
    /// Classify a slope; no tolerance band is applied
    pub fn from_slope(slope: f64) -> Self {
        if slope > 0.0 {
            Trend::Increasing
        } else if slope < 0.0 {
            Trend::Decreasing
        } else {
            Trend::Stable
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Trend::Increasing => "Increasing",
            Trend::Decreasing => "Decreasing",
            Trend::Stable => "Stable",
        };
        f.write_str(name)
    }
}

/// One projected point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Prediction {
    /// "Day 1", "Day 2", ...
    pub label: String,
    /// Projected reading, never negative, rounded to 2 decimals
    pub value: f64,
}

/// Projection of a series over a horizon
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastResult {
    /// Projected points in order
    pub predictions: Vec<Prediction>,
    /// Slope of the fitted line (unrounded)
    pub slope: f64,
    /// Direction derived from the slope
    pub trend: Trend,
}

/// Fitted line
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearFit {
    /// Change per step
    pub slope: f64,
    /// Value at x = 0
    pub intercept: f64,
}

impl LinearFit {
    /// Evaluate the line at `x`
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Least-squares fit over `(i, values[i])`
///
/// Returns a zero line for an empty slice and a flat line through the single
/// value for a one-element slice.
pub fn fit_linear(values: &[f64]) -> LinearFit {
    match values {
        [] => LinearFit::default(),
        [only] => LinearFit {
            slope: 0.0,
            intercept: *only,
        },
        _ => {
            let n = values.len() as f64;
            let (mut sum_x, mut sum_y, mut sum_xy, mut sum_x2) = (0.0, 0.0, 0.0, 0.0);
            for (i, &y) in values.iter().enumerate() {
                let x = i as f64;
                sum_x += x;
                sum_y += y;
                sum_xy += x * y;
                sum_x2 += x * x;
            }

            let denominator = n * sum_x2 - sum_x * sum_x;
            let slope = if denominator == 0.0 {
                0.0
            } else {
                (n * sum_xy - sum_x * sum_y) / denominator
            };
            let intercept = (sum_y - slope * sum_x) / n;

            LinearFit { slope, intercept }
        }
    }
}

/// Project `series_name` `horizon` steps past its last finite reading
///
/// An unknown series behaves like a series without readings.
pub fn forecast(table: &SeriesTable, series_name: &str, horizon: usize) -> ForecastResult {
    let values: Vec<f64> = match table.column(series_name) {
        Some(column) => column.into_iter().filter(|v| v.is_finite()).collect(),
        None => {
            warn!("Forecast requested for unknown series '{}'", series_name);
            Vec::new()
        }
    };

    let fit = fit_linear(&values);
    let n = values.len();
    debug!(
        "Fitted '{}' over {} points: slope={}, intercept={}",
        series_name, n, fit.slope, fit.intercept
    );

    let predictions = (0..horizon)
        .map(|i| {
            let value = if n <= 1 {
                fit.intercept
            } else {
                fit.at((n + i) as f64).max(0.0)
            };
            Prediction {
                label: format!("Day {}", i + 1),
                value: round2(value),
            }
        })
        .collect();

    ForecastResult {
        predictions,
        slope: fit.slope,
        trend: Trend::from_slope(fit.slope),
    }
}

/// Round to 2 decimal places
///
/// Rounds the exact binary value, so `1.115` (stored just below 1.115)
/// becomes `1.11`. Exact half-cent values round away from zero.
pub(crate) fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scaled = value * 100.0;
    // exact half cents are multiples of 1/8
    let rounded = if (value * 8.0).fract() == 0.0 && scaled.fract().abs() == 0.5 {
        scaled.round() / 100.0
    } else {
        format!("{:.2}", value)
            .parse::<f64>()
            .unwrap_or_else(|_| scaled.round() / 100.0)
    };
    // normalise -0.0
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
