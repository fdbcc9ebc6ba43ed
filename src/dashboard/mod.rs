//! Text dashboard over an [`AnalyticsEngine`]
//!
//! The dashboard owns all display concerns: which series is selected, which
//! view is active, units, and rounding for display. It performs no analytics
//! of its own; every number comes from the engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::data::DEFAULT_SERIES;
use crate::engine::AnalyticsEngine;
use crate::error::{Error, Result};
use crate::vis::{BarChart, Chart, Sparkline};

/// Number of leading readings shown in the overview trend line
pub const TREND_WINDOW: usize = 50;

const UNIT: &str = "MW";

/// Available views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Key metrics, trend line and top consumers
    #[default]
    Overview,
    /// Forecast and statistical panel
    Predictions,
    /// Regional totals
    Regional,
}

impl ViewMode {
    /// All views in display order
    pub const ALL: [ViewMode; 3] = [ViewMode::Overview, ViewMode::Predictions, ViewMode::Regional];
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViewMode::Overview => "overview",
            ViewMode::Predictions => "predictions",
            ViewMode::Regional => "regional",
        };
        f.write_str(name)
    }
}

impl FromStr for ViewMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overview" => Ok(ViewMode::Overview),
            "predictions" => Ok(ViewMode::Predictions),
            "regional" => Ok(ViewMode::Regional),
            other => Err(Error::InvalidInput(format!("unknown view mode: {}", other))),
        }
    }
}

/// Selection held by the presentation layer between renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardState {
    /// Series shown in the per-series panels
    pub selected_series: String,
    /// Active view
    pub view_mode: ViewMode,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            selected_series: DEFAULT_SERIES.to_string(),
            view_mode: ViewMode::default(),
        }
    }
}

impl DashboardState {
    /// Change the selected series
    pub fn select(&mut self, series_name: impl Into<String>) {
        self.selected_series = series_name.into();
    }

    /// Change the active view
    pub fn switch_view(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
    }
}

/// Render the active view of `state`
pub fn render(engine: &AnalyticsEngine, state: &DashboardState) -> String {
    match state.view_mode {
        ViewMode::Overview => render_overview(engine, &state.selected_series),
        ViewMode::Predictions => render_predictions(engine, &state.selected_series),
        ViewMode::Regional => render_regional(engine),
    }
}

fn heading(title: &str) -> String {
    format!("== {} ==\n\n", title)
}

fn metric(name: &str, value: &str) -> String {
    format!("{:<22}{} {}\n", name, value, UNIT)
}

fn render_overview(engine: &AnalyticsEngine, series: &str) -> String {
    let stats = engine.statistics(series);
    let mut out = heading(&format!("Overview - {}", series));

    out.push_str(&metric("Average Consumption", &format!("{:.2}", stats.average)));
    out.push_str(&metric("Total Consumption", &format!("{:.0}", stats.total)));
    out.push_str(&metric("Peak Demand", &format!("{:.2}", stats.maximum)));
    out.push_str(&metric("Minimum Load", &format!("{:.2}", stats.minimum)));

    let readings: Vec<f64> = engine
        .table()
        .column(series)
        .unwrap_or_default()
        .into_iter()
        .take(TREND_WINDOW)
        .collect();
    out.push_str(&format!("\nConsumption trend: {}\n\n", Sparkline::new(&readings).render()));

    let top = engine.top_consumers();
    let labels: Vec<&str> = top.iter().map(|r| r.series_name.as_str()).collect();
    let totals: Vec<f64> = top.iter().map(|r| r.total).collect();
    out.push_str(
        &BarChart::new(&labels, &totals)
            .with_title(format!("Top {} Energy Consumers", top.len()))
            .render(),
    );

    out
}

fn render_predictions(engine: &AnalyticsEngine, series: &str) -> String {
    let result = engine.forecast(series);
    let stats = engine.statistics(series);
    let mut out = heading(&format!("Predictions - {}", series));

    out.push_str(&format!("{:<22}{}\n", "Trend Direction", result.trend));
    out.push_str(&metric("Slope (Daily Change)", &format!("{:.4}", result.slope)));
    out.push_str(&format!(
        "{:<22}{} Days\n",
        "Forecast Period",
        result.predictions.len()
    ));

    let values: Vec<f64> = result.predictions.iter().map(|p| p.value).collect();
    out.push_str(&format!("\nForecast: {}\n", Sparkline::new(&values).render()));
    if let (Some(first), Some(last)) = (result.predictions.first(), result.predictions.last()) {
        out.push_str(&format!(
            "  {} {:.2} .. {} {:.2}\n",
            first.label, first.value, last.label, last.value
        ));
    }

    out.push_str("\nStatistical Analysis\n");
    out.push_str(&format!("{:<22}{:.2}\n", "Mean", stats.average));
    out.push_str(&format!("{:<22}{:.2}\n", "Std Dev", stats.standard_deviation));
    out.push_str(&format!("{:<22}{:.2}\n", "Maximum", stats.maximum));
    out.push_str(&format!("{:<22}{:.2}\n", "Minimum", stats.minimum));
    out.push_str(&format!("{:<22}{:.2}\n", "Range", stats.range()));

    out
}

fn render_regional(engine: &AnalyticsEngine) -> String {
    let summaries = engine.regional_summary();
    let grand_total: f64 = summaries.iter().map(|s| s.total).sum();
    let mut out = heading("Regional");

    let labels: Vec<&str> = summaries.iter().map(|s| s.region.as_str()).collect();
    let totals: Vec<f64> = summaries.iter().map(|s| s.total).collect();
    out.push_str(&BarChart::new(&labels, &totals).with_title("Regional Comparison").render());

    out.push_str("\nRegional Summary\n");
    for summary in &summaries {
        out.push_str(&format!(
            "{:<12}{:>10.0} {}  {:>3} states  {:>3.0}%\n",
            summary.region,
            summary.total,
            UNIT,
            summary.member_count,
            summary.share(grand_total) * 100.0
        ));
    }

    out
}
