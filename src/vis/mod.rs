//! Text charts for terminal output
//!
//! Horizontal bar charts and sparklines used by the dashboard views.

mod bar;
mod sparkline;

pub use bar::{BarChart, BarChartConfig};
pub use sparkline::Sparkline;

/// Chart rendering trait
pub trait Chart {
    /// Render the chart to a string
    fn render(&self) -> String;
}

/// Character set used for bars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartStyle {
    /// Plain ASCII (`#`)
    Ascii,
    /// Unicode block characters
    #[default]
    Unicode,
}
