//! Horizontal bar chart

use super::{Chart, ChartStyle};

/// Configuration for [`BarChart`]
#[derive(Debug, Clone)]
pub struct BarChartConfig {
    /// Total width in characters
    pub width: usize,
    /// Max label width
    pub label_width: usize,
    /// Show values after bars
    pub show_values: bool,
    /// Bar characters
    pub style: ChartStyle,
    /// Optional centred title
    pub title: Option<String>,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            width: 60,
            label_width: 14,
            show_values: true,
            style: ChartStyle::Unicode,
            title: None,
        }
    }
}

/// One labelled bar per value, scaled to the largest value
#[derive(Debug, Clone)]
pub struct BarChart {
    labels: Vec<String>,
    values: Vec<f64>,
    config: BarChartConfig,
}

impl BarChart {
    /// Create a bar chart with default configuration
    pub fn new<S: AsRef<str>>(labels: &[S], values: &[f64]) -> Self {
        Self::with_config(labels, values, BarChartConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config<S: AsRef<str>>(
        labels: &[S],
        values: &[f64],
        config: BarChartConfig,
    ) -> Self {
        Self {
            labels: labels.iter().map(|s| s.as_ref().to_string()).collect(),
            values: values.to_vec(),
            config,
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.config.title = Some(title.into());
        self
    }

    fn bar_char(&self) -> char {
        match self.config.style {
            ChartStyle::Ascii => '#',
            ChartStyle::Unicode => '█',
        }
    }
}

impl Chart for BarChart {
    fn render(&self) -> String {
        if self.values.is_empty() {
            return String::from("No data to display\n");
        }

        let mut output = String::new();
        let max_val = self
            .values
            .iter()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max);
        let bar_width = self
            .config
            .width
            .saturating_sub(self.config.label_width + 12);
        let bar_char = self.bar_char();

        if let Some(ref title) = self.config.title {
            output.push_str(&format!("{:^width$}\n\n", title, width = self.config.width));
        }

        for (label, &value) in self.labels.iter().zip(self.values.iter()) {
            let bar_len = if max_val > 0.0 && value > 0.0 {
                ((value / max_val * bar_width as f64).round() as usize).min(bar_width)
            } else {
                0
            };
            let bar: String = std::iter::repeat(bar_char).take(bar_len).collect();
            let label: String = label.chars().take(self.config.label_width).collect();

            if self.config.show_values {
                output.push_str(&format!(
                    "{:>label_width$} │{:<bar_width$}│ {:.2}\n",
                    label,
                    bar,
                    value,
                    label_width = self.config.label_width,
                    bar_width = bar_width
                ));
            } else {
                output.push_str(&format!(
                    "{:>label_width$} │{:<bar_width$}│\n",
                    label,
                    bar,
                    label_width = self.config.label_width,
                    bar_width = bar_width
                ));
            }
        }

        output
    }
}
