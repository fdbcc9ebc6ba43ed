//! Sparkline - a compact inline chart

use super::Chart;

/// Single-line chart of block characters
#[derive(Debug, Clone)]
pub struct Sparkline {
    values: Vec<f64>,
    min: Option<f64>,
    max: Option<f64>,
}

impl Sparkline {
    /// Block characters (8 levels)
    const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

    /// Create a new sparkline
    pub fn new(values: &[f64]) -> Self {
        Self {
            values: values.to_vec(),
            min: None,
            max: None,
        }
    }

    /// Set a custom range
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }
}

impl Chart for Sparkline {
    fn render(&self) -> String {
        if self.values.is_empty() {
            return String::new();
        }

        let min = self
            .min
            .unwrap_or_else(|| self.values.iter().cloned().fold(f64::INFINITY, f64::min));
        let max = self.max.unwrap_or_else(|| {
            self.values
                .iter()
                .cloned()
                .fold(f64::NEG_INFINITY, f64::max)
        });
        let range = if (max - min).abs() < f64::EPSILON {
            1.0
        } else {
            max - min
        };

        self.values
            .iter()
            .map(|&v| {
                let normalized = ((v - min) / range).clamp(0.0, 1.0);
                let idx = (normalized * 7.0).round() as usize;
                Self::BLOCKS[idx.min(7)]
            })
            .collect()
    }
}
