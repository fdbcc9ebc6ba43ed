// Descriptive statistics

use crate::stats::StatisticsSummary;

pub(crate) fn summarize_impl(data: &[f64]) -> StatisticsSummary {
    let values: Vec<f64> = data.iter().copied().filter(|v| v.is_finite()).collect();
    if values.is_empty() {
        return StatisticsSummary::default();
    }

    let count = values.len() as f64;
    let total = values.iter().sum::<f64>();
    let average = total / count;

    let maximum = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let minimum = values.iter().copied().fold(f64::INFINITY, f64::min);

    // population variance: divide by n, not n - 1
    let variance = values
        .iter()
        .map(|&x| (x - average).powi(2))
        .sum::<f64>()
        / count;

    StatisticsSummary {
        average,
        maximum,
        minimum,
        standard_deviation: variance.sqrt(),
        total,
    }
}
