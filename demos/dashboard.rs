//! Renders every dashboard view for a few series of the bundled dataset.

use energy_analytics::dashboard::{render, DashboardState, ViewMode};
use energy_analytics::AnalyticsEngine;

fn main() {
    let engine = AnalyticsEngine::sample();
    println!(
        "energy-analytics {}: {} series, {} rows\n",
        energy_analytics::VERSION,
        engine.series_names().len(),
        engine.table().len()
    );

    let mut state = DashboardState::default();
    for series in ["Punjab", "Maharashtra"] {
        state.select(series);
        for mode in [ViewMode::Overview, ViewMode::Predictions] {
            state.switch_view(mode);
            println!("{}", render(&engine, &state));
        }
    }

    state.switch_view(ViewMode::Regional);
    println!("{}", render(&engine, &state));
}
