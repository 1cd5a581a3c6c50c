//! Cross-path percentile bands.

use optiq_domain::metrics::distribution::percentile;
use optiq_domain::value_objects::percentile_data::PercentileData;
use optiq_domain::value_objects::simulation_path::SimulationPath;

/// Computes p5/p25/p50/p75/p95 of cumulative return at every step.
///
/// Paths shorter than `simulation_length` simply do not contribute to the
/// missing steps.
pub fn calculate_percentiles(paths: &[SimulationPath], simulation_length: usize) -> PercentileData {
    let mut data = PercentileData::with_capacity(simulation_length);
    let mut column = Vec::with_capacity(paths.len());

    for step in 0..simulation_length {
        column.clear();
        column.extend(paths.iter().filter_map(|p| p.equity_curve.get(step).copied()));
        column.sort_by(f64::total_cmp);

        data.steps.push(step + 1);
        data.p5.push(percentile(&column, 5.0));
        data.p25.push(percentile(&column, 25.0));
        data.p50.push(percentile(&column, 50.0));
        data.p75.push(percentile(&column, 75.0));
        data.p95.push(percentile(&column, 95.0));
    }

    data
}
