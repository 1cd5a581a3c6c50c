//! Ensemble-wide statistics.

use optiq_domain::metrics::distribution::{mean, percentile, sample_std_dev, sorted};
use optiq_domain::value_objects::simulation_path::SimulationPath;
use optiq_domain::value_objects::simulation_statistics::{
    DrawdownPercentiles, SimulationStatistics, ValueAtRisk,
};

/// Summarizes a completed ensemble.
///
/// Medians and Value-at-Risk use the same interpolated percentile as the
/// per-step bands.
pub fn calculate_statistics(paths: &[SimulationPath]) -> SimulationStatistics {
    let final_values: Vec<f64> = paths.iter().map(|p| p.final_value).collect();
    let total_returns: Vec<f64> = paths.iter().map(|p| p.total_return).collect();
    let annualized: Vec<f64> = paths.iter().map(|p| p.annualized_return).collect();
    let drawdowns: Vec<f64> = paths.iter().map(|p| p.max_drawdown).collect();
    let sharpes: Vec<f64> = paths.iter().map(|p| p.sharpe_ratio).collect();

    let sorted_finals = sorted(&final_values);
    let sorted_returns = sorted(&total_returns);
    let sorted_annualized = sorted(&annualized);
    let sorted_drawdowns = sorted(&drawdowns);

    let profitable = paths.iter().filter(|p| p.is_profitable()).count();
    let probability_of_profit = if paths.is_empty() {
        0.0
    } else {
        profitable as f64 / paths.len() as f64
    };

    SimulationStatistics {
        mean_final_value: mean(&final_values),
        median_final_value: percentile(&sorted_finals, 50.0),
        std_final_value: sample_std_dev(&final_values),
        mean_total_return: mean(&total_returns),
        median_total_return: percentile(&sorted_returns, 50.0),
        mean_annualized_return: mean(&annualized),
        median_annualized_return: percentile(&sorted_annualized, 50.0),
        mean_max_drawdown: mean(&drawdowns),
        median_max_drawdown: percentile(&sorted_drawdowns, 50.0),
        mean_sharpe_ratio: mean(&sharpes),
        probability_of_profit,
        value_at_risk: ValueAtRisk {
            p5: percentile(&sorted_returns, 5.0),
            p10: percentile(&sorted_returns, 10.0),
            p25: percentile(&sorted_returns, 25.0),
        },
        drawdown_percentiles: DrawdownPercentiles {
            p50: percentile(&sorted_drawdowns, 50.0),
            p75: percentile(&sorted_drawdowns, 75.0),
            p90: percentile(&sorted_drawdowns, 90.0),
            p95: percentile(&sorted_drawdowns, 95.0),
        },
    }
}
