use serde::{Deserialize, Serialize};

/// Percentiles of the per-path maximum drawdown distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawdownPercentiles {
    pub p50: f64,
    pub p75: f64,
    pub p90: f64,
    pub p95: f64,
}

/// Ensemble-wide summary of a Monte Carlo run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationStatistics {
    pub mean_final_value: f64,
    pub median_final_value: f64,
    /// Sample standard deviation of final values.
    pub std_final_value: f64,
    pub mean_total_return: f64,
    pub median_total_return: f64,
    pub mean_annualized_return: f64,
    pub median_annualized_return: f64,
    pub mean_max_drawdown: f64,
    pub median_max_drawdown: f64,
    pub mean_sharpe_ratio: f64,
    /// Share of paths with a positive total return, in `[0, 1]`.
    pub probability_of_profit: f64,
    /// Value at Risk: percentiles of the total-return distribution.
    pub value_at_risk: ValueAtRisk,
    pub drawdown_percentiles: DrawdownPercentiles,
}

/// Total-return percentiles used as loss thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueAtRisk {
    pub p5: f64,
    pub p10: f64,
    pub p25: f64,
}
