use serde::{Deserialize, Serialize};

/// One simulated equity trajectory and its derived metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationPath {
    /// Cumulative return after each step, relative to initial capital.
    pub equity_curve: Vec<f64>,
    /// Capital after the last step.
    pub final_value: f64,
    /// `(final_value - initial) / initial`.
    pub total_return: f64,
    /// Total return expressed as a yearly rate.
    pub annualized_return: f64,
    /// Largest peak-to-trough decline of the cumulative-return curve.
    pub max_drawdown: f64,
    /// Annualized Sharpe ratio of per-step returns, risk-free rate zero.
    pub sharpe_ratio: f64,
}

impl SimulationPath {
    /// Whether the path ended with a gain.
    pub fn is_profitable(&self) -> bool {
        self.total_return > 0.0
    }
}
