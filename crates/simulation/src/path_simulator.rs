//! Single-path simulation.
//!
//! Walks one resampled series, tracking running capital, and derives the
//! path's return, drawdown and Sharpe metrics.

use crate::resample_pool::Composition;
use optiq_domain::metrics::returns::{annualized_return, max_drawdown, sharpe_ratio, total_return};
use optiq_domain::value_objects::simulation_path::SimulationPath;

/// Simulates one equity path from a resampled series.
///
/// # Arguments
///
/// * `series` - Resampled step values, one per simulated step
/// * `initial_capital` - Starting capital, must be positive
/// * `trades_per_year` - Steps per year for annualization and Sharpe scaling
/// * `composition` - Whether values are added to or compounded into capital
///
/// # Returns
///
/// The simulated path. Steps taken from zero or negative capital contribute
/// a zero step return, so exhausted paths stay finite. Compounded paths
/// never go below zero, and once they reach zero they stay there.
pub fn simulate_path(
    series: &[f64],
    initial_capital: f64,
    trades_per_year: f64,
    composition: Composition,
) -> SimulationPath {
    let mut capital = initial_capital;
    let mut equity_curve = Vec::with_capacity(series.len());
    let mut step_returns = Vec::with_capacity(series.len());

    for &value in series {
        let before = capital;
        capital = match composition {
            Composition::Additive => capital + value,
            // A loss beyond the whole account ends the path at zero.
            Composition::Multiplicative => capital * (1.0 + value).max(0.0),
        };

        equity_curve.push((capital - initial_capital) / initial_capital);
        step_returns.push(if before > 0.0 {
            capital / before - 1.0
        } else {
            0.0
        });
    }

    let total = total_return(capital, initial_capital);
    let years = series.len() as f64 / trades_per_year;

    SimulationPath {
        max_drawdown: max_drawdown(&equity_curve),
        equity_curve,
        final_value: capital,
        total_return: total,
        annualized_return: annualized_return(total, years),
        sharpe_ratio: sharpe_ratio(&step_returns, trades_per_year),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_additive_path() {
        let path = simulate_path(&[100.0; 15], 1000.0, 252.0, Composition::Additive);
        assert_eq!(path.final_value, 2500.0);
        assert_eq!(path.total_return, 1.5);
        assert_eq!(path.equity_curve.len(), 15);
        assert_eq!(path.equity_curve[0], 0.1);
        assert_eq!(path.max_drawdown, 0.0);
    }

    #[test]
    fn test_multiplicative_path() {
        let path = simulate_path(&[0.1, 0.1], 1000.0, 252.0, Composition::Multiplicative);
        assert!((path.final_value - 1210.0).abs() < 1e-9);
        assert!((path.total_return - 0.21).abs() < 1e-12);
        assert!((path.equity_curve[0] - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_drawdown_measured_on_cumulative_return() {
        let path = simulate_path(
            &[200.0, -300.0, 50.0],
            1000.0,
            252.0,
            Composition::Additive,
        );
        // Curve: 0.2, -0.1, -0.05 -> peak 0.2, trough -0.1
        assert!((path.max_drawdown - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_one_year_annualization_is_identity() {
        let series: Vec<f64> = (0..252).map(|i| if i % 3 == 0 { -4.0 } else { 7.0 }).collect();
        let path = simulate_path(&series, 10_000.0, 252.0, Composition::Additive);
        assert_eq!(path.annualized_return, path.total_return);
    }

    #[test]
    fn test_half_year_annualization() {
        let path = simulate_path(&[0.01; 126], 1000.0, 252.0, Composition::Multiplicative);
        let expected = (1.0 + path.total_return).powf(2.0) - 1.0;
        assert!((path.annualized_return - expected).abs() < 1e-12);
    }

    #[test]
    fn test_flat_path_has_zero_sharpe() {
        let path = simulate_path(&[0.0; 10], 1000.0, 252.0, Composition::Additive);
        assert_eq!(path.sharpe_ratio, 0.0);
        assert_eq!(path.total_return, 0.0);
    }

    #[test]
    fn test_single_step_has_zero_sharpe() {
        let path = simulate_path(&[25.0], 1000.0, 252.0, Composition::Additive);
        assert_eq!(path.sharpe_ratio, 0.0);
    }

    #[test]
    fn test_sharpe_positive_for_winning_mix() {
        let path = simulate_path(
            &[50.0, -20.0, 40.0, -10.0, 60.0],
            1000.0,
            252.0,
            Composition::Additive,
        );
        assert!(path.sharpe_ratio > 0.0);
    }

    #[test]
    fn test_capital_wipeout_stays_finite() {
        let path = simulate_path(
            &[0.05, -1.0, 0.2, 0.3],
            1000.0,
            252.0,
            Composition::Multiplicative,
        );
        assert_eq!(path.final_value, 0.0);
        assert_eq!(path.total_return, -1.0);
        assert_eq!(path.annualized_return, -1.0);
        assert!(path.equity_curve.iter().all(|v| v.is_finite()));
        assert!(path.sharpe_ratio.is_finite());
        assert!(path.max_drawdown.is_finite());
    }

    #[test]
    fn test_compounded_ruin_is_absorbing() {
        let path = simulate_path(
            &[-2.5, 0.1, -2.5, 0.3],
            1000.0,
            252.0,
            Composition::Multiplicative,
        );
        assert_eq!(path.final_value, 0.0);
        assert_eq!(path.total_return, -1.0);
        assert!(path.equity_curve.iter().all(|&v| v == -1.0));
        assert!(path.sharpe_ratio.is_finite());
    }

    #[test]
    fn test_additive_path_below_zero_stays_finite() {
        let path = simulate_path(
            &[-600.0, -600.0, 100.0],
            1000.0,
            252.0,
            Composition::Additive,
        );
        assert!(path.total_return < -1.0);
        assert_eq!(path.annualized_return, -1.0);
        assert!(path.sharpe_ratio.is_finite());
    }
}
