//! Return, drawdown and risk-ratio formulas for a single equity path.

use super::distribution::{mean, sample_std_dev};

/// Simple return from `initial` to `final_value`.
pub fn total_return(final_value: f64, initial: f64) -> f64 {
    (final_value - initial) / initial
}

/// Converts a total return over `years` into a yearly rate.
///
/// Falls back to the unannualized `total_return` when `years <= 0`, and
/// reports a full loss (-1) when the path ended at or below zero capital.
pub fn annualized_return(total_return: f64, years: f64) -> f64 {
    if years <= 0.0 || years == 1.0 {
        return total_return;
    }
    let growth = 1.0 + total_return;
    if growth <= 0.0 {
        return -1.0;
    }
    growth.powf(1.0 / years) - 1.0
}

/// Largest drop from a running peak of a cumulative-return curve.
///
/// The peak starts at zero (the starting capital), so the result is never
/// negative.
pub fn max_drawdown(curve: &[f64]) -> f64 {
    let mut peak = 0.0f64;
    let mut max_dd = 0.0f64;
    for &value in curve {
        if value > peak {
            peak = value;
        }
        let drawdown = peak - value;
        if drawdown > max_dd {
            max_dd = drawdown;
        }
    }
    max_dd
}

/// Annualized Sharpe ratio with a zero risk-free rate.
///
/// Zero when fewer than two returns are given or their sample standard
/// deviation is zero.
pub fn sharpe_ratio(step_returns: &[f64], periods_per_year: f64) -> f64 {
    if step_returns.len() < 2 {
        return 0.0;
    }
    let std_dev = sample_std_dev(step_returns);
    if std_dev == 0.0 {
        return 0.0;
    }
    mean(step_returns) / std_dev * periods_per_year.sqrt()
}
