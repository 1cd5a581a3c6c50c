//! Trade-frequency estimates used to annualize simulated paths.

use crate::entities::trade::Trade;
use std::collections::BTreeSet;

const DAYS_PER_YEAR: f64 = 365.25;

/// Calendar span of the history in years, `None` when it cannot be measured.
fn span_years(trades: &[Trade]) -> Option<f64> {
    let first = trades.iter().map(|t| t.date_opened).min()?;
    let last = trades.iter().map(|t| t.date_opened).max()?;
    let days = (last - first).num_days();
    if days <= 0 {
        return None;
    }
    Some(days as f64 / DAYS_PER_YEAR)
}

/// Estimates how many trades the history produces per year.
///
/// Returns `None` for fewer than two trades or a history opened on a single day.
pub fn estimate_trades_per_year(trades: &[Trade]) -> Option<f64> {
    if trades.len() < 2 {
        return None;
    }
    Some(trades.len() as f64 / span_years(trades)?)
}

/// Estimates how many distinct trading days the history produces per year.
pub fn estimate_days_per_year(trades: &[Trade]) -> Option<f64> {
    let days: BTreeSet<_> = trades.iter().map(|t| t.date_opened).collect();
    if days.len() < 2 {
        return None;
    }
    Some(days.len() as f64 / span_years(trades)?)
}
