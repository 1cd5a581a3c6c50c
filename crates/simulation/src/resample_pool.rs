//! Resample pool construction.
//!
//! Turns trade history into the flat series the ensemble bootstraps from.
//! The resample method is chosen once; downstream stages only see a
//! [`ResamplePool`] and its [`Composition`].

use crate::error::SimulationError;
use optiq_domain::entities::trade::Trade;
use optiq_domain::enums::{CapitalAnchor, ResampleMethod};
use optiq_domain::metrics::distribution::mean;
use optiq_domain::value_objects::simulation_params::SimulationParams;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Minimum number of pool entries a run can bootstrap from.
pub const MIN_POOL_SIZE: usize = 5;

/// How pool values combine with running capital.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composition {
    /// Dollar amounts: `capital += v`.
    Additive,
    /// Fractional returns: `capital *= 1 + v`.
    Multiplicative,
}

impl From<ResampleMethod> for Composition {
    fn from(method: ResampleMethod) -> Self {
        if method.is_multiplicative() {
            Self::Multiplicative
        } else {
            Self::Additive
        }
    }
}

/// Values to resample from, plus how they compose.
#[derive(Debug, Clone, PartialEq)]
pub struct ResamplePool {
    values: Vec<f64>,
    composition: Composition,
}

/// Descriptive numbers for a pool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoolSummary {
    pub size: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl ResamplePool {
    pub fn new(values: Vec<f64>, composition: Composition) -> Self {
        Self {
            values,
            composition,
        }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn composition(&self) -> Composition {
        self.composition
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn summary(&self) -> PoolSummary {
        let min = self.values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        PoolSummary {
            size: self.values.len(),
            min: if self.values.is_empty() { 0.0 } else { min },
            max: if self.values.is_empty() { 0.0 } else { max },
            mean: mean(&self.values),
        }
    }
}

/// Builds the resample pool for `params` from the raw history.
///
/// # Errors
///
/// Returns [`SimulationError::InsufficientPoolData`] when fewer than
/// [`MIN_POOL_SIZE`] entries remain after filtering and windowing.
pub fn build_resample_pool(
    trades: &[Trade],
    params: &SimulationParams,
) -> Result<ResamplePool, SimulationError> {
    let series = chronological(trades, params.strategy_filter());
    let window = params.effective_window();
    let normalize = params.normalize_to_one_lot;

    let values = match params.resample_method {
        ResampleMethod::Trades => trade_values(&series, window, normalize),
        ResampleMethod::Daily => daily_values(&series, window, normalize),
        ResampleMethod::Percentage => {
            let anchor = anchor_capital(trades, &series, params.capital_anchor);
            percentage_values(&series, anchor, window, normalize)
        }
    };

    debug!(
        method = ?params.resample_method,
        filtered_trades = series.len(),
        pool_size = values.len(),
        "Built resample pool"
    );

    if values.len() < MIN_POOL_SIZE {
        return Err(SimulationError::InsufficientPoolData {
            found: values.len(),
            required: MIN_POOL_SIZE,
        });
    }

    Ok(ResamplePool::new(
        values,
        Composition::from(params.resample_method),
    ))
}

/// Applies the strategy filter and sorts ascending by open date and time.
fn chronological<'a>(trades: &'a [Trade], strategy: Option<&str>) -> Vec<&'a Trade> {
    let mut series: Vec<&Trade> = trades
        .iter()
        .filter(|t| strategy.is_none_or(|s| t.strategy == s))
        .collect();
    series.sort_by_key(|t| t.chronological_key());
    series
}

/// Keeps the last `window` entries when the window is smaller than the series.
fn most_recent<T>(mut values: Vec<T>, window: Option<usize>) -> Vec<T> {
    match window {
        Some(w) if w < values.len() => values.split_off(values.len() - w),
        _ => values,
    }
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// One dollar value per trade.
fn trade_values(series: &[&Trade], window: Option<usize>, normalize: bool) -> Vec<f64> {
    most_recent(series.to_vec(), window)
        .into_iter()
        .map(|t| to_f64(t.effective_pl(normalize)))
        .collect()
}

/// One summed dollar value per calendar day, in date order.
fn daily_values(series: &[&Trade], window: Option<usize>, normalize: bool) -> Vec<f64> {
    let mut by_day: BTreeMap<_, Decimal> = BTreeMap::new();
    for trade in series {
        *by_day.entry(trade.date_opened).or_default() += trade.effective_pl(normalize);
    }
    let days: Vec<f64> = by_day.into_values().map(to_f64).collect();
    most_recent(days, window)
}

/// Resolves the starting capital for percentage returns.
fn anchor_capital(all: &[Trade], filtered: &[&Trade], anchor: CapitalAnchor) -> Decimal {
    match anchor {
        CapitalAnchor::FirstFilteredTrade => filtered
            .first()
            .map(|t| t.capital_before())
            .unwrap_or_default(),
        CapitalAnchor::FirstPortfolioTrade => all
            .iter()
            .min_by_key(|t| t.chronological_key())
            .map(Trade::capital_before)
            .unwrap_or_default(),
        CapitalAnchor::Fixed(capital) => capital,
    }
}

/// One fractional return per trade against a running historical capital.
///
/// Once capital reaches zero or below, that trade and every later one
/// contribute a zero return.
fn percentage_values(
    series: &[&Trade],
    starting_capital: Decimal,
    window: Option<usize>,
    normalize: bool,
) -> Vec<f64> {
    let mut capital = starting_capital;
    let mut exhausted = false;
    let mut returns = Vec::with_capacity(series.len());

    for (index, trade) in series.iter().enumerate() {
        if !exhausted && capital <= Decimal::ZERO {
            warn!(
                trade_index = index,
                capital = %capital,
                "Historical capital exhausted, remaining returns clamped to zero"
            );
            exhausted = true;
        }
        if exhausted {
            returns.push(0.0);
            continue;
        }
        returns.push(to_f64(trade.effective_pl(normalize)) / to_f64(capital));
        capital += trade.pl;
    }

    most_recent(returns, window)
}
