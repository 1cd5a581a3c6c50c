use crate::enums::{CapitalAnchor, ResampleMethod, SeedMode};
use crate::error::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Configuration for one Monte Carlo run.
///
/// Parameters are immutable for the duration of a run and echoed back in
/// the result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    /// Number of independent trials.
    pub num_simulations: usize,
    /// Number of steps projected per trial.
    pub simulation_length: usize,
    /// Keep only the most recent entries of the pool (`None` or `Some(0)` keeps all).
    pub resample_window: Option<usize>,
    /// How trades are turned into resample values.
    pub resample_method: ResampleMethod,
    /// Starting capital of every simulated path.
    pub initial_capital: f64,
    /// Restrict the pool to one strategy label.
    pub strategy: Option<String>,
    /// Steps per year, used for annualization and Sharpe scaling.
    pub trades_per_year: f64,
    /// Randomness source.
    pub seed: SeedMode,
    /// Scale every trade's P&L to a single contract.
    pub normalize_to_one_lot: bool,
    /// Starting capital for percentage-return conversion.
    pub capital_anchor: CapitalAnchor,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            num_simulations: 1000,
            simulation_length: 252,
            resample_window: None,
            resample_method: ResampleMethod::Trades,
            initial_capital: 100_000.0,
            strategy: None,
            trades_per_year: 252.0,
            seed: SeedMode::Unseeded,
            normalize_to_one_lot: false,
            capital_anchor: CapitalAnchor::FirstFilteredTrade,
        }
    }
}

impl SimulationParams {
    #[must_use]
    pub fn new(num_simulations: usize, simulation_length: usize, initial_capital: f64) -> Self {
        Self {
            num_simulations,
            simulation_length,
            initial_capital,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_resample_method(mut self, method: ResampleMethod) -> Self {
        self.resample_method = method;
        self
    }

    #[must_use]
    pub fn with_resample_window(mut self, window: usize) -> Self {
        self.resample_window = Some(window);
        self
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = Some(strategy.into());
        self
    }

    #[must_use]
    pub fn with_trades_per_year(mut self, trades_per_year: f64) -> Self {
        self.trades_per_year = trades_per_year;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = SeedMode::Seeded(seed);
        self
    }

    #[must_use]
    pub fn with_normalize_to_one_lot(mut self, normalize: bool) -> Self {
        self.normalize_to_one_lot = normalize;
        self
    }

    #[must_use]
    pub fn with_capital_anchor(mut self, anchor: CapitalAnchor) -> Self {
        self.capital_anchor = anchor;
        self
    }

    /// Returns the recency window, treating zero as "no window".
    pub fn effective_window(&self) -> Option<usize> {
        self.resample_window.filter(|&w| w > 0)
    }

    /// Returns the strategy filter, treating an empty label as "no filter".
    pub fn strategy_filter(&self) -> Option<&str> {
        self.strategy.as_deref().filter(|s| !s.is_empty())
    }

    /// Checks that every numeric field is usable.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.num_simulations == 0 {
            return Err(DomainError::NotPositive {
                name: "num_simulations",
            });
        }
        if self.simulation_length == 0 {
            return Err(DomainError::NotPositive {
                name: "simulation_length",
            });
        }
        check_positive_finite("initial_capital", self.initial_capital)?;
        check_positive_finite("trades_per_year", self.trades_per_year)?;
        if let CapitalAnchor::Fixed(capital) = self.capital_anchor
            && capital <= Decimal::ZERO
        {
            return Err(DomainError::NotPositive {
                name: "capital_anchor",
            });
        }
        Ok(())
    }
}

fn check_positive_finite(name: &'static str, value: f64) -> Result<(), DomainError> {
    if !value.is_finite() {
        return Err(DomainError::NonFinite { name, value });
    }
    if value <= 0.0 {
        return Err(DomainError::NotPositive { name });
    }
    Ok(())
}
