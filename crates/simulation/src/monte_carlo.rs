//! Ensemble orchestration.
//!
//! [`MonteCarloRunner`] validates the inputs once, builds the resample pool,
//! runs every trial with its own generator, then aggregates the ensemble.

use crate::cancel::CancellationToken;
use crate::error::SimulationError;
use crate::path_simulator::simulate_path;
use crate::percentiles::calculate_percentiles;
use crate::resample_pool::{ResamplePool, build_resample_pool};
use crate::rng::{TrialRng, resample_with_replacement};
use crate::statistics::calculate_statistics;
use chrono::{DateTime, Utc};
use optiq_domain::entities::trade::Trade;
use optiq_domain::value_objects::monte_carlo_result::MonteCarloResult;
use optiq_domain::value_objects::simulation_params::SimulationParams;
use optiq_domain::value_objects::simulation_path::SimulationPath;
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use tracing::{info, warn};

/// Minimum number of raw trades required before any resampling.
pub const MIN_TRADES: usize = 10;

/// How trials are scheduled. Seeded output is identical in both modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// Trials run one after another on the calling thread.
    #[default]
    Sequential,
    /// Trials are spread over the rayon thread pool.
    Parallel,
}

/// Runs a bootstrap Monte Carlo simulation over trade history.
#[derive(Debug, Clone)]
pub struct MonteCarloRunner {
    pub params: SimulationParams,
    pub execution_mode: ExecutionMode,
    pub cancellation: Option<CancellationToken>,
    /// Fixed result timestamp; `None` stamps the completion time.
    pub timestamp: Option<DateTime<Utc>>,
}

impl MonteCarloRunner {
    #[must_use]
    pub fn new(params: SimulationParams) -> Self {
        Self {
            params,
            execution_mode: ExecutionMode::Sequential,
            cancellation: None,
            timestamp: None,
        }
    }

    #[must_use]
    pub fn with_execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.execution_mode = mode;
        self
    }

    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Runs the ensemble.
    ///
    /// # Errors
    ///
    /// * [`SimulationError::InvalidParameters`] when parameters fail validation
    /// * [`SimulationError::InsufficientTrades`] when fewer than [`MIN_TRADES`] trades are given
    /// * [`SimulationError::InsufficientPoolData`] when the resample pool is too small
    /// * [`SimulationError::Cancelled`] when the cancellation token fires
    pub fn run(&self, trades: &[Trade]) -> Result<MonteCarloResult, SimulationError> {
        self.params.validate()?;

        if trades.len() < MIN_TRADES {
            return Err(SimulationError::InsufficientTrades {
                found: trades.len(),
                required: MIN_TRADES,
            });
        }

        let pool = build_resample_pool(trades, &self.params)?;
        let started = Instant::now();

        info!(
            trades = trades.len(),
            pool_size = pool.len(),
            simulations = self.params.num_simulations,
            length = self.params.simulation_length,
            method = ?self.params.resample_method,
            mode = ?self.execution_mode,
            "Starting Monte Carlo simulation"
        );

        let simulations = match self.execution_mode {
            ExecutionMode::Sequential => self.run_sequential(&pool)?,
            ExecutionMode::Parallel => self.run_parallel(&pool)?,
        };

        let percentiles = calculate_percentiles(&simulations, self.params.simulation_length);
        let statistics = calculate_statistics(&simulations);

        info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            mean_total_return = statistics.mean_total_return,
            probability_of_profit = statistics.probability_of_profit,
            "Monte Carlo simulation complete"
        );

        Ok(MonteCarloResult {
            simulations,
            percentiles,
            statistics,
            parameters: self.params.clone(),
            timestamp: self.timestamp.unwrap_or_else(Utc::now),
            actual_resample_pool_size: pool.len(),
        })
    }

    fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationToken::is_cancelled)
    }

    fn run_sequential(&self, pool: &ResamplePool) -> Result<Vec<SimulationPath>, SimulationError> {
        let mut simulations = Vec::with_capacity(self.params.num_simulations);
        for trial in 0..self.params.num_simulations {
            if self.is_cancelled() {
                warn!(completed = trial, "Monte Carlo simulation cancelled");
                return Err(SimulationError::Cancelled { completed: trial });
            }
            simulations.push(self.simulate_trial(pool, trial));
        }
        Ok(simulations)
    }

    fn run_parallel(&self, pool: &ResamplePool) -> Result<Vec<SimulationPath>, SimulationError> {
        let completed = AtomicUsize::new(0);
        let simulations = (0..self.params.num_simulations)
            .into_par_iter()
            .map(|trial| {
                if self.is_cancelled() {
                    return Err(());
                }
                let path = self.simulate_trial(pool, trial);
                completed.fetch_add(1, Ordering::Relaxed);
                Ok(path)
            })
            .collect::<Result<Vec<_>, ()>>();

        simulations.map_err(|()| {
            let completed = completed.load(Ordering::SeqCst);
            warn!(completed, "Monte Carlo simulation cancelled");
            SimulationError::Cancelled { completed }
        })
    }

    /// Resamples and simulates trial `trial` with its own generator.
    fn simulate_trial(&self, pool: &ResamplePool, trial: usize) -> SimulationPath {
        let mut rng = TrialRng::for_trial(self.params.seed, trial);
        let series =
            resample_with_replacement(pool.values(), self.params.simulation_length, &mut rng);
        simulate_path(
            &series,
            self.params.initial_capital,
            self.params.trades_per_year,
            pool.composition(),
        )
    }
}

/// Runs a sequential simulation with default runner settings.
///
/// # Errors
///
/// See [`MonteCarloRunner::run`].
pub fn run_monte_carlo_simulation(
    trades: &[Trade],
    params: &SimulationParams,
) -> Result<MonteCarloResult, SimulationError> {
    MonteCarloRunner::new(params.clone()).run(trades)
}
