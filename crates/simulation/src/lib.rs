//! Monte Carlo risk simulation over historical trades.
//!
//! This crate bootstraps alternate future equity paths from a trader's
//! history:
//! - Resample pool construction (per trade, per day, compounding percentage)
//! - Seeded and unseeded uniform sources
//! - Single-path simulation with return, drawdown and Sharpe metrics
//! - Ensemble orchestration with cooperative cancellation
//! - Cross-path percentile bands and ensemble statistics

/// Prelude module for convenient imports.
pub mod prelude;

/// Cooperative cancellation between trials.
pub mod cancel;
/// Simulation errors.
pub mod error;
/// Ensemble orchestration.
pub mod monte_carlo;
/// Single-path simulation.
pub mod path_simulator;
/// Cross-path percentile bands.
pub mod percentiles;
/// Resample pool construction.
pub mod resample_pool;
/// Uniform random sources.
pub mod rng;
/// Ensemble statistics.
pub mod statistics;
