//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types from the crate.
//!
//! # Example
//!
//! ```rust
//! use optiq_simulation::prelude::*;
//! ```

// Cancellation
pub use crate::cancel::CancellationToken;

// Errors
pub use crate::error::SimulationError;

// Monte Carlo
pub use crate::monte_carlo::{
    ExecutionMode, MIN_TRADES, MonteCarloRunner, run_monte_carlo_simulation,
};

// Path simulation
pub use crate::path_simulator::simulate_path;

// Aggregation
pub use crate::percentiles::calculate_percentiles;
pub use crate::statistics::calculate_statistics;

// Resample pool
pub use crate::resample_pool::{
    Composition, MIN_POOL_SIZE, PoolSummary, ResamplePool, build_resample_pool,
};

// Random sources
pub use crate::rng::{Lcg, ThreadSource, TrialRng, UniformSource, resample_with_replacement};
