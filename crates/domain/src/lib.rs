//! Domain model for Monte Carlo risk simulation over trade history.
//!
//! This crate holds the types shared by the simulation engine and its
//! front ends:
//! - Trade records as read from a broker or backtest export
//! - Simulation parameters and the closed enums that configure a run
//! - Result value objects (paths, percentile bands, statistics)
//! - Pure metric formulas (distribution math, return math, trade frequency)

/// Trade entities.
pub mod entities;
/// Enumerations used to configure a simulation.
pub mod enums;
/// Domain validation errors.
pub mod error;
/// Pure metric formulas.
pub mod metrics;
/// Parameter and result value objects.
pub mod value_objects;
