//! Pure metric formulas shared by the simulation engine.

pub mod distribution;
pub mod frequency;
pub mod returns;
