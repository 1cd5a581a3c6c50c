//! Errors raised by a Monte Carlo run.

use optiq_domain::error::DomainError;

/// Fatal, structural failures of a run. No partial result is produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    /// Too few raw trades to bootstrap from.
    #[error("insufficient trades: found {found}, need at least {required}")]
    InsufficientTrades {
        /// Trades supplied.
        found: usize,
        /// Minimum required.
        required: usize,
    },
    /// The filtered and windowed pool is too small.
    #[error(
        "insufficient resample pool data: found {found} entries, need at least {required}; \
         relax the strategy filter or resample window"
    )]
    InsufficientPoolData {
        /// Pool entries produced.
        found: usize,
        /// Minimum required.
        required: usize,
    },
    /// Parameters failed validation.
    #[error("invalid simulation parameters: {0}")]
    InvalidParameters(#[from] DomainError),
    /// The caller cancelled the run.
    #[error("simulation cancelled after {completed} trials")]
    Cancelled {
        /// Trials finished before cancellation was observed.
        completed: usize,
    },
}
