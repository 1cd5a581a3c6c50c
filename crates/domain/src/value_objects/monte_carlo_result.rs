use crate::value_objects::percentile_data::PercentileData;
use crate::value_objects::simulation_params::SimulationParams;
use crate::value_objects::simulation_path::SimulationPath;
use crate::value_objects::simulation_statistics::SimulationStatistics;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Complete output of one Monte Carlo invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloResult {
    /// Every simulated path, in trial order.
    pub simulations: Vec<SimulationPath>,
    pub percentiles: PercentileData,
    pub statistics: SimulationStatistics,
    /// Parameters the run was invoked with.
    pub parameters: SimulationParams,
    /// When the run completed.
    pub timestamp: DateTime<Utc>,
    /// Number of values the paths were resampled from.
    pub actual_resample_pool_size: usize,
}
