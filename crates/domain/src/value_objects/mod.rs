pub mod monte_carlo_result;
pub mod percentile_data;
pub mod simulation_params;
pub mod simulation_path;
pub mod simulation_statistics;

pub use monte_carlo_result::MonteCarloResult;
pub use percentile_data::PercentileData;
pub use simulation_params::SimulationParams;
pub use simulation_path::SimulationPath;
pub use simulation_statistics::{DrawdownPercentiles, SimulationStatistics, ValueAtRisk};
