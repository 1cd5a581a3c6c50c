//! Layered simulation configuration for the CLI.
//!
//! Precedence, lowest first: built-in defaults, the JSON parameters file,
//! command-line flags (or their environment variables).

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use optiq_domain::entities::trade::Trade;
use optiq_domain::enums::{CapitalAnchor, ResampleMethod, SeedMode};
use optiq_domain::metrics::frequency::{estimate_days_per_year, estimate_trades_per_year};
use optiq_domain::value_objects::simulation_params::SimulationParams;
use rust_decimal::Decimal;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Fallback steps per year when the history is too short to estimate.
const DEFAULT_TRADES_PER_YEAR: f64 = 252.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MethodArg {
    Trades,
    Daily,
    Percentage,
}

impl From<MethodArg> for ResampleMethod {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Trades => Self::Trades,
            MethodArg::Daily => Self::Daily,
            MethodArg::Percentage => Self::Percentage,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AnchorArg {
    /// Capital before the first trade of the filtered strategy
    Filtered,
    /// Capital before the first trade of the whole portfolio
    Portfolio,
}

/// Flags shared by every command that builds a resample pool.
#[derive(Debug, Args)]
pub struct SimulationArgs {
    /// Trade history CSV
    #[arg(short, long, env = "OPTIQ_TRADES")]
    pub trades: PathBuf,

    /// JSON file with simulation parameters
    #[arg(short, long, env = "OPTIQ_PARAMS")]
    pub params: Option<PathBuf>,

    /// Number of simulated paths
    #[arg(short = 'n', long)]
    pub simulations: Option<usize>,

    /// Steps projected per path
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Resample method
    #[arg(short, long, value_enum)]
    pub method: Option<MethodArg>,

    /// Keep only the most recent N pool entries
    #[arg(short, long)]
    pub window: Option<usize>,

    /// Starting capital of each path
    #[arg(short, long)]
    pub capital: Option<f64>,

    /// Only resample trades of this strategy
    #[arg(short, long)]
    pub strategy: Option<String>,

    /// Steps per year; estimated from the history when omitted
    #[arg(long)]
    pub trades_per_year: Option<f64>,

    /// Seed for a reproducible run
    #[arg(long, env = "OPTIQ_SEED")]
    pub seed: Option<u64>,

    /// Scale P&L to a single contract
    #[arg(long)]
    pub normalize: bool,

    /// Capital baseline for percentage returns
    #[arg(long, value_enum, conflicts_with = "anchor_capital")]
    pub anchor: Option<AnchorArg>,

    /// Fixed capital baseline for percentage returns
    #[arg(long)]
    pub anchor_capital: Option<Decimal>,
}

impl SimulationArgs {
    /// Builds the run parameters for `trades`.
    pub fn to_params(&self, trades: &[Trade]) -> Result<SimulationParams> {
        let (mut params, file_sets_frequency) = match &self.params {
            Some(path) => {
                let file = read_params_file(path)?;
                (file.params, file.sets_trades_per_year)
            }
            None => (SimulationParams::default(), false),
        };

        if let Some(n) = self.simulations {
            params.num_simulations = n;
        }
        if let Some(length) = self.length {
            params.simulation_length = length;
        }
        if let Some(method) = self.method {
            params.resample_method = method.into();
        }
        if let Some(window) = self.window {
            params.resample_window = Some(window);
        }
        if let Some(capital) = self.capital {
            params.initial_capital = capital;
        }
        if let Some(strategy) = &self.strategy {
            params.strategy = Some(strategy.clone());
        }
        if let Some(seed) = self.seed {
            params.seed = SeedMode::Seeded(seed);
        }
        if self.normalize {
            params.normalize_to_one_lot = true;
        }
        if let Some(anchor) = self.anchor {
            params.capital_anchor = match anchor {
                AnchorArg::Filtered => CapitalAnchor::FirstFilteredTrade,
                AnchorArg::Portfolio => CapitalAnchor::FirstPortfolioTrade,
            };
        }
        if let Some(capital) = self.anchor_capital {
            params.capital_anchor = CapitalAnchor::Fixed(capital);
        }

        match self.trades_per_year {
            Some(tpy) => params.trades_per_year = tpy,
            None if !file_sets_frequency => {
                params.trades_per_year = estimate_frequency(trades, &params);
            }
            None => {}
        }

        Ok(params)
    }
}

/// Parameters read from a JSON file, noting which optional keys were present.
#[derive(Debug)]
struct ParamsFile {
    params: SimulationParams,
    sets_trades_per_year: bool,
}

fn read_params_file(path: &Path) -> Result<ParamsFile> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read parameters file {}", path.display()))?;
    parse_params(&raw).with_context(|| format!("Invalid parameters file {}", path.display()))
}

fn parse_params(raw: &str) -> Result<ParamsFile> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    let sets_trades_per_year = value.get("trades_per_year").is_some();
    let params = serde_json::from_value(value)?;
    Ok(ParamsFile {
        params,
        sets_trades_per_year,
    })
}

/// Estimates steps per year over the trades the pool will draw from.
fn estimate_frequency(trades: &[Trade], params: &SimulationParams) -> f64 {
    let filtered: Vec<Trade>;
    let history = match params.strategy_filter() {
        Some(strategy) => {
            filtered = trades
                .iter()
                .filter(|t| t.strategy == strategy)
                .cloned()
                .collect();
            filtered.as_slice()
        }
        None => trades,
    };

    let method = params.resample_method;
    let estimate = match method {
        ResampleMethod::Daily => estimate_days_per_year(history),
        ResampleMethod::Trades | ResampleMethod::Percentage => estimate_trades_per_year(history),
    };
    debug!(?method, ?estimate, trades = history.len(), "Estimated steps per year");
    estimate.unwrap_or(DEFAULT_TRADES_PER_YEAR)
}
