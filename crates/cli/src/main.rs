//! Command Line Interface for the Optiq Monte Carlo risk simulator.
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use optiq_simulation::monte_carlo::{ExecutionMode, MIN_TRADES, MonteCarloRunner};
use optiq_simulation::resample_pool::{Composition, build_resample_pool};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod loader;
mod report;

use config::SimulationArgs;

#[derive(Parser)]
#[command(name = "optiq")]
#[command(about = "Monte Carlo risk simulation for options trading history", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a Monte Carlo simulation over a trade history
    Simulate {
        #[command(flatten)]
        args: SimulationArgs,

        /// Spread trials across all CPU cores
        #[arg(long)]
        parallel: bool,

        /// Print the full result as JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Show the resample pool a simulation would draw from
    Pool {
        #[command(flatten)]
        args: SimulationArgs,
    },
}

fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Simulate {
            args,
            parallel,
            json,
        } => {
            let trades = loader::load_trades(&args.trades)?;
            info!(count = trades.len(), path = %args.trades.display(), "Loaded trades");
            let params = args.to_params(&trades)?;

            let mode = if *parallel {
                ExecutionMode::Parallel
            } else {
                ExecutionMode::Sequential
            };
            let result = MonteCarloRunner::new(params)
                .with_execution_mode(mode)
                .run(&trades)
                .context("Monte Carlo simulation failed")?;

            if *json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                report::print_result(&result);
            }
        }
        Commands::Pool { args } => {
            let trades = loader::load_trades(&args.trades)?;
            if trades.len() < MIN_TRADES {
                println!(
                    "⚠️  Only {} trades loaded; simulations need at least {}.",
                    trades.len(),
                    MIN_TRADES
                );
            }
            let params = args.to_params(&trades)?;
            let pool = build_resample_pool(&trades, &params)
                .context("Failed to build resample pool")?;

            println!(
                "\n🔍 Resample pool ({:?}, {} trades loaded)",
                params.resample_method,
                trades.len()
            );
            report::print_pool(
                &pool.summary(),
                pool.composition() == Composition::Multiplicative,
            );
        }
    }

    Ok(())
}
