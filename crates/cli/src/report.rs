//! Terminal rendering of simulation output.

use optiq_domain::value_objects::monte_carlo_result::MonteCarloResult;
use optiq_domain::value_objects::percentile_data::PercentileData;
use optiq_simulation::resample_pool::PoolSummary;
use prettytable::{Table, row};

/// Number of evenly spaced steps shown in the percentile table.
const BAND_ROWS: usize = 10;

fn pct(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

fn usd(value: f64) -> String {
    format!("${value:.2}")
}

pub fn print_result(result: &MonteCarloResult) {
    let params = &result.parameters;
    let stats = &result.statistics;

    println!("\n📊 Monte Carlo Results");
    println!("════════════════════════════════════");

    let mut run = Table::new();
    run.add_row(row!["Simulations", params.num_simulations]);
    run.add_row(row!["Steps per path", params.simulation_length]);
    run.add_row(row!["Resample method", format!("{:?}", params.resample_method)]);
    run.add_row(row!["Pool size", result.actual_resample_pool_size]);
    run.add_row(row!["Initial capital", usd(params.initial_capital)]);
    run.add_row(row!["Steps per year", format!("{:.1}", params.trades_per_year)]);
    run.printstd();

    let mut summary = Table::new();
    summary.add_row(row![b->"Metric", b->"Mean", b->"Median"]);
    summary.add_row(row![
        "Final value",
        usd(stats.mean_final_value),
        usd(stats.median_final_value)
    ]);
    summary.add_row(row![
        "Total return",
        pct(stats.mean_total_return),
        pct(stats.median_total_return)
    ]);
    summary.add_row(row![
        "Annualized return",
        pct(stats.mean_annualized_return),
        pct(stats.median_annualized_return)
    ]);
    summary.add_row(row![
        "Max drawdown",
        pct(stats.mean_max_drawdown),
        pct(stats.median_max_drawdown)
    ]);
    summary.add_row(row![
        "Sharpe ratio",
        format!("{:.2}", stats.mean_sharpe_ratio),
        ""
    ]);
    summary.printstd();

    let mut risk = Table::new();
    risk.add_row(row!["Probability of profit", pct(stats.probability_of_profit)]);
    risk.add_row(row!["Final value std dev", usd(stats.std_final_value)]);
    risk.add_row(row!["VaR 5%", pct(stats.value_at_risk.p5)]);
    risk.add_row(row!["VaR 10%", pct(stats.value_at_risk.p10)]);
    risk.add_row(row!["VaR 25%", pct(stats.value_at_risk.p25)]);
    risk.add_row(row!["Drawdown P90", pct(stats.drawdown_percentiles.p90)]);
    risk.add_row(row!["Drawdown P95", pct(stats.drawdown_percentiles.p95)]);
    risk.printstd();

    print_bands(&result.percentiles);
}

fn print_bands(bands: &PercentileData) {
    if bands.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.add_row(row![b->"Step", b->"P5", b->"P25", b->"P50", b->"P75", b->"P95"]);
    for i in band_indices(bands.len()) {
        table.add_row(row![
            bands.steps[i],
            pct(bands.p5[i]),
            pct(bands.p25[i]),
            pct(bands.p50[i]),
            pct(bands.p75[i]),
            pct(bands.p95[i])
        ]);
    }
    table.printstd();
}

/// Evenly spaced indices ending at the last step.
fn band_indices(len: usize) -> Vec<usize> {
    let rows = BAND_ROWS.min(len);
    let mut indices: Vec<usize> = (1..=rows).map(|k| k * len / rows - 1).collect();
    indices.dedup();
    indices
}

pub fn print_pool(summary: &PoolSummary, multiplicative: bool) {
    let fmt = if multiplicative { pct } else { usd };
    let mut table = Table::new();
    table.add_row(row!["Pool size", summary.size]);
    table.add_row(row!["Min", fmt(summary.min)]);
    table.add_row(row!["Max", fmt(summary.max)]);
    table.add_row(row!["Mean", fmt(summary.mean)]);
    table.printstd();
}
