//! Ensemble-level properties exercised through the public API.

use chrono::{Days, NaiveDate, TimeZone, Utc};
use optiq_domain::entities::trade::Trade;
use optiq_domain::enums::ResampleMethod;
use optiq_domain::value_objects::monte_carlo_result::MonteCarloResult;
use optiq_domain::value_objects::simulation_params::SimulationParams;
use optiq_simulation::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 3).unwrap()
}

/// Builds a history with consistent running funds from a 10k start.
fn history(pls: &[Decimal]) -> Vec<Trade> {
    let mut funds = dec!(10000);
    pls.iter()
        .enumerate()
        .map(|(i, &pl)| {
            funds += pl;
            Trade::new(start() + Days::new(i as u64), pl, 2, funds, "Iron Condor")
        })
        .collect()
}

fn mixed_history() -> Vec<Trade> {
    let pls = [
        dec!(250),
        dec!(-400),
        dec!(120),
        dec!(90),
        dec!(-35),
        dec!(610),
        dec!(-220),
        dec!(75),
        dec!(140),
        dec!(-510),
        dec!(330),
        dec!(20),
        dec!(-60),
        dec!(180),
    ];
    history(&pls)
}

fn assert_all_finite(result: &MonteCarloResult) {
    for path in &result.simulations {
        assert!(path.equity_curve.iter().all(|v| v.is_finite()));
        assert!(path.final_value.is_finite());
        assert!(path.total_return.is_finite());
        assert!(path.annualized_return.is_finite());
        assert!(path.max_drawdown.is_finite());
        assert!(path.sharpe_ratio.is_finite());
    }
    let s = &result.statistics;
    for value in [
        s.mean_final_value,
        s.median_final_value,
        s.std_final_value,
        s.mean_total_return,
        s.median_total_return,
        s.mean_annualized_return,
        s.median_annualized_return,
        s.mean_max_drawdown,
        s.median_max_drawdown,
        s.mean_sharpe_ratio,
        s.probability_of_profit,
        s.value_at_risk.p5,
        s.value_at_risk.p10,
        s.value_at_risk.p25,
    ] {
        assert!(value.is_finite());
    }
}

#[test]
fn test_end_to_end_constant_pool() {
    let trades = history(&[dec!(100); 15]);
    let params = SimulationParams::new(50, 15, 1000.0)
        .with_resample_method(ResampleMethod::Trades)
        .with_seed(1);

    let result = run_monte_carlo_simulation(&trades, &params).unwrap();

    assert_eq!(result.simulations.len(), 50);
    for path in &result.simulations {
        assert_eq!(path.final_value, 2500.0);
        assert_eq!(path.total_return, 1.5);
    }
    assert_eq!(result.statistics.mean_final_value, 2500.0);
    assert_eq!(result.statistics.probability_of_profit, 1.0);
}

#[test]
fn test_determinism_across_invocations() {
    let trades = mixed_history();
    let timestamp = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    for method in [
        ResampleMethod::Trades,
        ResampleMethod::Daily,
        ResampleMethod::Percentage,
    ] {
        let params = SimulationParams::new(200, 60, 10_000.0)
            .with_resample_method(method)
            .with_seed(2024);
        let runner = MonteCarloRunner::new(params).with_timestamp(timestamp);
        let first = runner.run(&trades).unwrap();
        let second = runner.run(&trades).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_different_seeds_differ() {
    let trades = mixed_history();
    let a = run_monte_carlo_simulation(&trades, &SimulationParams::new(50, 40, 10_000.0).with_seed(1))
        .unwrap();
    let b = run_monte_carlo_simulation(&trades, &SimulationParams::new(50, 40, 10_000.0).with_seed(2))
        .unwrap();
    assert_ne!(a.simulations, b.simulations);
}

#[test]
fn test_pool_window_keeps_ten_most_recent() {
    let pls: Vec<Decimal> = (1..=20i64).map(|i| Decimal::from(i * 10)).collect();
    let mut trades = history(&pls);
    trades.reverse();

    let trades_params = SimulationParams::default().with_resample_window(10);
    let pool = build_resample_pool(&trades, &trades_params).unwrap();
    let expected: Vec<f64> = (11..=20u32).map(|i| f64::from(i * 10)).collect();
    assert_eq!(pool.values(), expected.as_slice());

    let daily = trades_params
        .clone()
        .with_resample_method(ResampleMethod::Daily);
    assert_eq!(build_resample_pool(&trades, &daily).unwrap().values(), expected.as_slice());

    let percentage = trades_params.with_resample_method(ResampleMethod::Percentage);
    let pool = build_resample_pool(&trades, &percentage).unwrap();
    assert_eq!(pool.len(), 10);
    // Trade 11 sees 10000 + 10 * (1 + ... + 10) of capital.
    assert!((pool.values()[0] - 110.0 / 10_550.0).abs() < 1e-12);
}

#[test]
fn test_minimum_trade_guard() {
    let trades = history(&[dec!(50); 9]);
    let err = run_monte_carlo_simulation(&trades, &SimulationParams::new(10, 10, 1000.0))
        .unwrap_err();
    assert_eq!(
        err,
        SimulationError::InsufficientTrades {
            found: 9,
            required: 10
        }
    );
}

#[test]
fn test_drawdown_non_negative_and_bands_ordered() {
    let trades = mixed_history();
    let params = SimulationParams::new(300, 80, 10_000.0).with_seed(77);
    let result = run_monte_carlo_simulation(&trades, &params).unwrap();

    assert!(result.simulations.iter().all(|p| p.max_drawdown >= 0.0));

    let bands = &result.percentiles;
    assert_eq!(bands.len(), 80);
    assert_eq!(bands.steps.first(), Some(&1));
    assert_eq!(bands.steps.last(), Some(&80));
    for i in 0..bands.len() {
        assert!(bands.p5[i] <= bands.p25[i]);
        assert!(bands.p25[i] <= bands.p50[i]);
        assert!(bands.p50[i] <= bands.p75[i]);
        assert!(bands.p75[i] <= bands.p95[i]);
    }
}

#[test]
fn test_probability_of_profit_matches_path_count() {
    let trades = mixed_history();
    let params = SimulationParams::new(250, 30, 10_000.0).with_seed(5);
    let result = run_monte_carlo_simulation(&trades, &params).unwrap();

    let profitable = result
        .simulations
        .iter()
        .filter(|p| p.total_return > 0.0)
        .count();
    let pop = result.statistics.probability_of_profit;
    assert!((0.0..=1.0).contains(&pop));
    assert_eq!(pop, profitable as f64 / 250.0);
}

#[test]
fn test_capital_exhaustion_does_not_propagate_nan() {
    // The seventh trade wipes out the account; later trades clamp to zero.
    let mut pls = vec![dec!(100); 6];
    pls.push(dec!(-10600));
    pls.extend([dec!(500); 5]);
    let trades = history(&pls);

    let params = SimulationParams::new(200, 20, 10_000.0)
        .with_resample_method(ResampleMethod::Percentage)
        .with_seed(9);
    let pool = build_resample_pool(&trades, &params).unwrap();
    assert!(pool.values().contains(&-1.0));
    assert!(pool.values()[7..].iter().all(|&v| v == 0.0));

    let result = run_monte_carlo_simulation(&trades, &params).unwrap();
    assert!(
        result
            .simulations
            .iter()
            .any(|p| p.final_value == 0.0)
    );
    assert_all_finite(&result);
}

#[test]
fn test_annualization_identity_over_one_year() {
    let trades = mixed_history();
    let params = SimulationParams::new(25, 252, 10_000.0)
        .with_trades_per_year(252.0)
        .with_seed(3);
    let result = run_monte_carlo_simulation(&trades, &params).unwrap();
    for path in &result.simulations {
        assert_eq!(path.annualized_return, path.total_return);
    }
}

#[test]
fn test_parallel_execution_is_reproducible() {
    let trades = mixed_history();
    let timestamp = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let params = SimulationParams::new(500, 40, 10_000.0).with_seed(8);

    let sequential = MonteCarloRunner::new(params.clone())
        .with_timestamp(timestamp)
        .run(&trades)
        .unwrap();
    let parallel = MonteCarloRunner::new(params)
        .with_timestamp(timestamp)
        .with_execution_mode(ExecutionMode::Parallel)
        .run(&trades)
        .unwrap();
    assert_eq!(sequential, parallel);
}

#[test]
fn test_losses_beyond_capital_never_turn_profitable() {
    // The first trade loses 2.5x the 100 of capital it started from, so the
    // pool holds one -2.5 return and zeros after exhaustion.
    let mut trades = vec![Trade::new(start(), dec!(-250), 1, dec!(-150), "Strangle")];
    trades.extend((1..=10u64).map(|i| {
        Trade::new(start() + Days::new(i), dec!(0), 1, dec!(-150), "Strangle")
    }));

    let params = SimulationParams::new(200, 30, 10_000.0)
        .with_resample_method(ResampleMethod::Percentage)
        .with_seed(4);
    let pool = build_resample_pool(&trades, &params).unwrap();
    assert_eq!(pool.values()[0], -2.5);
    assert!(pool.values()[1..].iter().all(|&v| v == 0.0));

    let result = run_monte_carlo_simulation(&trades, &params).unwrap();
    for path in &result.simulations {
        assert!(path.final_value == 0.0 || path.final_value == 10_000.0);
        assert!(path.equity_curve.iter().all(|v| (-1.0..=0.0).contains(v)));
        assert!(path.total_return <= 0.0);
    }
    assert!(result.simulations.iter().any(|p| p.final_value == 0.0));
    assert_eq!(result.statistics.probability_of_profit, 0.0);
    assert!(result.statistics.mean_annualized_return <= 0.0);
    assert!(result.statistics.value_at_risk.p5 >= -1.0);
    assert!(result.percentiles.p95.iter().all(|&v| v <= 0.0));
    assert_all_finite(&result);
}

#[test]
fn test_cancellation_during_run_returns_no_result() {
    let trades = mixed_history();
    let num_simulations = 2_000_000;

    for mode in [ExecutionMode::Sequential, ExecutionMode::Parallel] {
        let token = CancellationToken::new();
        let params = SimulationParams::new(num_simulations, 50, 10_000.0).with_seed(6);
        let runner = MonteCarloRunner::new(params)
            .with_execution_mode(mode)
            .with_cancellation(token.clone());

        let outcome = std::thread::scope(|scope| {
            let handle = scope.spawn(|| runner.run(&trades));
            std::thread::sleep(std::time::Duration::from_millis(2));
            token.cancel();
            handle.join().unwrap()
        });

        match outcome {
            Err(SimulationError::Cancelled { completed }) => {
                assert!(completed < num_simulations);
            }
            other => panic!(
                "expected cancellation, got {:?}",
                other.map(|r| r.simulations.len())
            ),
        }
    }
}
