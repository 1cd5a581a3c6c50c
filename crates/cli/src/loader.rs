//! Trade history loading from CSV exports.

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};
use optiq_domain::entities::trade::Trade;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One CSV row. Accepts snake_case headers or the column names used by
/// common backtest exports.
#[derive(Debug, Deserialize)]
struct TradeRow {
    #[serde(alias = "Date Opened")]
    date_opened: NaiveDate,
    #[serde(default, alias = "Time Opened")]
    time_opened: Option<NaiveTime>,
    #[serde(alias = "P/L")]
    pl: Decimal,
    #[serde(alias = "No. of Contracts")]
    num_contracts: i64,
    #[serde(alias = "Funds at Close")]
    funds_at_close: Decimal,
    #[serde(default, alias = "Strategy")]
    strategy: String,
}

impl From<TradeRow> for Trade {
    fn from(row: TradeRow) -> Self {
        let trade = Trade::new(
            row.date_opened,
            row.pl,
            row.num_contracts,
            row.funds_at_close,
            row.strategy,
        );
        match row.time_opened {
            Some(time) => trade.with_time_opened(time),
            None => trade,
        }
    }
}

/// Reads trades from any CSV source with a header row.
pub fn read_trades<R: Read>(reader: R) -> Result<Vec<Trade>> {
    let mut csv = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    csv.deserialize::<TradeRow>()
        .enumerate()
        .map(|(i, row)| {
            row.map(Trade::from)
                .with_context(|| format!("Invalid trade on data row {}", i + 1))
        })
        .collect()
}

/// Loads trades from a CSV file.
pub fn load_trades(path: &Path) -> Result<Vec<Trade>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    read_trades(file).with_context(|| format!("Failed to read trades from {}", path.display()))
}
