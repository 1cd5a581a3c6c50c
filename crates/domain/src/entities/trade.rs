use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A closed trade from the trader's history.
///
/// Trades are read-only inputs to the simulation; the engine never mutates
/// them and treats their order as irrelevant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    /// Calendar date the trade was opened.
    pub date_opened: NaiveDate,
    /// Time of day the trade was opened, used to order same-day trades.
    #[serde(default)]
    pub time_opened: Option<NaiveTime>,
    /// Realized profit or loss in dollars.
    pub pl: Decimal,
    /// Number of contracts traded.
    pub num_contracts: i64,
    /// Account funds after the trade closed.
    pub funds_at_close: Decimal,
    /// Strategy label the trade belongs to.
    pub strategy: String,
}

impl Trade {
    pub fn new(
        date_opened: NaiveDate,
        pl: Decimal,
        num_contracts: i64,
        funds_at_close: Decimal,
        strategy: impl Into<String>,
    ) -> Self {
        Self {
            date_opened,
            time_opened: None,
            pl,
            num_contracts,
            funds_at_close,
            strategy: strategy.into(),
        }
    }

    #[must_use]
    pub fn with_time_opened(mut self, time: NaiveTime) -> Self {
        self.time_opened = Some(time);
        self
    }

    /// Key used to order trades chronologically.
    pub fn chronological_key(&self) -> (NaiveDate, Option<NaiveTime>) {
        (self.date_opened, self.time_opened)
    }

    /// Contract count used as a divisor; non-positive counts count as one lot.
    pub fn lot_divisor(&self) -> Decimal {
        if self.num_contracts <= 0 {
            Decimal::ONE
        } else {
            Decimal::from(self.num_contracts)
        }
    }

    /// P&L scaled to a single contract.
    pub fn pl_per_lot(&self) -> Decimal {
        self.pl / self.lot_divisor()
    }

    /// P&L, optionally scaled to a single contract.
    pub fn effective_pl(&self, normalize_to_one_lot: bool) -> Decimal {
        if normalize_to_one_lot {
            self.pl_per_lot()
        } else {
            self.pl
        }
    }

    /// Account capital just before this trade's P&L was realized.
    pub fn capital_before(&self) -> Decimal {
        self.funds_at_close - self.pl
    }
}
