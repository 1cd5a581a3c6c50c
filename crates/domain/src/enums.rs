use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How historical trades are turned into a resample pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResampleMethod {
    /// One dollar P&L value per trade.
    #[default]
    Trades,
    /// One summed dollar P&L value per trading day.
    Daily,
    /// One fractional return per trade, relative to running capital.
    Percentage,
}

impl ResampleMethod {
    /// Whether pool values compound (`capital *= 1 + v`) rather than add.
    pub fn is_multiplicative(&self) -> bool {
        matches!(self, Self::Percentage)
    }
}

/// Source of randomness for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<u64>", into = "Option<u64>")]
pub enum SeedMode {
    /// Reproducible run; trial `i` uses `seed + i`.
    Seeded(u64),
    /// Non-deterministic run backed by the thread-local generator.
    #[default]
    Unseeded,
}

impl From<Option<u64>> for SeedMode {
    fn from(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::Seeded(seed),
            None => Self::Unseeded,
        }
    }
}

impl From<SeedMode> for Option<u64> {
    fn from(mode: SeedMode) -> Self {
        match mode {
            SeedMode::Seeded(seed) => Some(seed),
            SeedMode::Unseeded => None,
        }
    }
}

/// Starting capital used to turn dollar P&L into percentage returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapitalAnchor {
    /// Capital before the first trade of the strategy-filtered series.
    #[default]
    FirstFilteredTrade,
    /// Capital before the first trade of the whole portfolio.
    FirstPortfolioTrade,
    /// An explicit starting capital.
    Fixed(Decimal),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_only_percentage_is_multiplicative() {
        assert!(!ResampleMethod::Trades.is_multiplicative());
        assert!(!ResampleMethod::Daily.is_multiplicative());
        assert!(ResampleMethod::Percentage.is_multiplicative());
    }

    #[test]
    fn test_seed_mode_serde() {
        let seeded: SeedMode = serde_json::from_str("42").unwrap();
        let unseeded: SeedMode = serde_json::from_str("null").unwrap();
        assert_eq!(seeded, SeedMode::Seeded(42));
        assert_eq!(unseeded, SeedMode::Unseeded);
        assert_eq!(serde_json::to_string(&SeedMode::Seeded(7)).unwrap(), "7");
    }

    #[test]
    fn test_resample_method_serde() {
        let method: ResampleMethod = serde_json::from_str("\"daily\"").unwrap();
        assert_eq!(method, ResampleMethod::Daily);
    }

    #[test]
    fn test_capital_anchor_serde() {
        let anchor: CapitalAnchor = serde_json::from_str(r#"{"fixed":"25000"}"#).unwrap();
        assert_eq!(anchor, CapitalAnchor::Fixed(dec!(25000)));
        let anchor: CapitalAnchor = serde_json::from_str("\"first_portfolio_trade\"").unwrap();
        assert_eq!(anchor, CapitalAnchor::FirstPortfolioTrade);
    }
}
