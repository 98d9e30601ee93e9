use rust_decimal::Decimal;

/// Amount at or above which a transaction counts as large
pub const DEFAULT_LARGE_TRANSACTION_THRESHOLD: i64 = 5000;

/// Amount every transaction must exceed for `all_above_100` to hold
pub const DEFAULT_SMALL_TRANSACTION_FLOOR: i64 = 100;

/// Thresholds used by the summary flags of a report
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    /// Inclusive lower bound for `has_large_transaction`
    pub large_transaction_threshold: Decimal,
    /// Exclusive lower bound for `all_above_100`
    pub small_transaction_floor: Decimal,
}

impl AnalyzerConfig {
    pub fn with_large_transaction_threshold(mut self, threshold: Decimal) -> Self {
        self.large_transaction_threshold = threshold;
        self
    }

    pub fn with_small_transaction_floor(mut self, floor: Decimal) -> Self {
        self.small_transaction_floor = floor;
        self
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            large_transaction_threshold: Decimal::from(DEFAULT_LARGE_TRANSACTION_THRESHOLD),
            small_transaction_floor: Decimal::from(DEFAULT_SMALL_TRANSACTION_FLOOR),
        }
    }
}
