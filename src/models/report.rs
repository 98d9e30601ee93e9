use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::tally::Tally;
use super::transaction::Transaction;

/// Summary of a batch of valid transactions
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub total_credit: Decimal,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub total_debit: Decimal,
    /// Credits minus debits, may be negative
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub net_balance: Decimal,
    pub transaction_count: usize,
    /// Mean amount rounded to a whole number, halves round up
    #[serde(serialize_with = "serialize_whole_number")]
    pub avg_transaction: Decimal,
    /// Copy of the first record carrying the largest amount
    pub highest_transaction: Transaction,
    pub category_breakdown: CategoryBreakdown,
    pub frequent_contact: String,
    pub all_above_100: bool,
    pub has_large_transaction: bool,
}

/// Total amount per category, credits and debits combined
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryBreakdown(Tally<Decimal>);

impl CategoryBreakdown {
    pub fn new() -> Self {
        Self(Tally::new())
    }

    /// Returns false if the category total would overflow
    pub fn add(&mut self, category: &str, amount: Decimal) -> bool {
        self.0.add(category, amount)
    }

    pub fn get(&self, category: &str) -> Option<Decimal> {
        self.0.get(category).copied()
    }

    /// Categories with their totals, in the order they were first seen
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.0.iter().map(|(category, amount)| (category, *amount))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Sum over every category
    pub fn total(&self) -> Decimal {
        self.iter().map(|(_, amount)| amount).sum()
    }
}

/// Whole numbers print without a fractional part, falling back to a float
/// when the value does not fit in an `i64`
fn serialize_whole_number<S>(value: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value.to_i64() {
        Some(whole) => serializer.serialize_i64(whole),
        None => rust_decimal::serde::float::serialize(value, serializer),
    }
}

#[derive(Serialize)]
struct Amount(#[serde(serialize_with = "rust_decimal::serde::float::serialize")] Decimal);

// Serialized as a JSON object keyed by category, keeping first-seen order
impl Serialize for CategoryBreakdown {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (category, amount) in self.iter() {
            map.serialize_entry(category, &Amount(amount))?;
        }
        map.end()
    }
}
