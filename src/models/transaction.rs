use rust_decimal::Decimal;
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    Credit,
    Debit,
}

impl TransactionType {
    /// Map a raw type label to a variant
    /// Only the exact lowercase literals are accepted
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "credit" => Some(Self::Credit),
            "debit" => Some(Self::Debit),
            _ => None,
        }
    }
}

/// Reason a record was left out of the analysis
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Rejection {
    #[error("unknown transaction type '{0}'")]
    UnknownType(String),

    #[error("amount is missing or not numeric")]
    MissingAmount,

    #[error("amount {0} is not positive")]
    NonPositiveAmount(Decimal),

    #[error("amount {0} is outside the supported decimal range")]
    AmountOutOfRange(f64),
}

/// Transaction record as it appears in the input
///
/// The type label is kept verbatim so the record can be echoed back unchanged
/// in a report. Absent string fields default to empty and an absent or
/// non-numeric amount becomes `None`. A number too large for `Decimal` also
/// leaves `amount` empty and is kept in `out_of_range_amount`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawTransaction")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub tx_type: String,
    #[serde(serialize_with = "rust_decimal::serde::float_option::serialize")]
    pub amount: Option<Decimal>,
    pub to: String,
    pub category: String,
    pub date: String,
    #[serde(skip)]
    pub out_of_range_amount: Option<f64>,
}

impl Transaction {
    /// Parsed type of this record, if the label is one we understand
    pub fn transaction_type(&self) -> Option<TransactionType> {
        TransactionType::parse(&self.tx_type)
    }

    /// Check the record is usable for analysis
    /// Returns the parsed type and the amount, which is strictly positive
    pub fn validate(&self) -> Result<(TransactionType, Decimal), Rejection> {
        let tx_type = self
            .transaction_type()
            .ok_or_else(|| Rejection::UnknownType(self.tx_type.clone()))?;

        if let Some(raw) = self.out_of_range_amount {
            return Err(Rejection::AmountOutOfRange(raw));
        }

        let amount = self.amount.ok_or(Rejection::MissingAmount)?;
        if amount <= Decimal::ZERO {
            return Err(Rejection::NonPositiveAmount(amount));
        }

        Ok((tx_type, amount))
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Wire shape of a record before the amount is classified
#[derive(Deserialize)]
struct RawTransaction {
    #[serde(default)]
    id: String,
    #[serde(rename = "type", default)]
    tx_type: String,
    #[serde(default)]
    amount: Option<AmountField>,
    #[serde(default)]
    to: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    date: String,
}

/// Accepts anything in the amount slot so one bad value only invalidates its
/// own record instead of failing the whole document
#[derive(Deserialize)]
#[serde(untagged)]
enum AmountField {
    Numeric(Decimal),
    Float(f64),
    NonNumeric(IgnoredAny),
}

impl From<RawTransaction> for Transaction {
    fn from(raw: RawTransaction) -> Self {
        let (amount, out_of_range_amount) = match raw.amount {
            Some(AmountField::Numeric(amount)) => (Some(amount), None),
            // Only magnitudes above Decimal::MAX fail the first variant
            Some(AmountField::Float(value)) if value.is_finite() && value.abs() > 1.0 => {
                (None, Some(value))
            }
            Some(AmountField::Float(_)) | Some(AmountField::NonNumeric(_)) | None => (None, None),
        };

        Self {
            id: raw.id,
            tx_type: raw.tx_type,
            amount,
            to: raw.to,
            category: raw.category,
            date: raw.date,
            out_of_range_amount,
        }
    }
}
