use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, error, warn};

use crate::config::AnalyzerConfig;
use crate::models::{CategoryBreakdown, Rejection, Report, Tally, Transaction, TransactionType};

/// A record that passed validation, with its parsed type and amount
struct ValidTransaction<'a> {
    record: &'a Transaction,
    tx_type: TransactionType,
    amount: Decimal,
}

/// Builds a `Report` from a batch of transaction records
#[derive(Debug, Clone, Default)]
pub struct TransactionAnalyzer {
    config: AnalyzerConfig,
}

impl TransactionAnalyzer {
    /// Create an analyzer with the given thresholds
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Summarize a batch of transactions
    ///
    /// Records with an unknown type or a missing, non-numeric or non-positive
    /// amount are skipped. Returns `None` when the batch is empty or nothing
    /// in it is valid. The input is only borrowed, never reordered.
    ///
    /// Also returns `None` when a valid amount or any total falls outside the
    /// range of `Decimal`, since no exact report exists for that batch.
    pub fn analyze(&self, transactions: &[Transaction]) -> Option<Report> {
        if transactions.is_empty() {
            debug!("No transactions to analyze");
            return None;
        }

        let valid = Self::filter_valid(transactions)?;

        if valid.is_empty() {
            warn!(
                "None of the {} transactions are valid, no report produced",
                transactions.len()
            );
            return None;
        }

        debug!(
            "Analyzing {} valid transactions ({} discarded)",
            valid.len(),
            transactions.len() - valid.len()
        );

        let report = self.summarize(&valid);

        if report.is_none() {
            error!("Totals overflow the supported decimal range, no report produced");
        }

        report
    }

    /// Keep valid records in their original order
    /// `None` if a positive amount could not be represented
    fn filter_valid(transactions: &[Transaction]) -> Option<Vec<ValidTransaction<'_>>> {
        let mut valid = Vec::with_capacity(transactions.len());

        for record in transactions {
            match record.validate() {
                Ok((tx_type, amount)) => valid.push(ValidTransaction {
                    record,
                    tx_type,
                    amount,
                }),
                Err(Rejection::AmountOutOfRange(raw)) if raw > 0.0 => {
                    error!(
                        "Transaction '{}' has amount {} beyond the supported decimal range, no report produced",
                        record.id, raw
                    );
                    return None;
                }
                Err(rejection) => {
                    debug!("Discarding transaction '{}': {}", record.id, rejection);
                }
            }
        }

        Some(valid)
    }

    fn summarize(&self, valid: &[ValidTransaction<'_>]) -> Option<Report> {
        let (first, _) = valid.split_first()?;

        let mut total_credit = Decimal::ZERO;
        let mut total_debit = Decimal::ZERO;
        let mut highest = first;
        let mut category_breakdown = CategoryBreakdown::new();
        let mut contacts: Tally<usize> = Tally::new();
        let mut all_above_floor = true;
        let mut has_large_transaction = false;

        for tx in valid {
            match tx.tx_type {
                TransactionType::Credit => total_credit = total_credit.checked_add(tx.amount)?,
                TransactionType::Debit => total_debit = total_debit.checked_add(tx.amount)?,
            }

            // Strictly greater so the earliest record keeps a tied maximum
            if tx.amount > highest.amount {
                highest = tx;
            }

            if !category_breakdown.add(&tx.record.category, tx.amount)
                || !contacts.add(&tx.record.to, 1)
            {
                return None;
            }

            all_above_floor &= tx.amount > self.config.small_transaction_floor;
            has_large_transaction |= tx.amount >= self.config.large_transaction_threshold;
        }

        let (frequent_contact, _) = contacts.leader()?;
        let transaction_count = valid.len();
        let net_balance = total_credit.checked_sub(total_debit)?;
        let volume = total_credit.checked_add(total_debit)?;
        let avg_transaction = rounded_mean(volume, transaction_count)?;

        Some(Report {
            total_credit,
            total_debit,
            net_balance,
            transaction_count,
            avg_transaction,
            highest_transaction: highest.record.clone(),
            category_breakdown,
            frequent_contact: frequent_contact.to_string(),
            all_above_100: all_above_floor,
            has_large_transaction,
        })
    }
}

/// Mean to the nearest whole number, halves rounded away from zero
fn rounded_mean(total: Decimal, count: usize) -> Option<Decimal> {
    let mean = total.checked_div(Decimal::from(count))?;
    Some(mean.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
}

/// Analyze `transactions` with the default thresholds
pub fn analyze(transactions: &[Transaction]) -> Option<Report> {
    TransactionAnalyzer::default().analyze(transactions)
}
