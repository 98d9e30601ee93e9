pub mod report;
pub mod tally;
pub mod transaction;

pub use report::{CategoryBreakdown, Report};
pub use tally::{Accumulate, Tally};
pub use transaction::{Rejection, Transaction, TransactionType};
