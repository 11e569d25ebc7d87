//! Ledger engine: expense and income records on a transactional SQLite store.
//!
//! Every [`Engine`] operation runs in its own database transaction and
//! returns owned values.

pub use error::{EngineError, LedgerKind};
pub use expenses::{Expense, ExpensePatch, NewExpense};
pub use income::{Income, IncomePatch, NewIncome};
pub use ops::{Engine, EngineBuilder};
pub use reports::{CashflowStatus, CategoryTotal, NetCashflow, SourceTotal};

mod error;
mod expenses;
mod income;
mod ops;
mod reports;
pub mod storage;
mod util;

pub type ResultEngine<T> = Result<T, EngineError>;

/// Inclusive date range. Bounds are compared as strings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

impl DateRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}
