//! Aggregated views over the ledgers.

use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

/// Total of the expenses of one category in a date range.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromQueryResult)]
pub struct CategoryTotal {
    pub category: String,
    pub total_amount: f64,
}

/// Total of the income of one source in a date range.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromQueryResult)]
pub struct SourceTotal {
    pub source: String,
    pub total_amount: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CashflowStatus {
    Positive,
    Negative,
}

/// Income against expenses over a date range.
///
/// The three figures are rounded to cents. `status` is taken from the
/// unrounded difference, so a tiny negative net that rounds to `0.0` is still
/// `Negative`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NetCashflow {
    pub start_date: String,
    pub end_date: String,
    pub total_income: f64,
    pub total_expenses: f64,
    pub net_cashflow: f64,
    pub status: CashflowStatus,
}
