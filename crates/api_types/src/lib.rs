use serde::{Deserialize, Serialize};

/// Discriminant carried by every envelope.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Error,
}

/// Inclusive date range shared by list and report tools.
#[derive(Debug, Serialize, Deserialize)]
pub struct DateRangeQuery {
    pub start_date: String,
    pub end_date: String,
}

pub mod expense {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseNew {
        /// `YYYY-MM-DD`.
        pub date: String,
        pub amount: f64,
        pub category: String,
        pub subcategory: Option<String>,
        pub note: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseGet {
        pub expense_id: i64,
    }

    /// Edit request. Absent fields are left unchanged, `""` clears a field.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseEdit {
        pub expense_id: i64,
        pub date: Option<String>,
        pub amount: Option<f64>,
        pub category: Option<String>,
        pub subcategory: Option<String>,
        pub note: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseBulkDelete {
        pub expense_ids: Vec<i64>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseView {
        pub id: i64,
        pub date: String,
        pub amount: f64,
        pub category: String,
        pub subcategory: String,
        pub note: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseResponse {
        pub status: Status,
        pub expense: ExpenseView,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct BulkDeleteResponse {
        pub status: Status,
        pub deleted_count: u64,
        pub message: String,
    }
}

pub mod income {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct IncomeNew {
        pub date: String,
        pub amount: f64,
        pub source: String,
        pub note: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct IncomeGet {
        pub income_id: i64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct IncomeEdit {
        pub income_id: i64,
        pub date: Option<String>,
        pub amount: Option<f64>,
        pub source: Option<String>,
        pub note: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct IncomeView {
        pub id: i64,
        pub date: String,
        pub amount: f64,
        pub source: String,
        pub note: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct IncomeResponse {
        pub status: Status,
        pub income: IncomeView,
    }
}

pub mod report {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct Summarize {
        pub start_date: String,
        pub end_date: String,
        /// Restrict to one category. Empty or absent means all.
        pub category: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct SummarizeIncome {
        pub start_date: String,
        pub end_date: String,
        pub source: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct CategoryTotalView {
        pub category: String,
        pub total_amount: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct SourceTotalView {
        pub source: String,
        pub total_amount: f64,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum CashflowStatus {
        Positive,
        Negative,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct NetCashflowView {
        pub start_date: String,
        pub end_date: String,
        pub total_income: f64,
        pub total_expenses: f64,
        pub net_cashflow: f64,
        pub status: CashflowStatus,
    }
}

/// Envelopes shared by every tool.
pub mod tool {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct Created {
        pub status: Status,
        pub id: i64,
    }

    /// Confirmation or failure with a human readable message.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct MessageResponse {
        pub status: Status,
        pub message: String,
    }

    impl MessageResponse {
        pub fn ok(message: impl Into<String>) -> Self {
            Self {
                status: Status::Ok,
                message: message.into(),
            }
        }

        pub fn error(message: impl Into<String>) -> Self {
            Self {
                status: Status::Error,
                message: message.into(),
            }
        }
    }
}

pub mod resource {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ServerInfo {
        pub name: String,
        pub version: String,
        pub tools: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub author: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct ResourceError {
        pub error: String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_without_optional_fields() {
        let edit: expense::ExpenseEdit =
            serde_json::from_str(r#"{"expense_id": 3, "note": ""}"#).unwrap();
        assert_eq!(edit.expense_id, 3);
        assert_eq!(edit.note.as_deref(), Some(""));
        assert!(edit.amount.is_none());
        assert!(edit.category.is_none());
    }

    #[test]
    fn error_envelope() {
        let body = serde_json::to_value(tool::MessageResponse::error("Expense ID 1 not found"))
            .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"status": "error", "message": "Expense ID 1 not found"})
        );
    }
}
