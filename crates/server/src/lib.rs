use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::IntoResponse,
};
use engine::EngineError;

use api_types::tool::MessageResponse;
pub use server::{ServerOptions, ServerState, TOOLS, router, run_with_listener};

mod expenses;
mod income;
mod reports;
mod resources;
mod server;

pub mod types {
    pub mod expense {
        pub use api_types::expense::{
            BulkDeleteResponse, ExpenseBulkDelete, ExpenseEdit, ExpenseGet, ExpenseNew,
            ExpenseResponse, ExpenseView,
        };
    }

    pub mod income {
        pub use api_types::income::{IncomeEdit, IncomeGet, IncomeNew, IncomeResponse, IncomeView};
    }

    pub mod report {
        pub use api_types::report::{
            CashflowStatus, CategoryTotalView, NetCashflowView, SourceTotalView, Summarize,
            SummarizeIncome,
        };
    }

    pub use api_types::{DateRangeQuery, Status};
    pub use api_types::resource::{ResourceError, ServerInfo};
    pub use api_types::tool::{Created, MessageResponse};
}

pub enum ServerError {
    Engine(EngineError),
    /// The request body could not be decoded into the tool arguments.
    Rejection(JsonRejection),
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::NotFound { .. } => StatusCode::NOT_FOUND,
        EngineError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
        EngineError::Database(_) | EngineError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    if err.is_fault() {
        tracing::error!("storage error: {err}");
        return "internal server error".to_string();
    }
    err.to_string()
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ServerError::Engine(err) => (status_for_engine_error(&err), message_for_engine_error(err)),
            ServerError::Rejection(rejection) => (rejection.status(), rejection.body_text()),
        };

        (status, Json(MessageResponse::error(message))).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

impl From<JsonRejection> for ServerError {
    fn from(value: JsonRejection) -> Self {
        Self::Rejection(value)
    }
}
