use axum::{
    Router,
    routing::{get, post},
};

use std::{path::PathBuf, sync::Arc};

use crate::{expenses, income, reports, resources};
use engine::Engine;

/// Names of the tools served under `/tools/<name>`.
pub const TOOLS: [&str; 14] = [
    "add_expense",
    "list_expenses",
    "get_expense",
    "edit_expense",
    "delete_expense",
    "bulk_delete_expenses",
    "summarize",
    "add_income",
    "list_income",
    "get_income",
    "edit_income",
    "delete_income",
    "net_cashflow",
    "summarize_income",
];

/// What the server reports about itself and where it finds the category file.
#[derive(Clone, Debug)]
pub struct ServerOptions {
    pub name: String,
    /// Version advertised by the server resource, independent of the crate version.
    pub version: String,
    pub author: Option<String>,
    pub categories: PathBuf,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            name: "Expense Tracker Server".to_string(),
            version: "1.0.0".to_string(),
            author: None,
            categories: PathBuf::from("categories.json"),
        }
    }
}

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
    pub options: Arc<ServerOptions>,
}

pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/tools/add_expense", post(expenses::add_expense))
        .route("/tools/list_expenses", post(expenses::list_expenses))
        .route("/tools/get_expense", post(expenses::get_expense))
        .route("/tools/edit_expense", post(expenses::edit_expense))
        .route("/tools/delete_expense", post(expenses::delete_expense))
        .route(
            "/tools/bulk_delete_expenses",
            post(expenses::bulk_delete_expenses),
        )
        .route("/tools/summarize", post(reports::summarize))
        .route("/tools/add_income", post(income::add_income))
        .route("/tools/list_income", post(income::list_income))
        .route("/tools/get_income", post(income::get_income))
        .route("/tools/edit_income", post(income::edit_income))
        .route("/tools/delete_income", post(income::delete_income))
        .route("/tools/net_cashflow", post(reports::net_cashflow))
        .route("/tools/summarize_income", post(reports::summarize_income))
        .route("/resources/categories", get(resources::categories))
        .route("/resources/server", get(resources::server_info))
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    options: ServerOptions,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("{} listening on {}", options.name, addr);

    let state = ServerState {
        engine: Arc::new(engine),
        options: Arc::new(options),
    };

    axum::serve(listener, router(state)).await
}
