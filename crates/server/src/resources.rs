//! Read-only resources

use std::io::ErrorKind;

use api_types::resource::{ResourceError, ServerInfo};
use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::server::{ServerState, TOOLS};

/// Serve the category file as it is on disk.
///
/// The file is read on every request so edits show up without a restart.
pub async fn categories(State(state): State<ServerState>) -> Response {
    match tokio::fs::read(&state.options.categories).await {
        Ok(bytes) => ([(header::CONTENT_TYPE, "application/json")], bytes).into_response(),
        Err(err) if err.kind() == ErrorKind::NotFound => (
            StatusCode::NOT_FOUND,
            Json(ResourceError {
                error: "Categories file not found".to_string(),
            }),
        )
            .into_response(),
        Err(err) => {
            tracing::error!(
                "failed to read categories file {}: {err}",
                state.options.categories.display()
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ResourceError {
                    error: "Could not read categories file".to_string(),
                }),
            )
                .into_response()
        }
    }
}

pub async fn server_info(State(state): State<ServerState>) -> Json<ServerInfo> {
    Json(ServerInfo {
        name: state.options.name.clone(),
        version: state.options.version.clone(),
        tools: TOOLS.iter().map(|tool| tool.to_string()).collect(),
        author: state.options.author.clone(),
    })
}
