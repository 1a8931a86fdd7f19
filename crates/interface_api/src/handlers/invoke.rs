//! Generic invocation handler

use axum::{extract::State, http::StatusCode, Json};

use crate::dto::invoke::{InvokeRequest, InvokeResponse};
use crate::AppState;

/// Submits any function name and arguments, returning the contract envelope
///
/// The HTTP status mirrors the envelope status (200 or 500).
pub async fn invoke(
    State(state): State<AppState>,
    Json(request): Json<InvokeRequest>,
) -> (StatusCode, Json<InvokeResponse>) {
    let invocation = state.peer.submit(&request.function, &request.args).await;
    let status = if invocation.response.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(InvokeResponse::from(invocation)))
}
