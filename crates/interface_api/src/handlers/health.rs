//! Health check handlers

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use domain_claims::ScanScope;
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub version: String,
    pub keys: usize,
    pub scan_scope: ScanScope,
    pub strict_store_errors: bool,
    pub checked_at: DateTime<Utc>,
}

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness check (includes the world state and contract settings)
pub async fn readiness_check(State(state): State<AppState>) -> Json<ReadinessResponse> {
    let config = state.peer.contract().config();
    Json(ReadinessResponse {
        status: "ready".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        keys: state.peer.key_count().await,
        scan_scope: config.scan_scope,
        strict_store_errors: config.strict_store_errors,
        checked_at: Utc::now(),
    })
}
