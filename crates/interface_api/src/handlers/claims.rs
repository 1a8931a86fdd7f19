//! Claims handlers

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use domain_claims::{seed_claims, Function};

use crate::dto::claims::*;
use crate::{error::ApiError, AppState};

fn json_payload(payload: Vec<u8>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], payload)
}

/// Lists every record in the world state (`queryAllClaims`)
pub async fn list_claims(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let (_, payload) = state.peer.execute(Function::QueryAllClaims, &[]).await?;
    Ok(json_payload(payload))
}

/// Gets a claim by key (`queryClaim`)
pub async fn get_claim(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let (_, payload) = state
        .peer
        .execute(Function::QueryClaim, std::slice::from_ref(&key))
        .await?;
    if payload.is_empty() {
        return Err(ApiError::NotFound(format!("Claim {} not found", key)));
    }
    Ok(json_payload(payload))
}

/// Creates or overwrites a claim (`createClaim`)
pub async fn create_claim(
    State(state): State<AppState>,
    Json(request): Json<CreateClaimRequest>,
) -> Result<(StatusCode, Json<CreateClaimResponse>), ApiError> {
    let key = request.key.clone();
    let (tx_id, _) = state
        .peer
        .execute(Function::CreateClaim, &request.into_args())
        .await?;
    Ok((StatusCode::CREATED, Json(CreateClaimResponse { key, tx_id })))
}

/// Seeds the ledger (`initLedger`)
pub async fn init_ledger(
    State(state): State<AppState>,
) -> Result<Json<LedgerInitResponse>, ApiError> {
    let (tx_id, _) = state.peer.execute(Function::InitLedger, &[]).await?;
    Ok(Json(LedgerInitResponse {
        tx_id,
        seeded: seed_claims().len(),
    }))
}
