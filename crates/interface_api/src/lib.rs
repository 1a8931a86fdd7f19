//! Claims Gateway
//!
//! This crate exposes the claim ledger contract over HTTP using Axum. Requests
//! are turned into contract invocations against an in-process [`Peer`].
//!
//! # Architecture
//!
//! - **Peer**: Contract plus world state, one invocation at a time
//! - **Handlers**: One per contract function, plus a generic `invoke`
//! - **Middleware**: Request ids, tracing, audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Contract errors mapped to HTTP statuses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(peer);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod peer;

use std::sync::Arc;

use axum::{
    http::HeaderName,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{claims, health, invoke};
use crate::middleware::{audit_middleware, REQUEST_ID_HEADER};
pub use crate::peer::{Invocation, Peer};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub peer: Arc<Peer>,
}

/// Creates the gateway router
///
/// # Arguments
///
/// * `peer` - Peer hosting the contract
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(peer: Arc<Peer>) -> Router {
    let state = AppState { peer };
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Claims routes
    let claims_routes = Router::new()
        .route("/", get(claims::list_claims).post(claims::create_claim))
        .route("/:key", get(claims::get_claim));

    let api_routes = Router::new()
        .nest("/claims", claims_routes)
        .route("/ledger/init", post(claims::init_ledger))
        .route("/invoke", post(invoke::invoke))
        .layer(axum_middleware::from_fn(audit_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
