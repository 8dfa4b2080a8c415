//! Axum router wiring.
//!
//! - `POST /v1/hooks/:point` : apply the filter bound to an extension point
//! - `/healthz`, `/readyz`, `/metrics` : ops endpoints

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::{app_state::AppState, ops, transport};

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.cfg().gateway.max_body_bytes;
    Router::new()
        .route("/v1/hooks/:point", post(transport::http::invoke_hook))
        .route("/healthz", get(ops::healthz))
        .route("/readyz", get(ops::readyz))
        .route("/metrics", get(ops::metrics))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
