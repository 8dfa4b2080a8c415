//! Hook invocation over HTTP.
//!
//! The host posts the extension point's arguments as JSON and uses the
//! returned `value` in place of its own. Bodies are decoded here (not by an
//! axum extractor) so malformed input surfaces as a `BAD_REQUEST` JSON error
//! like every other failure.

use std::time::Instant;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use enumguard_core::error::{ClientCode, GuardError};
use enumguard_core::HookPoint;

use crate::app_state::AppState;

/// Envelope version of hook responses.
pub const ENVELOPE_VERSION: u8 = 1;

/// HTTP adapter for [`GuardError`].
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub GuardError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.client_code() {
            ClientCode::BadRequest | ClientCode::UnknownHook | ClientCode::UnsupportedVersion => {
                StatusCode::BAD_REQUEST
            }
            ClientCode::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ClientCode::HookDisabled => StatusCode::NOT_FOUND,
            ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.0.client_code().as_str(),
            "message": self.0.to_string(),
        }));
        (self.status(), body).into_response()
    }
}

/// Body rejections (over-limit, unreadable) become JSON errors like the rest.
fn body_error(rejection: BytesRejection) -> GuardError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        GuardError::PayloadTooLarge(rejection.body_text())
    } else {
        GuardError::BadRequest(rejection.body_text())
    }
}

fn hook_response(point: HookPoint, value: Value) -> Json<Value> {
    Json(json!({
        "v": ENVELOPE_VERSION,
        "point": point.as_str(),
        "value": value,
    }))
}

pub async fn invoke_hook(
    State(app): State<AppState>,
    Path(name): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Value>, ApiError> {
    let metrics = app.metrics();

    let body = body.map_err(|rejection| {
        let e = body_error(rejection);
        metrics.rejected_requests.inc(&[("code", e.client_code().as_str())]);
        tracing::warn!(hook = %name, error = %e, "request body rejected");
        ApiError(e)
    })?;

    let point = HookPoint::parse(&name).map_err(|e| {
        metrics.rejected_requests.inc(&[("code", e.client_code().as_str())]);
        tracing::warn!(hook = %name, "unknown hook requested");
        ApiError(e)
    })?;

    let args: Value = serde_json::from_slice(&body).map_err(|e| {
        let e = GuardError::BadRequest(format!("invalid json body: {e}"));
        metrics.rejected_requests.inc(&[("code", e.client_code().as_str())]);
        ApiError(e)
    })?;

    let started = Instant::now();
    let res = app.dispatcher().dispatch(point, args);
    metrics.hook_duration.observe(&[("hook", point.as_str())], started.elapsed());

    match res {
        Ok(value) => {
            metrics.hook_invocations.inc(&[("hook", point.as_str()), ("result", "ok")]);
            tracing::debug!(hook = %point, "hook applied");
            Ok(hook_response(point, value))
        }
        Err(e) => {
            let code = e.client_code().as_str();
            metrics.hook_invocations.inc(&[("hook", point.as_str()), ("result", code)]);
            tracing::warn!(hook = %point, code, error = %e, "hook rejected");
            Err(ApiError(e))
        }
    }
}
