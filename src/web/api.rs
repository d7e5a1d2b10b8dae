// src/web/api.rs
// REST API handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::prompt::Operation;
use crate::web::request::ProcessRequest;
use crate::web::state::AppState;

/// JSON envelope for non-paraphrase results
#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub operation: String,
    pub result: String,
}

/// Body of every error response: `{ "error": ... }`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

// ═══════════════════════════════════════
// HEALTH
// ═══════════════════════════════════════

pub async fn health() -> &'static str {
    "ok"
}

// ═══════════════════════════════════════
// PROCESS
// ═══════════════════════════════════════

pub async fn process(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => {
            warn!(status = %rejection.status(), "Rejected request body: {}", rejection.body_text());
            return error_response(
                rejection.status(),
                format!("Invalid request body: {}", rejection.body_text()),
            );
        }
    };

    let request = match ProcessRequest::from_json(&body)
        .into_research_request()
        .validated()
    {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "Invalid process request");
            return error_response(StatusCode::BAD_REQUEST, e.to_string());
        }
    };

    let result = state.service.process_content(&request).await;

    let plain_text = Operation::parse(&request.operation)
        .map(|op| op.returns_plain_text())
        .unwrap_or(false);

    if plain_text {
        (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            result,
        )
            .into_response()
    } else {
        Json(ProcessResponse {
            operation: request.operation,
            result,
        })
        .into_response()
    }
}
