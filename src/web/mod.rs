// src/web/mod.rs
// Web server layer

pub mod api;
pub mod request;
pub mod state;

use std::any::Any;

use axum::{
    Router,
    http::StatusCode,
    response::Response,
    routing::{get, post},
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::web::state::AppState;

/// Create the web server router
pub fn create_router(state: AppState) -> Router {
    // The browser extension calls in cross-origin
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    let research_router = Router::new()
        .route("/health", get(api::health))
        .route("/process", post(api::process))
        .with_state(state);

    Router::new()
        .nest("/api/research", research_router)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Turn a handler panic into the 500 error envelope
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown error".to_string()
    };

    error!(error = %message, "Unexpected fault while handling request");
    api::error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Processing failed: {}", message),
    )
}
