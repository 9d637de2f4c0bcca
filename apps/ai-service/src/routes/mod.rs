pub mod cors;
pub mod health;

use std::any::Any;

use anyhow::Result;
use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::config::Config;
use crate::errors::AppError;
use crate::questions::handlers::handle_generate_questions;
use crate::state::AppState;
use crate::transparency::handlers::handle_transparency_score;

/// Renders a handler panic as the generic 500 body.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    AppError::Internal(anyhow::anyhow!("handler panicked: {detail}")).into_response()
}

pub fn build_router(state: AppState, config: &Config) -> Result<Router> {
    let router = Router::new()
        .route("/", get(health::service_info_handler))
        .route("/health", get(health::service_info_handler))
        .route("/generate-questions", post(handle_generate_questions))
        .route("/transparency-score", post(handle_transparency_score))
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors::cors_layer(&config.allowed_origins)?);

    Ok(router)
}
