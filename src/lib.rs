//! SportsDay - Sports Day Results Tracker
//!
//! Web application for recording and ranking results at a school sports
//! day. Administrators enter results for athletes in events of their own
//! sex and grade; everyone with an account can browse per-event standings.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers and page templates (thin layer)
//! - **Services**: Business logic (admission rules, sessions, seeding)
//! - **Repositories**: Database access
//! - **Models**: Domain models
//! - **Ranking**: Per-event standings with shared ranks for ties

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod ranking;
pub mod seed;
pub mod services;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_utils;

use std::time::Duration;

use axum::{Router, http::StatusCode};
use tower_http::{
    compression::CompressionLayer, limit::RequestBodyLimitLayer, timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::constants::{MAX_FORM_BODY_BYTES, REQUEST_TIMEOUT_SECONDS};

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;

/// Build the application router with its middleware stack
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::routes())
        .layer(axum::middleware::from_fn(middleware::flash_middleware))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::session_middleware,
        ))
        .layer(axum::middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(REQUEST_TIMEOUT_SECONDS),
        ))
        .layer(RequestBodyLimitLayer::new(MAX_FORM_BODY_BYTES))
        .with_state(state)
}
