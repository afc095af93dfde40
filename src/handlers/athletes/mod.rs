//! Athlete roster

mod handler;
pub mod request;
pub mod response;

pub use handler::*;

use axum::{Router, routing::get};

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/athletes", get(handler::list_athletes))
}
