//! Landing page

mod handler;
pub mod response;

pub use handler::*;

use axum::{Router, routing::get};

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(handler::index))
}
