//! Login and logout

mod handler;
pub mod request;
pub mod response;

pub use handler::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Authentication routes (public)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(handler::login_page).post(handler::login))
        .route("/logout", get(handler::logout))
}
