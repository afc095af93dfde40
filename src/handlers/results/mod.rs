//! Result listing and maintenance

mod handler;
pub mod request;
pub mod response;

pub use handler::*;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Routes open to any logged-in user
pub fn routes() -> Router<AppState> {
    Router::new().route("/results", get(handler::list_results))
}

/// Routes that change results
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/add", get(handler::add_result_page).post(handler::add_result))
        .route(
            "/results/edit/{id}",
            get(handler::edit_result_page).post(handler::edit_result),
        )
        .route("/results/delete/{id}", post(handler::delete_result))
}
