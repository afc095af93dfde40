//! HTTP Request Handlers
//!
//! Handlers are organized by domain. Each domain exposes its routes and the
//! access gates are applied here.

pub mod athletes;
pub mod auth;
pub mod dashboard;
pub mod events;
pub mod health;
pub mod page;
pub mod results;

use axum::{Router, middleware};

use crate::{
    middleware::{require_admin, require_login},
    state::AppState,
};

/// Create all routes
pub fn routes() -> Router<AppState> {
    let members = Router::new()
        .merge(dashboard::routes())
        .merge(results::routes())
        .route_layer(middleware::from_fn(require_login));

    let admin = Router::new()
        .merge(results::admin_routes())
        .merge(athletes::routes())
        .merge(events::routes())
        .route_layer(middleware::from_fn(require_admin));

    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(members)
        .merge(admin)
}
