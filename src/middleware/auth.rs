//! Session middleware and access gates

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, request::Parts},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::{
    constants::SESSION_COOKIE_NAME,
    error::AppError,
    models::{Role, Session},
    services::AuthService,
    state::AppState,
    utils::read_cookie,
};

use super::flash::{FlashMessage, redirect_with_flash};

/// User behind the request's session cookie
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentUser {
    pub username: String,
    pub role: Role,
}

impl CurrentUser {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl From<Session> for CurrentUser {
    fn from(session: Session) -> Self {
        Self {
            username: session.username,
            role: session.role,
        }
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}

/// Raw session token from the request cookies
pub fn session_token(headers: &HeaderMap) -> Option<&str> {
    read_cookie(headers, SESSION_COOKIE_NAME).filter(|token| !token.is_empty())
}

/// Attach the [`CurrentUser`] of a live session to the request.
/// Never rejects; the gates below decide what anonymous requests may do.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(token) = session_token(request.headers()).map(str::to_owned) {
        match AuthService::resolve_session(state.db(), &token).await {
            Ok(Some(session)) => {
                debug!(username = %session.username, role = %session.role, "Session resolved");
                request.extensions_mut().insert(CurrentUser::from(session));
            }
            Ok(None) => debug!(path = %request.uri().path(), "Stale session cookie"),
            Err(e) => warn!(error = %e, "Failed to load session"),
        }
    }

    next.run(request).await
}

/// Send anonymous requests to the login page
pub async fn require_login(request: Request, next: Next) -> Response {
    if request.extensions().get::<CurrentUser>().is_none() {
        debug!(path = %request.uri().path(), "Login required");
        return Redirect::to("/login").into_response();
    }

    next.run(request).await
}

/// Admin-only routes. Anonymous requests go to the login page, other users
/// back to the results with a notice.
pub async fn require_admin(request: Request, next: Next) -> Response {
    let refusal = match request.extensions().get::<CurrentUser>() {
        None => {
            debug!(path = %request.uri().path(), "Login required");
            Some(Redirect::to("/login").into_response())
        }
        Some(user) if !user.is_admin() => {
            warn!(username = %user.username, path = %request.uri().path(), "Admin route refused");
            Some(redirect_with_flash("/results", FlashMessage::error("Admins only")))
        }
        Some(_) => None,
    };

    match refusal {
        Some(response) => response,
        None => next.run(request).await,
    }
}
