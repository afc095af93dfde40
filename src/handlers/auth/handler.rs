//! Authentication handler implementations

use askama::Template;
use axum::{
    Form,
    extract::State,
    http::{HeaderMap, header::SET_COOKIE},
    response::{AppendHeaders, Html, IntoResponse, Redirect, Response},
};
use tracing::{debug, info, warn};
use validator::Validate;

use crate::{
    constants::SESSION_COOKIE_NAME,
    error::{AppError, AppResult},
    handlers::page::PageContext,
    middleware::{FlashMessage, auth::session_token},
    services::AuthService,
    state::AppState,
    utils::{build_cookie, expire_cookie},
};

use super::{request::LoginForm, response::LoginTemplate};

/// Show the login form
pub async fn login_page(page: PageContext) -> AppResult<Html<String>> {
    let template = LoginTemplate {
        page,
        username: String::new(),
    };

    Ok(Html(template.render()?))
}

/// Check credentials, open a session and go to the dashboard
pub async fn login(
    State(state): State<AppState>,
    page: PageContext,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    if let Err(e) = form.validate() {
        debug!(error = %e, "Login form rejected");
        return bad_credentials(page, form.username);
    }

    match AuthService::login(state.db(), state.config(), &form.username, &form.password).await {
        Ok((user, token)) => {
            let session = &state.config().session;
            let session_cookie = build_cookie(
                SESSION_COOKIE_NAME,
                &token,
                Some(session.expiry_hours * 3600),
                session.cookie_secure,
            );
            let welcome = FlashMessage::success(format!("Welcome, {}", user.username));

            Ok((
                AppendHeaders([(SET_COOKIE, session_cookie), (SET_COOKIE, welcome.cookie())]),
                Redirect::to("/"),
            )
                .into_response())
        }
        Err(AppError::InvalidCredentials) => bad_credentials(page, form.username),
        Err(e) => Err(e),
    }
}

/// Close the session and return to the login form
pub async fn logout(State(state): State<AppState>, page: PageContext, headers: HeaderMap) -> Response {
    if let Some(token) = session_token(&headers) {
        match AuthService::logout(state.db(), token).await {
            Ok(()) => info!(username = %page.username(), "User logged out"),
            Err(e) => warn!(error = %e, "Failed to delete session"),
        }
    }

    let notice = FlashMessage::info("Logged out");
    (
        AppendHeaders([
            (SET_COOKIE, expire_cookie(SESSION_COOKIE_NAME)),
            (SET_COOKIE, notice.cookie()),
        ]),
        Redirect::to("/login"),
    )
        .into_response()
}

fn bad_credentials(page: PageContext, username: String) -> AppResult<Response> {
    let template = LoginTemplate {
        page: page.with_flash(FlashMessage::error(AppError::InvalidCredentials.to_string())),
        username: username.trim().to_string(),
    };

    Ok(Html(template.render()?).into_response())
}
