//! One-shot flash messages
//!
//! A flash travels in a cookie set on a redirect. The page rendered next
//! shows it and [`flash_middleware`] drops the cookie on that response.

use axum::{
    extract::{FromRequestParts, Request},
    http::{HeaderValue, header, request::Parts},
    middleware::Next,
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};

use crate::{
    constants::{FLASH_COOKIE_NAME, flash_levels},
    utils::{build_cookie, expire_cookie, read_cookie},
};

/// A message for the next rendered page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub level: String,
    pub message: String,
}

impl FlashMessage {
    pub fn new(level: &str, message: impl Into<String>) -> Self {
        Self {
            level: level.to_string(),
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(flash_levels::SUCCESS, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(flash_levels::ERROR, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(flash_levels::INFO, message)
    }

    /// Cookie-safe encoding: base64url of the JSON form
    pub fn encode(&self) -> String {
        URL_SAFE_NO_PAD.encode(serde_json::to_vec(self).unwrap_or_default())
    }

    pub fn decode(value: &str) -> Option<Self> {
        let bytes = URL_SAFE_NO_PAD.decode(value).ok()?;
        serde_json::from_slice(&bytes).ok()
    }

    /// `Set-Cookie` value carrying this message
    pub fn cookie(&self) -> String {
        build_cookie(FLASH_COOKIE_NAME, &self.encode(), None, false)
    }
}

/// Flash message sent with the current request, if any
#[derive(Debug, Clone, Default)]
pub struct Flash(pub Option<FlashMessage>);

impl<S> FromRequestParts<S> for Flash
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Flash(
            read_cookie(&parts.headers, FLASH_COOKIE_NAME).and_then(FlashMessage::decode),
        ))
    }
}

/// 303 redirect that leaves a flash message for the target page
pub fn redirect_with_flash(to: &str, flash: FlashMessage) -> Response {
    (
        AppendHeaders([(header::SET_COOKIE, flash.cookie())]),
        Redirect::to(to),
    )
        .into_response()
}

/// Expire a consumed flash cookie once a page has been rendered with it
pub async fn flash_middleware(request: Request, next: Next) -> Response {
    let had_flash = read_cookie(request.headers(), FLASH_COOKIE_NAME).is_some();

    let mut response = next.run(request).await;

    if had_flash && !response.status().is_redirection() && !sets_flash(&response) {
        if let Ok(value) = HeaderValue::from_str(&expire_cookie(FLASH_COOKIE_NAME)) {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
    }

    response
}

fn sets_flash(response: &Response) -> bool {
    let prefix = format!("{FLASH_COOKIE_NAME}=");
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .any(|v| v.starts_with(&prefix))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use super::*;

    #[test]
    fn test_encode_decode() {
        let flash = FlashMessage::error("Sex/grade mismatch between athlete & event");

        let encoded = flash.encode();

        assert!(!encoded.contains(';'));
        assert!(!encoded.contains('='));
        assert_eq!(FlashMessage::decode(&encoded), Some(flash));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert_eq!(FlashMessage::decode("not base64!"), None);
        assert_eq!(FlashMessage::decode(&URL_SAFE_NO_PAD.encode(b"{}")), None);
    }

    #[test]
    fn test_redirect_with_flash() {
        let response = redirect_with_flash("/results", FlashMessage::error("Admins only"));

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/results");
        assert!(sets_flash(&response));
    }
}
