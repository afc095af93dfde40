//! Cookie header helpers

use axum::http::{HeaderMap, header};

/// Value of the named cookie across all `Cookie` request headers
pub fn read_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

/// `Set-Cookie` value for a site-wide HttpOnly cookie.
/// Without `max_age_secs` it lives until the browser closes.
pub fn build_cookie(name: &str, value: &str, max_age_secs: Option<i64>, secure: bool) -> String {
    let mut cookie = format!("{name}={value}; Path=/; HttpOnly; SameSite=Lax");
    if let Some(max_age) = max_age_secs {
        cookie.push_str(&format!("; Max-Age={max_age}"));
    }
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// `Set-Cookie` value that removes the named cookie
pub fn expire_cookie(name: &str) -> String {
    format!("{name}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn test_read_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; sportsday_session=abc123"),
        );
        headers.append(header::COOKIE, HeaderValue::from_static("sportsday_flash=xyz"));

        assert_eq!(read_cookie(&headers, "sportsday_session"), Some("abc123"));
        assert_eq!(read_cookie(&headers, "sportsday_flash"), Some("xyz"));
        assert_eq!(read_cookie(&headers, "session"), None);
    }

    #[test]
    fn test_build_cookie() {
        assert_eq!(
            build_cookie("a", "1", Some(60), true),
            "a=1; Path=/; HttpOnly; SameSite=Lax; Max-Age=60; Secure"
        );
        assert_eq!(build_cookie("a", "1", None, false), "a=1; Path=/; HttpOnly; SameSite=Lax");
        assert!(expire_cookie("a").ends_with("Max-Age=0"));
    }
}
