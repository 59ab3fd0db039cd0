//! Per-request credential resolution
//!
//! An explicit `Authorization: Bearer ..` header wins; otherwise the stored
//! access cookie is used. An empty result means "unauthenticated" and is not
//! an error — handlers answer 401 without touching the remote service.

use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum_extra::extract::cookie::CookieJar;
use rainpick_domain::constants::ACCESS_COOKIE;

/// Resolve the bearer credential for a request, if any.
#[must_use]
pub fn resolve_token(headers: &HeaderMap, jar: &CookieJar) -> Option<String> {
    if let Some(value) = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok()) {
        let token = strip_bearer(value);
        if !token.is_empty() {
            return Some(token.to_string());
        }
    }

    jar.get(ACCESS_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}

/// Strip a case-insensitive `Bearer ` prefix and surrounding whitespace.
fn strip_bearer(value: &str) -> &str {
    let stripped = value.trim_start();
    match stripped.get(..6) {
        Some(prefix)
            if prefix.eq_ignore_ascii_case("bearer")
                && stripped[6..].starts_with(char::is_whitespace) =>
        {
            stripped[6..].trim()
        }
        _ => stripped.trim_end(),
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;
    use axum_extra::extract::cookie::Cookie;

    use super::*;

    fn headers_with_auth(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn bearer_header_wins_over_cookie() {
        let headers = headers_with_auth("Bearer header-token");
        let jar = CookieJar::new().add(Cookie::new(ACCESS_COOKIE, "cookie-token"));

        assert_eq!(resolve_token(&headers, &jar).as_deref(), Some("header-token"));
    }

    #[test]
    fn bearer_prefix_is_case_insensitive() {
        let headers = headers_with_auth("bearer tok");
        let jar = CookieJar::new();

        assert_eq!(resolve_token(&headers, &jar).as_deref(), Some("tok"));
    }

    #[test]
    fn falls_back_to_access_cookie() {
        let headers = HeaderMap::new();
        let jar = CookieJar::new().add(Cookie::new(ACCESS_COOKIE, "cookie-token"));

        assert_eq!(resolve_token(&headers, &jar).as_deref(), Some("cookie-token"));
    }

    #[test]
    fn empty_everywhere_means_unauthenticated() {
        let headers = headers_with_auth("Bearer   ");
        let jar = CookieJar::new().add(Cookie::new(ACCESS_COOKIE, ""));

        assert!(resolve_token(&headers, &jar).is_none());
    }
}
