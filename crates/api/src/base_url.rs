//! Externally visible origin resolution
//!
//! The OAuth redirect target must match what the user's browser actually
//! reached. Behind a reverse proxy the configured `APP_BASE_URL` can point
//! at the wrong place (typically a loopback address left over from local
//! development), so the origin derived from `x-forwarded-host` /
//! `x-forwarded-proto` wins whenever it disagrees with the configured one.

use axum::http::header::HOST;
use axum::http::HeaderMap;
use url::Url;

/// Origin derived from the request's own headers, if a host is present.
///
/// Scheme falls back to `http` for localhost hosts and `https` otherwise
/// when no `x-forwarded-proto` is supplied.
#[must_use]
pub fn derived_base_url(headers: &HeaderMap) -> Option<String> {
    let host = headers
        .get("x-forwarded-host")
        .or_else(|| headers.get(HOST))
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|h| !h.is_empty())?;

    let proto = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| {
            if is_localhost_host(host) {
                "http".to_string()
            } else {
                "https".to_string()
            }
        });

    Some(format!("{proto}://{host}"))
}

/// Pick the origin to use for redirects.
///
/// The configured origin (trailing `/` stripped) is used unless a derived
/// origin exists and either the configured one is a loopback address while
/// the derived one is not, or the two disagree on host or scheme — then the
/// derived origin wins.
#[must_use]
pub fn effective_base_url(configured: Option<&str>, derived: Option<&str>) -> Option<String> {
    match (configured, derived) {
        (Some(configured), Some(derived)) => {
            let configured = configured.trim_end_matches('/');
            if is_loopback_origin(configured) && !is_loopback_origin(derived) {
                return Some(derived.to_string());
            }
            if origins_disagree(configured, derived) {
                return Some(derived.to_string());
            }
            Some(configured.to_string())
        }
        (Some(configured), None) => Some(configured.trim_end_matches('/').to_string()),
        (None, Some(derived)) => Some(derived.to_string()),
        (None, None) => None,
    }
}

fn origins_disagree(a: &str, b: &str) -> bool {
    match (Url::parse(a), Url::parse(b)) {
        (Ok(a), Ok(b)) => {
            a.scheme() != b.scheme() || a.host_str() != b.host_str() || a.port() != b.port()
        }
        // Unparsable origins only agree when textually identical.
        _ => a != b,
    }
}

fn is_loopback_origin(origin: &str) -> bool {
    Url::parse(origin)
        .ok()
        .and_then(|url| url.host_str().map(|h| is_localhost_host(h)))
        .unwrap_or(false)
}

fn is_localhost_host(host: &str) -> bool {
    if matches!(host, "localhost" | "127.0.0.1" | "::1" | "[::1]") {
        return true;
    }
    let bare = host.rsplit_once(':').map_or(host, |(h, _)| h);
    let bare = bare.trim_start_matches('[').trim_end_matches(']');
    matches!(bare, "localhost" | "127.0.0.1" | "::1")
}
