//! Prediction service origin resolution.
//!
//! The dashboard runs in three deployment shapes: mounted on the same origin
//! as the prediction service, inside a forwarded dev container, or next to a
//! locally running service. The origin is derived from the hostname alone.

/// Fixed origin of a locally running prediction service.
pub const LOOPBACK_API: &str = "http://127.0.0.1:8000";

/// Forwarded-port markers of the dev-container host.
const FORWARDED_FRONTEND: &str = "-3000.app.github.dev";
const FORWARDED_BACKEND: &str = "-8000.app.github.dev";

/// Resolves the prediction service origin from the current hostname.
///
/// An empty hostname means the same-origin deployment: the returned empty
/// string makes the client issue relative requests. A forwarded dev-container
/// hostname is rewritten from the frontend port to the backend port. Anything
/// else falls back to [`LOOPBACK_API`].
pub fn resolve_api_base(hostname: &str) -> String {
    if hostname.is_empty() {
        return String::new();
    }
    if hostname.contains(FORWARDED_FRONTEND) {
        return format!("https://{}", hostname.replace(FORWARDED_FRONTEND, FORWARDED_BACKEND));
    }
    LOOPBACK_API.to_string()
}
