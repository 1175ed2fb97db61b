//! API utilities for frontend-backend communication
//!
//! The backend is served from the same origin as the page (directly or
//! through the dev proxy), so URLs are built from `window.location.origin`.

/// Get the base URL for API requests
///
/// # Returns
/// - Page origin like "http://localhost:3000" or "https://example.com"
/// - Empty string if window is not available, leaving paths relative
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
///
/// # Example
/// ```ignore
/// let url = api_url("/api/research");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
