//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and attaching
//! session credentials to requests.

use gloo_net::http::RequestBuilder;

use crate::system::session::Session;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 8000 for the backend server.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:8000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/products/");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Attach the session's bearer token to a request, if one is present.
///
/// Callers provide the current credential explicitly; there is no
/// ambient token source.
pub fn authorize(builder: RequestBuilder, session: &Session) -> RequestBuilder {
    match session.access_token.as_deref() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}
