//! Server-side notifications.
//!
//! Both operations are authenticated; the credential always comes from
//! the session passed in by the caller, never from a token baked into
//! the code.

use contracts::domain::notification::Notification;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, authorize};
use crate::system::session::Session;

pub async fn fetch_notifications(session: &Session) -> Result<Vec<Notification>, String> {
    let response = authorize(Request::get(&api_url("/api/notifications/")), session)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Fetch notifications failed: {}", response.status()));
    }

    response
        .json::<Vec<Notification>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn mark_as_read(session: &Session, id: i64) -> Result<(), String> {
    let url = api_url(&format!("/api/notifications/{}/", id));
    let body = serde_json::json!({ "is_read": true });

    let response = authorize(Request::patch(&url), session)
        .json(&body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Mark as read failed: {}", response.status()));
    }

    Ok(())
}
