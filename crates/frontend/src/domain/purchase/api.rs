use contracts::domain::purchase::{Purchase, PurchaseDto};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, authorize};
use crate::system::session::Session;

/// Fetch the purchase ledger
pub async fn fetch_purchases(session: &Session) -> Result<Vec<Purchase>, String> {
    let response = authorize(Request::get(&api_url("/api/purchases/")), session)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Fetch purchases failed: {}", response.status()));
    }

    response
        .json::<Vec<Purchase>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Record a purchase
pub async fn create_purchase(session: &Session, dto: &PurchaseDto) -> Result<Purchase, String> {
    let response = authorize(Request::post(&api_url("/api/purchases/")), session)
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Create purchase failed: {}", response.status()));
    }

    response
        .json::<Purchase>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
