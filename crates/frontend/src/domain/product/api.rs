use contracts::domain::product::{Product, ProductDto};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, authorize};
use crate::system::session::Session;

/// Fetch the full product collection
pub async fn fetch_products(session: &Session) -> Result<Vec<Product>, String> {
    let response = authorize(Request::get(&api_url("/api/products/")), session)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Fetch products failed: {}", response.status()));
    }

    response
        .json::<Vec<Product>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch a single product by id
pub async fn fetch_product(session: &Session, id: i64) -> Result<Product, String> {
    let url = api_url(&format!("/api/products/{}/", id));
    let response = authorize(Request::get(&url), session)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Fetch product failed: {}", response.status()));
    }

    response
        .json::<Product>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create a product; a non-2xx response is the failure signal
pub async fn create_product(session: &Session, draft: &ProductDto) -> Result<Product, String> {
    let response = authorize(Request::post(&api_url("/api/products/")), session)
        .json(draft)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Create product failed: {}", response.status()));
    }

    response
        .json::<Product>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Update an existing product
pub async fn update_product(session: &Session, id: i64, dto: &ProductDto) -> Result<Product, String> {
    let url = api_url(&format!("/api/products/{}/", id));
    let response = authorize(Request::put(&url), session)
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Update product failed: {}", response.status()));
    }

    response
        .json::<Product>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Delete a product by id
pub async fn delete_product(session: &Session, id: i64) -> Result<(), String> {
    let url = api_url(&format!("/api/products/{}/", id));
    let response = authorize(Request::delete(&url), session)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Delete product failed: {}", response.status()));
    }

    Ok(())
}
