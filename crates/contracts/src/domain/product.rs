use serde::{Deserialize, Serialize};

use crate::shared::decimal;

/// Owner attached to bulk-imported products. The CSV format carries no
/// per-row owner column, so every imported record belongs to this user.
pub const DEFAULT_USER_ID: i64 = 1;

/// Product record as returned by the backend.
///
/// The authoritative copy lives on the server; the frontend only holds it
/// transiently for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(deserialize_with = "decimal::lenient_f64")]
    pub price: f64,
    #[serde(default)]
    pub rating: Option<f64>,
    pub stock_quantity: u32,
    #[serde(default)]
    pub user: Option<i64>,
}

/// Create/update payload and form model. `id` is absent on create and
/// omitted from the serialized body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub price: f64,
    pub rating: Option<f64>,
    pub stock_quantity: u32,
    pub user: i64,
}

impl Default for ProductDto {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            price: 0.0,
            rating: None,
            stock_quantity: 0,
            user: DEFAULT_USER_ID,
        }
    }
}

impl ProductDto {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: Some(product.id),
            name: product.name.clone(),
            price: product.price,
            rating: product.rating,
            stock_quantity: product.stock_quantity,
            user: product.user.unwrap_or(DEFAULT_USER_ID),
        }
    }

    /// Form-level validation. The bulk importer applies its own row
    /// policy and does not call this.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Product name must not be empty".into());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err("Price must be a non-negative number".into());
        }
        if let Some(rating) = self.rating {
            if !rating.is_finite() || !(0.0..=5.0).contains(&rating) {
                return Err("Rating must be between 0 and 5".into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_price_sent_as_decimal_string() {
        let json = r#"{"id": 7, "name": "Widget", "price": "9.99", "rating": 4.5, "stock_quantity": 10, "user": 1}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, 9.99);
        assert_eq!(product.rating, Some(4.5));
    }

    #[test]
    fn deserializes_null_rating_as_absent() {
        let json = r#"{"id": 7, "name": "Widget", "price": 5, "rating": null, "stock_quantity": 3}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.rating, None);
        assert_eq!(product.user, None);
    }

    #[test]
    fn create_payload_omits_id() {
        let dto = ProductDto {
            name: "Widget".to_string(),
            price: 9.99,
            stock_quantity: 10,
            ..ProductDto::default()
        };
        let json = serde_json::to_string(&dto).unwrap();
        assert!(!json.contains("\"id\""));
        assert!(json.contains("\"user\":1"));
    }

    #[test]
    fn validate_rejects_blank_name_and_bad_rating() {
        let mut dto = ProductDto {
            name: "  ".to_string(),
            price: 1.0,
            ..ProductDto::default()
        };
        assert!(dto.validate().is_err());

        dto.name = "Widget".to_string();
        dto.rating = Some(7.5);
        assert!(dto.validate().is_err());

        dto.rating = Some(4.0);
        assert!(dto.validate().is_ok());
    }
}
