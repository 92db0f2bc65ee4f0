use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::decimal;

/// Ledger entry for a stock purchase. `product` is the backend id of the
/// purchased product; `timestamp` is set server-side on create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    pub id: i64,
    pub product: i64,
    pub quantity: u32,
    #[serde(deserialize_with = "decimal::lenient_f64")]
    pub unit_cost: f64,
    pub timestamp: DateTime<Utc>,
}

/// Create payload. Field names match the backend serializer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PurchaseDto {
    pub product: i64,
    pub quantity: u32,
    pub unit_cost: f64,
}

impl PurchaseDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.product <= 0 {
            return Err("Product id is required".into());
        }
        if self.quantity == 0 {
            return Err("Quantity must be greater than zero".into());
        }
        if !self.unit_cost.is_finite() || self.unit_cost < 0.0 {
            return Err("Unit cost must be a non-negative number".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_row() {
        let json = r#"{"id": 3, "product": 7, "quantity": 5, "unit_cost": "12.50", "timestamp": "2024-03-15T14:02:26.123456Z"}"#;
        let purchase: Purchase = serde_json::from_str(json).unwrap();
        assert_eq!(purchase.product, 7);
        assert_eq!(purchase.unit_cost, 12.5);
        assert!(purchase.timestamp.to_rfc3339().starts_with("2024-03-15"));
    }

    #[test]
    fn validate_rejects_zero_quantity() {
        let dto = PurchaseDto {
            product: 1,
            quantity: 0,
            unit_cost: 1.0,
        };
        assert!(dto.validate().is_err());
    }
}
