use serde::{Deserialize, Serialize};

/// Per-product sales aggregate. The backend groups by product name, so
/// the JSON key keeps the ORM's double-underscore lookup name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSales {
    #[serde(rename = "product__name")]
    pub product_name: String,
    pub total_sales: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesReport {
    #[serde(default)]
    pub sales_data: Vec<ProductSales>,
    #[serde(default)]
    pub total_sales: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_report_payload() {
        let json = r#"{
            "sales_data": [
                {"product__name": "iPhone 21", "total_sales": 1200},
                {"product__name": "Google Pixel", "total_sales": 800.5}
            ],
            "total_sales": 2000.5
        }"#;
        let report: SalesReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.sales_data.len(), 2);
        assert_eq!(report.sales_data[0].product_name, "iPhone 21");
        assert_eq!(report.total_sales, 2000.5);
    }
}
