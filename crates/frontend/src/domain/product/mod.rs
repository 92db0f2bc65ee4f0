pub mod api;
pub mod ui;

use contracts::domain::product::Product;

use crate::shared::export::CsvExportable;

/// Export format: fixed header, one row per product, the literal `N/A`
/// when a rating is absent. Import reads the same columns back by
/// position.
impl CsvExportable for Product {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Name", "Price", "Rating", "Stock Quantity"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.price.to_string(),
            self.rating
                .map(|r| r.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
            self.stock_quantity.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::csv_importer::engine::{draft_from_row, import_rows};
    use crate::shared::csv_importer::parser::parse_rows;
    use crate::shared::export::to_csv_string;
    use futures::executor::block_on;

    fn sample_products() -> Vec<Product> {
        vec![
            Product {
                id: 1,
                name: "Widget".to_string(),
                price: 9.99,
                rating: Some(4.5),
                stock_quantity: 10,
                user: Some(1),
            },
            Product {
                id: 2,
                name: "Gadget, deluxe".to_string(),
                price: 3.0,
                rating: None,
                stock_quantity: 7,
                user: Some(1),
            },
        ]
    }

    #[test]
    fn exports_fixed_header_and_na_for_absent_rating() {
        let csv = to_csv_string(&sample_products()).unwrap();
        assert_eq!(
            csv,
            "ID,Name,Price,Rating,Stock Quantity\n\
             1,Widget,9.99,4.5,10\n\
             2,\"Gadget, deluxe\",3,N/A,7\n"
        );
    }

    #[test]
    fn export_then_reimport_preserves_every_tuple_in_order() {
        let products = sample_products();
        let csv = to_csv_string(&products).unwrap();

        let rows = parse_rows(&csv).unwrap();
        assert_eq!(rows.len(), products.len());

        for (row, product) in rows.iter().zip(&products) {
            let draft = draft_from_row(row).unwrap();
            assert_eq!(draft.name, product.name);
            assert_eq!(draft.price, product.price);
            assert_eq!(draft.rating, product.rating);
            assert_eq!(draft.stock_quantity, product.stock_quantity);
        }

        let outcome = block_on(import_rows(rows, |_| async { Ok::<(), String>(()) }));
        assert_eq!(outcome.success_count, products.len());
        assert!(outcome.errors.is_empty());
    }
}
