use contracts::domain::product::Product;
use leptos::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductListState {
    // Filters (raw input values)
    pub search: String,
    pub min_price: String,
    pub max_price: String,
    pub min_rating: String,

    // Load flag
    pub is_loaded: bool,
}

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::default())
}

/// Client-side filter predicate.
///
/// Bounds that do not parse as numbers are ignored. A product without a
/// rating never matches an active min-rating filter.
pub fn matches_filters(product: &Product, state: &ProductListState) -> bool {
    let search = state.search.trim().to_lowercase();
    let matches_name = search.is_empty() || product.name.to_lowercase().contains(&search);

    let min_price = state.min_price.trim().parse::<f64>().ok();
    let max_price = state.max_price.trim().parse::<f64>().ok();
    let matches_price = min_price.map_or(true, |min| product.price >= min)
        && max_price.map_or(true, |max| product.price <= max);

    let min_rating = state.min_rating.trim().parse::<f64>().ok();
    let matches_rating =
        min_rating.map_or(true, |min| product.rating.map_or(false, |r| r >= min));

    matches_name && matches_price && matches_rating
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, price: f64, rating: Option<f64>) -> Product {
        Product {
            id: 1,
            name: name.to_string(),
            price,
            rating,
            stock_quantity: 5,
            user: None,
        }
    }

    #[test]
    fn empty_filters_match_everything() {
        let state = ProductListState::default();
        assert!(matches_filters(&product("Widget", 9.99, None), &state));
    }

    #[test]
    fn name_filter_is_case_insensitive_substring() {
        let state = ProductListState {
            search: "widG".to_string(),
            ..Default::default()
        };
        assert!(matches_filters(&product("Blue Widget", 1.0, None), &state));
        assert!(!matches_filters(&product("Gadget", 1.0, None), &state));
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let state = ProductListState {
            min_price: "5".to_string(),
            max_price: "10".to_string(),
            ..Default::default()
        };
        assert!(matches_filters(&product("A", 5.0, None), &state));
        assert!(matches_filters(&product("B", 10.0, None), &state));
        assert!(!matches_filters(&product("C", 4.99, None), &state));
        assert!(!matches_filters(&product("D", 10.01, None), &state));
    }

    #[test]
    fn unparsable_bound_is_ignored() {
        let state = ProductListState {
            min_price: "abc".to_string(),
            ..Default::default()
        };
        assert!(matches_filters(&product("A", 1.0, None), &state));
    }

    #[test]
    fn unrated_product_never_matches_min_rating() {
        let state = ProductListState {
            min_rating: "3".to_string(),
            ..Default::default()
        };
        assert!(matches_filters(&product("A", 1.0, Some(3.0)), &state));
        assert!(!matches_filters(&product("B", 1.0, Some(2.9)), &state));
        assert!(!matches_filters(&product("C", 1.0, None), &state));
    }
}
