//! Row validation and the sequential submission loop.
//!
//! Pure with respect to the browser: the caller supplies the submit
//! function, so the loop runs unchanged against the real API or a test
//! double.

use std::future::Future;

use contracts::domain::product::{ProductDto, DEFAULT_USER_ID};

// Column positions follow the export format; column 0 is the
// server-assigned id and is ignored on import.
const COL_NAME: usize = 1;
const COL_PRICE: usize = 2;
const COL_RATING: usize = 3;
const COL_STOCK: usize = 4;

/// Aggregate result of one import run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportOutcome {
    pub success_count: usize,
    pub errors: Vec<String>,
}

/// Build a product draft from one data row.
///
/// Name, price and stock quantity are required; a failure on any of them
/// records one error identifying the (possibly empty) name. Rating is
/// lenient: anything that does not parse to a finite number is treated
/// as absent, never as an error.
pub fn draft_from_row(row: &[String]) -> Result<ProductDto, String> {
    let field = |idx: usize| row.get(idx).map(String::as_str).unwrap_or("");

    let name = field(COL_NAME).to_string();
    let price = field(COL_PRICE)
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite());
    let stock_quantity = field(COL_STOCK).parse::<u32>().ok();
    let rating = field(COL_RATING)
        .parse::<f64>()
        .ok()
        .filter(|r| r.is_finite());

    match (price, stock_quantity) {
        (Some(price), Some(stock_quantity)) if !name.is_empty() => Ok(ProductDto {
            id: None,
            name,
            price,
            rating,
            stock_quantity,
            user: DEFAULT_USER_ID,
        }),
        _ => Err(format!("Invalid data for product: {}", name)),
    }
}

/// Run the import over parsed data rows.
///
/// Rows are submitted strictly one at a time, each creation awaited
/// before the next; a failed row is recorded and never aborts the rest,
/// so the error list stays in input-row order.
pub async fn import_rows<S, Fut>(rows: Vec<Vec<String>>, mut submit: S) -> ImportOutcome
where
    S: FnMut(ProductDto) -> Fut,
    Fut: Future<Output = Result<(), String>>,
{
    let mut outcome = ImportOutcome::default();

    for row in rows {
        let draft = match draft_from_row(&row) {
            Ok(draft) => draft,
            Err(message) => {
                outcome.errors.push(message);
                continue;
            }
        };

        let name = draft.name.clone();
        match submit(draft).await {
            Ok(()) => outcome.success_count += 1,
            Err(e) => {
                log::error!("Error importing product {:?}: {}", name, e);
                outcome.errors.push(format!("Error importing product: {}", name));
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn maps_positional_fields_onto_draft() {
        let draft = draft_from_row(&row(&["1", "Widget", "9.99", "4.5", "10"])).unwrap();
        assert_eq!(draft.id, None);
        assert_eq!(draft.name, "Widget");
        assert_eq!(draft.price, 9.99);
        assert_eq!(draft.rating, Some(4.5));
        assert_eq!(draft.stock_quantity, 10);
        assert_eq!(draft.user, DEFAULT_USER_ID);
    }

    #[test]
    fn empty_name_is_an_error() {
        let err = draft_from_row(&row(&["2", "", "5", "", "3"])).unwrap_err();
        assert_eq!(err, "Invalid data for product: ");
    }

    #[test]
    fn non_numeric_price_is_an_error() {
        let err = draft_from_row(&row(&["3", "Gadget", "abc", "3", "7"])).unwrap_err();
        assert_eq!(err, "Invalid data for product: Gadget");
    }

    #[test]
    fn non_numeric_stock_is_an_error() {
        let err = draft_from_row(&row(&["4", "Widget", "9.99", "4.5", "many"])).unwrap_err();
        assert_eq!(err, "Invalid data for product: Widget");
    }

    #[test]
    fn negative_stock_is_an_error() {
        assert!(draft_from_row(&row(&["4", "Widget", "9.99", "4.5", "-3"])).is_err());
    }

    #[test]
    fn nan_price_is_an_error() {
        // "NaN" parses as f64 but is not a usable price
        assert!(draft_from_row(&row(&["5", "Widget", "NaN", "4.5", "10"])).is_err());
    }

    #[test]
    fn unparseable_rating_is_absent_not_an_error() {
        let draft = draft_from_row(&row(&["1", "Widget", "9.99", "N/A", "10"])).unwrap();
        assert_eq!(draft.rating, None);

        let draft = draft_from_row(&row(&["1", "Widget", "9.99", "", "10"])).unwrap();
        assert_eq!(draft.rating, None);

        let draft = draft_from_row(&row(&["1", "Widget", "9.99", "NaN", "10"])).unwrap();
        assert_eq!(draft.rating, None);
    }

    #[test]
    fn short_row_reads_missing_fields_as_empty() {
        let err = draft_from_row(&row(&["2", "Widget", "5"])).unwrap_err();
        assert_eq!(err, "Invalid data for product: Widget");
    }

    #[test]
    fn submits_valid_rows_in_input_order() {
        let submitted = RefCell::new(Vec::new());
        let rows = vec![
            row(&["1", "Alpha", "1.0", "", "1"]),
            row(&["2", "Beta", "2.0", "3.5", "2"]),
            row(&["3", "Gamma", "3.0", "", "3"]),
        ];

        let outcome = block_on(import_rows(rows, |draft| {
            submitted.borrow_mut().push(draft.name.clone());
            async { Ok::<(), String>(()) }
        }));

        assert_eq!(outcome.success_count, 3);
        assert!(outcome.errors.is_empty());
        assert_eq!(*submitted.borrow(), vec!["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn invalid_rows_are_never_submitted() {
        let submitted = RefCell::new(Vec::new());
        let rows = vec![
            row(&["1", "Widget", "9.99", "4.5", "10"]),
            row(&["2", "", "5", "", "3"]),
            row(&["3", "Gadget", "abc", "3", "7"]),
        ];

        let outcome = block_on(import_rows(rows, |draft| {
            submitted.borrow_mut().push(draft.name.clone());
            async { Ok::<(), String>(()) }
        }));

        assert_eq!(outcome.success_count, 1);
        assert_eq!(
            outcome.errors,
            vec![
                "Invalid data for product: ".to_string(),
                "Invalid data for product: Gadget".to_string(),
            ]
        );
        assert_eq!(*submitted.borrow(), vec!["Widget"]);
    }

    #[test]
    fn submission_failure_skips_only_that_row() {
        let submitted = RefCell::new(Vec::new());
        let rows = vec![
            row(&["1", "Alpha", "1.0", "", "1"]),
            row(&["2", "Beta", "2.0", "", "2"]),
            row(&["3", "Gamma", "3.0", "", "3"]),
        ];

        let outcome = block_on(import_rows(rows, |draft| {
            submitted.borrow_mut().push(draft.name.clone());
            let fail = draft.name == "Beta";
            async move {
                if fail {
                    Err("HTTP 500".to_string())
                } else {
                    Ok(())
                }
            }
        }));

        assert_eq!(outcome.success_count, 2);
        assert_eq!(outcome.errors, vec!["Error importing product: Beta".to_string()]);
        // every valid row submitted exactly once, in order
        assert_eq!(*submitted.borrow(), vec!["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn validation_and_submission_errors_interleave_in_row_order() {
        let rows = vec![
            row(&["1", "", "1.0", "", "1"]),
            row(&["2", "Beta", "2.0", "", "2"]),
            row(&["3", "Gamma", "bad", "", "3"]),
            row(&["4", "Delta", "4.0", "", "4"]),
        ];

        let outcome = block_on(import_rows(rows, |draft| {
            let fail = draft.name == "Delta";
            async move {
                if fail {
                    Err("HTTP 400".to_string())
                } else {
                    Ok(())
                }
            }
        }));

        assert_eq!(outcome.success_count, 1);
        assert_eq!(
            outcome.errors,
            vec![
                "Invalid data for product: ".to_string(),
                "Invalid data for product: Gamma".to_string(),
                "Error importing product: Delta".to_string(),
            ]
        );
    }
}
