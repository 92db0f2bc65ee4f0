//! CSV export with browser-side download.
//!
//! Serialization is pure (and deterministic: the same collection always
//! produces byte-identical output); the download is a Blob + object URL +
//! synthetic anchor click, no server round trip.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Trait for types that can be exported as CSV rows
pub trait CsvExportable {
    /// Column headers, written as the first record
    fn headers() -> Vec<&'static str>;

    /// One record per item
    fn to_csv_row(&self) -> Vec<String>;
}

/// Serialize a collection to CSV text (RFC 4180 quoting).
///
/// An empty collection yields a header-only file; export has no other
/// failure mode for well-formed data.
pub fn to_csv_string<T: CsvExportable>(data: &[T]) -> Result<String, String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(T::headers())
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;
    for item in data {
        writer
            .write_record(item.to_csv_row())
            .map_err(|e| format!("Failed to write CSV row: {}", e))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| format!("Failed to flush CSV writer: {}", e))?;
    String::from_utf8(bytes).map_err(|e| format!("CSV output is not UTF-8: {}", e))
}

/// Serialize a collection and trigger a browser download of the result.
pub fn export_to_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), String> {
    let content = to_csv_string(data)?;
    let blob = create_csv_blob(&content)?;
    download_blob(&blob, filename)
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    // Temporary anchor: append, click, remove
    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    document
        .body()
        .ok_or("No body element")?
        .append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    document
        .body()
        .ok_or("No body element")?
        .remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        name: String,
        amount: f64,
    }

    impl CsvExportable for Item {
        fn headers() -> Vec<&'static str> {
            vec!["Name", "Amount"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.name.clone(), self.amount.to_string()]
        }
    }

    #[test]
    fn writes_header_and_rows() {
        let items = vec![
            Item {
                name: "Widget".to_string(),
                amount: 9.99,
            },
            Item {
                name: "Gadget".to_string(),
                amount: 3.0,
            },
        ];
        let csv = to_csv_string(&items).unwrap();
        assert_eq!(csv, "Name,Amount\nWidget,9.99\nGadget,3\n");
    }

    #[test]
    fn empty_collection_yields_header_only() {
        let csv = to_csv_string::<Item>(&[]).unwrap();
        assert_eq!(csv, "Name,Amount\n");
    }

    #[test]
    fn quotes_fields_containing_delimiters() {
        let items = vec![Item {
            name: "Widget, large \"XL\"".to_string(),
            amount: 1.0,
        }];
        let csv = to_csv_string(&items).unwrap();
        assert_eq!(csv, "Name,Amount\n\"Widget, large \"\"XL\"\"\",1\n");
    }

    #[test]
    fn output_is_deterministic() {
        let items = vec![Item {
            name: "Widget".to_string(),
            amount: 2.5,
        }];
        assert_eq!(to_csv_string(&items).unwrap(), to_csv_string(&items).unwrap());
    }
}
