use wasm_bindgen_futures::JsFuture;

/// Read an uploaded file as UTF-8 text
pub async fn read_text_from_file(file: web_sys::File) -> Result<String, String> {
    let text = JsFuture::from(file.text())
        .await
        .map_err(|e| format!("Failed to read file: {:?}", e))?;
    text.as_string()
        .ok_or_else(|| "File is not valid UTF-8 text".to_string())
}

/// Parse CSV content into data rows.
///
/// The first record is the header and is discarded. Rows may have fewer
/// fields than the header; missing trailing fields read as empty during
/// validation.
pub fn parse_rows(content: &str) -> Result<Vec<Vec<String>>, String> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result.map_err(|e| format!("Failed to parse CSV row {}: {}", idx + 2, e))?;
        rows.push(record.iter().map(|s| s.to_string()).collect());
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discards_header_row() {
        let content = "ID,Name,Price,Rating,Stock Quantity\n1,Widget,9.99,4.5,10\n";
        let rows = parse_rows(content).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], vec!["1", "Widget", "9.99", "4.5", "10"]);
    }

    #[test]
    fn handles_quoted_fields_with_embedded_commas() {
        let content = "ID,Name,Price,Rating,Stock Quantity\n1,\"Widget, large\",9.99,N/A,10\n";
        let rows = parse_rows(content).unwrap();
        assert_eq!(rows[0][1], "Widget, large");
        assert_eq!(rows[0][3], "N/A");
    }

    #[test]
    fn keeps_short_rows() {
        let content = "ID,Name,Price,Rating,Stock Quantity\n2,Widget,5\n";
        let rows = parse_rows(content).unwrap();
        assert_eq!(rows[0], vec!["2", "Widget", "5"]);
    }

    #[test]
    fn trims_whitespace_around_fields() {
        let content = "ID,Name,Price,Rating,Stock Quantity\n1,  Widget  , 9.99 ,,10\n";
        let rows = parse_rows(content).unwrap();
        assert_eq!(rows[0][1], "Widget");
        assert_eq!(rows[0][2], "9.99");
        assert_eq!(rows[0][3], "");
    }

    #[test]
    fn header_only_file_yields_no_rows() {
        let rows = parse_rows("ID,Name,Price,Rating,Stock Quantity\n").unwrap();
        assert!(rows.is_empty());
    }
}
