//! CSV header normalization and column lookup.

use std::collections::HashMap;

/// Header row of a CSV extract.
#[derive(Debug, Clone, Default)]
pub struct CsvHeaders {
    /// Normalized column names in file order.
    pub columns: Vec<String>,
    index: HashMap<String, usize>,
}

impl CsvHeaders {
    /// Builds headers from raw header cells. On duplicate names the first
    /// occurrence wins.
    pub fn new<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let columns: Vec<String> = raw
            .into_iter()
            .map(|cell| normalize_header(cell.as_ref()))
            .collect();
        let mut index = HashMap::with_capacity(columns.len());
        for (idx, name) in columns.iter().enumerate() {
            index.entry(name.clone()).or_insert(idx);
        }
        Self { columns, index }
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Position of `column` in the header.
    pub fn position(&self, column: &str) -> Option<usize> {
        self.index.get(column).copied()
    }

    pub fn contains(&self, column: &str) -> bool {
        self.index.contains_key(column)
    }
}

/// Normalizes a header value: strips a byte-order mark, stray quotes and
/// surrounding whitespace.
pub fn normalize_header(value: &str) -> String {
    value
        .trim()
        .trim_start_matches('\u{feff}')
        .trim_matches('"')
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_positions() {
        let headers = CsvHeaders::new(["COUNTRY_NAME", "YEAR", "OBS_VALUE_sum"]);
        assert_eq!(headers.len(), 3);
        assert_eq!(headers.position("YEAR"), Some(1));
        assert_eq!(headers.position("MISSING"), None);
        assert!(headers.contains("OBS_VALUE_sum"));
    }

    #[test]
    fn test_duplicate_header_keeps_first() {
        let headers = CsvHeaders::new(["A", "B", "A"]);
        assert_eq!(headers.position("A"), Some(0));
    }

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("  hello  "), "hello");
        assert_eq!(normalize_header("\u{feff}COUNTRY_NAME"), "COUNTRY_NAME");
        assert_eq!(normalize_header("\"YEAR\""), "YEAR");
    }
}
