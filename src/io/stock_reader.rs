//! Stock file reader with iterator interface
//!
//! Provides a streaming iterator over item records from a stock file.
//! Delegates record conversion to the stock_format module.
//!
//! # Format
//!
//! One record per line, no header row:
//!
//! ```text
//! 'Rice', 10, 100
//! 'Beans', 25, 80
//! ```
//!
//! The name is single-quoted; quantity and price are bare (or single-quoted)
//! non-negative integers. Blank lines are skipped. Quotes are not escapes:
//! only the outer quotes of a field are stripped, so `'Mama's Rice'` keeps
//! its apostrophe and a name cannot contain a comma.
//!
//! # Error Handling
//!
//! - File not found is reported as `StoreError::FileNotFound` from `new()`
//! - Each malformed line is yielded as `StoreError::ParseError` with its line number
//! - `load_stock` stops at the first error: a stock is either loaded whole or not at all

use crate::io::stock_format::{convert_stock_record, StockRecord};
use crate::types::{Item, StoreError};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Number of fields on every stock line
const FIELDS_PER_RECORD: usize = 3;

/// Streaming stock reader
///
/// # Examples
///
/// ```no_run
/// use retail_market::io::stock_reader::StockReader;
/// use std::path::Path;
///
/// let reader = StockReader::new(Path::new("data.csv")).unwrap();
/// for result in reader {
///     match result {
///         Ok(item) => println!("Loaded item: {:?}", item),
///         Err(e) => eprintln!("Error: {}", e),
///     }
/// }
/// ```
#[derive(Debug)]
pub struct StockReader<R = File> {
    reader: csv::Reader<R>,
    record: StringRecord,
}

impl StockReader<File> {
    /// Create a new StockReader from a file path
    ///
    /// # Returns
    ///
    /// * `Ok(StockReader)` if the file opened successfully
    /// * `Err(StoreError::FileNotFound)` if no file exists at `path`
    /// * `Err(StoreError::IoError)` for any other open failure
    pub fn new(path: &Path) -> Result<Self, StoreError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => StoreError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => StoreError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            },
        })?;

        Ok(Self::from_reader(file))
    }
}

impl<R: Read> StockReader<R> {
    /// Create a StockReader over any byte source
    ///
    /// The CSV reader is configured to:
    /// - Treat the first line as data (no header row)
    /// - Read quotes literally (outer quotes are stripped per field later)
    /// - Trim whitespace from all fields
    /// - Allow any field count, so the count can be reported per line
    pub fn from_reader(source: R) -> Self {
        let reader = ReaderBuilder::new()
            .has_headers(false)
            .quoting(false)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);

        Self {
            reader,
            record: StringRecord::new(),
        }
    }

    fn convert_current(&self) -> Result<Item, StoreError> {
        let line = self.record.position().map(|pos| pos.line());

        if self.record.len() != FIELDS_PER_RECORD {
            return Err(StoreError::parse_error(
                line,
                format!(
                    "expected {} fields, found {}",
                    FIELDS_PER_RECORD,
                    self.record.len()
                ),
            ));
        }

        let stock_record: StockRecord = self
            .record
            .deserialize(None)
            .map_err(|e| StoreError::parse_error(line, e.to_string()))?;

        convert_stock_record(stock_record).map_err(|message| StoreError::parse_error(line, message))
    }
}

impl<R: Read> Iterator for StockReader<R> {
    type Item = Result<Item, StoreError>;

    /// Get the next item from the stock file
    ///
    /// # Returns
    ///
    /// * `Some(Ok(Item))` - Successfully parsed record
    /// * `Some(Err(StoreError))` - Parse or conversion error with line number
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(true) => Some(self.convert_current()),
            Ok(false) => None,
            Err(e) => Some(Err(e.into())),
        }
    }
}

/// Load the whole stock from `path`
///
/// Aborts on the first malformed line; no partial stock is returned.
pub fn load_stock(path: &Path) -> Result<Vec<Item>, StoreError> {
    let stock = StockReader::new(path)?.collect::<Result<Vec<_>, _>>()?;

    tracing::info!(path = %path.display(), items = stock.len(), "Stock loaded");
    Ok(stock)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary stock file for testing
    fn create_temp_stock(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_stock_reader_fails_on_missing_file() {
        let result = StockReader::new(Path::new("nonexistent_stock.csv"));
        assert!(matches!(result, Err(StoreError::FileNotFound { .. })));
    }

    #[test]
    fn test_load_stock_preserves_order() {
        let file = create_temp_stock("'Rice', 10, 100\n'Beans', 25, 80\n'Sugar', 0, 120\n");

        let stock = load_stock(file.path()).unwrap();

        assert_eq!(
            stock,
            vec![
                Item::new("Rice", 10, 100),
                Item::new("Beans", 25, 80),
                Item::new("Sugar", 0, 120),
            ]
        );
    }

    #[test]
    fn test_load_stock_accepts_quoted_numbers() {
        let file = create_temp_stock("'Rice', '10', '100'\n");

        let stock = load_stock(file.path()).unwrap();
        assert_eq!(stock, vec![Item::new("Rice", 10, 100)]);
    }

    #[test]
    fn test_load_stock_keeps_apostrophe_inside_name() {
        let file = create_temp_stock("'Mama's Rice', 3, 10\n'Beans', 25, 80\n");

        let stock = load_stock(file.path()).unwrap();
        assert_eq!(
            stock,
            vec![Item::new("Mama's Rice", 3, 10), Item::new("Beans", 25, 80)]
        );
    }

    #[test]
    fn test_comma_inside_name_is_a_field_count_error() {
        let file = create_temp_stock("'Salt, iodized', 4, 30\n");

        let error = load_stock(file.path()).unwrap_err();
        assert_eq!(
            error,
            StoreError::ParseError {
                line: Some(1),
                message: "expected 3 fields, found 4".to_string(),
            }
        );
    }

    #[test]
    fn test_load_stock_skips_blank_lines() {
        let file = create_temp_stock("'Rice', 10, 100\n\n'Beans', 25, 80\n");

        let stock = load_stock(file.path()).unwrap();
        assert_eq!(stock.len(), 2);
    }

    #[test]
    fn test_load_stock_empty_file() {
        let file = create_temp_stock("");

        let stock = load_stock(file.path()).unwrap();
        assert!(stock.is_empty());
    }

    #[test]
    fn test_load_stock_rejects_wrong_field_count() {
        let file = create_temp_stock("'Rice', 10, 100\n'Beans', 25\n");

        let error = load_stock(file.path()).unwrap_err();
        assert_eq!(
            error,
            StoreError::ParseError {
                line: Some(2),
                message: "expected 3 fields, found 2".to_string(),
            }
        );
    }

    #[test]
    fn test_load_stock_aborts_on_first_non_integer() {
        let file = create_temp_stock("'Rice', 10, 100\n'Beans', many, 80\n'Milk', 3, 200\n");

        let error = load_stock(file.path()).unwrap_err();
        match error {
            StoreError::ParseError { line, message } => {
                assert_eq!(line, Some(2));
                assert!(message.contains("Invalid quantity"));
            }
            other => panic!("Expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_stock_reader_yields_each_line() {
        let reader = StockReader::from_reader("'Rice', 10, 100\n'Bad', x, 1\n".as_bytes());
        let results: Vec<_> = reader.collect();

        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
    }
}
