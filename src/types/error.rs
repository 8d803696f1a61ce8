//! Error types for the retail market
//!
//! This module defines all error types that can surface from the library.
//! Errors are designed to be descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: Stock file not found, console read/write failures
//! - **Parse Errors**: Malformed stock file lines (fatal at startup)
//! - **Stock Errors**: Unknown item IDs, insufficient stock at commit time
//! - **Arithmetic Errors**: Overflow in purchase totals or the gain total
//! - **Input Closed**: The interactive input stream reached end of file
//!
//! Invalid interactive input (non-numbers, out-of-range options) is not an
//! error at this level: the console re-prompts and the session carries on.

use crate::types::{ItemId, Quantity};
use thiserror::Error;

/// Main error type for the retail market
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// Stock file not found at the specified path
    ///
    /// This is a fatal error that prevents the session from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading the stock file or using the console
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// Stock file parsing error
    ///
    /// A malformed line aborts the entire load; there is no partial recovery.
    #[error("Stock parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Item ID outside `[1, stock size]`
    #[error("Invalid item ID {item_id} (stock holds {stock_size} items)")]
    InvalidItemId {
        /// The rejected item ID
        item_id: ItemId,
        /// Number of items in stock
        stock_size: usize,
    },

    /// Not enough units left to commit a cart line
    #[error("Insufficient stock for item {item_id}: available {available}, requested {requested}")]
    InsufficientStock {
        /// Item ID of the cart line
        item_id: ItemId,
        /// Units currently in stock
        available: Quantity,
        /// Units requested by the cart
        requested: Quantity,
    },

    /// Arithmetic overflow would occur
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
    },

    /// The interactive input stream was closed
    #[error("Input stream closed")]
    InputClosed,
}

// Conversion from io::Error to StoreError
impl From<std::io::Error> for StoreError {
    fn from(error: std::io::Error) -> Self {
        StoreError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to StoreError
impl From<csv::Error> for StoreError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        StoreError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl StoreError {
    /// Create a ParseError error
    pub fn parse_error(line: Option<u64>, message: impl Into<String>) -> Self {
        StoreError::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create an InvalidItemId error
    pub fn invalid_item_id(item_id: ItemId, stock_size: usize) -> Self {
        StoreError::InvalidItemId {
            item_id,
            stock_size,
        }
    }

    /// Create an InsufficientStock error
    pub fn insufficient_stock(item_id: ItemId, available: Quantity, requested: Quantity) -> Self {
        StoreError::InsufficientStock {
            item_id,
            available,
            requested,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str) -> Self {
        StoreError::ArithmeticOverflow {
            operation: operation.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::file_not_found(
        StoreError::FileNotFound { path: "data.csv".to_string() },
        "File not found: data.csv"
    )]
    #[case::io_error(
        StoreError::IoError { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::parse_error_with_line(
        StoreError::ParseError { line: Some(3), message: "expected 3 fields, found 2".to_string() },
        "Stock parse error at line 3: expected 3 fields, found 2"
    )]
    #[case::parse_error_without_line(
        StoreError::ParseError { line: None, message: "bad record".to_string() },
        "Stock parse error: bad record"
    )]
    #[case::invalid_item_id(
        StoreError::InvalidItemId { item_id: 9, stock_size: 4 },
        "Invalid item ID 9 (stock holds 4 items)"
    )]
    #[case::insufficient_stock(
        StoreError::InsufficientStock { item_id: 2, available: 1, requested: 5 },
        "Insufficient stock for item 2: available 1, requested 5"
    )]
    #[case::arithmetic_overflow(
        StoreError::ArithmeticOverflow { operation: "gain".to_string() },
        "Arithmetic overflow in gain"
    )]
    #[case::input_closed(StoreError::InputClosed, "Input stream closed")]
    fn test_error_display(#[case] error: StoreError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::parse_error(
        StoreError::parse_error(Some(2), "bad"),
        StoreError::ParseError { line: Some(2), message: "bad".to_string() }
    )]
    #[case::invalid_item_id(
        StoreError::invalid_item_id(0, 3),
        StoreError::InvalidItemId { item_id: 0, stock_size: 3 }
    )]
    #[case::insufficient_stock(
        StoreError::insufficient_stock(1, 2, 3),
        StoreError::InsufficientStock { item_id: 1, available: 2, requested: 3 }
    )]
    #[case::arithmetic_overflow(
        StoreError::arithmetic_overflow("purchase total"),
        StoreError::ArithmeticOverflow { operation: "purchase total".to_string() }
    )]
    fn test_helper_functions(#[case] result: StoreError, #[case] expected: StoreError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: StoreError = io_error.into();
        assert!(matches!(error, StoreError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
