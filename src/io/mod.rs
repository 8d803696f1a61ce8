//! I/O module
//!
//! Handles stock file parsing, stock table output and the interactive console.
//!
//! # Components
//!
//! - `stock_format` - Stock record conversion and table rendering
//! - `stock_reader` - Streaming stock file reader with iterator interface
//! - `console` - Line-based prompts over any input/output pair

pub mod console;
pub mod stock_format;
pub mod stock_reader;

pub use console::Console;
pub use stock_format::{convert_stock_record, write_receipt, write_stock_table, StockRecord};
pub use stock_reader::{load_stock, StockReader};
