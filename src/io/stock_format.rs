//! Stock file format handling and stock table rendering
//!
//! This module centralizes all stock format concerns, providing:
//! - StockRecord structure for deserialization
//! - Conversion from raw stock records to `Item`
//! - Fixed-width stock table output (admin and customer variants)
//! - Purchase receipt output
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::types::{Item, ItemId, Price, Quantity, Receipt, StoreError};
use serde::Deserialize;
use std::io::Write;

/// Table width for the admin view (includes the quantity column)
pub const ADMIN_TABLE_WIDTH: usize = 70;

/// Table width for the customer view
pub const CUSTOMER_TABLE_WIDTH: usize = 58;

/// Raw stock record, one per line: `'name', quantity, price`
///
/// Fields are kept as strings so that quoted numbers (`'10'`) and bare
/// numbers (`10`) are both accepted by `convert_stock_record`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StockRecord {
    pub name: String,
    pub quantity: String,
    pub price: String,
}

/// Strip surrounding whitespace and single quotes from a cell
fn unquote(cell: &str) -> &str {
    cell.trim().trim_matches('\'').trim()
}

/// Convert a StockRecord to an Item
///
/// # Returns
///
/// * `Ok(Item)` - Successfully converted record
/// * `Err(String)` - Description of the conversion failure
pub fn convert_stock_record(record: StockRecord) -> Result<Item, String> {
    let name = unquote(&record.name);
    if name.is_empty() {
        return Err("Item name is empty".to_string());
    }

    let quantity: Quantity = unquote(&record.quantity)
        .parse()
        .map_err(|_| format!("Invalid quantity '{}' for item '{}'", record.quantity, name))?;

    let price: Price = unquote(&record.price)
        .parse()
        .map_err(|_| format!("Invalid price '{}' for item '{}'", record.price, name))?;

    Ok(Item::new(name, quantity, price))
}

/// Format one table row; the quantity column is only present in the admin view
fn format_row(id: &str, name: &str, price: &str, quantity: &str, admin: bool) -> String {
    if admin {
        format!("| {:>2} || {:<30} || {:>14} || {:>8} |", id, name, price, quantity)
    } else {
        format!("| {:>2} || {:<30} || {:>14} |", id, name, price)
    }
}

/// Write the stock as a fixed-width table
///
/// In the customer view (`admin == false`) items with zero quantity are
/// suppressed entirely; the IDs of the remaining rows are still their
/// positions in the stock, so gaps appear in the ID column.
///
/// # Arguments
///
/// * `stock` - Stock sequence to render
/// * `admin` - Whether to render the admin variant (with quantity column)
/// * `output` - Writer receiving the table
pub fn write_stock_table(
    stock: &[Item],
    admin: bool,
    output: &mut dyn Write,
) -> Result<(), StoreError> {
    let width = if admin {
        ADMIN_TABLE_WIDTH
    } else {
        CUSTOMER_TABLE_WIDTH
    };

    writeln!(output, "{}", "=".repeat(width))?;
    writeln!(
        output,
        "{}",
        format_row("ID", "Item", "Unit Price (#)", "Quantity", admin)
    )?;
    writeln!(output, "{}", "-".repeat(width))?;

    for (item_id, item) in (1 as ItemId..).zip(stock) {
        if admin || item.in_stock() {
            writeln!(
                output,
                "{}",
                format_row(
                    &item_id.to_string(),
                    &item.name,
                    &item.price.to_string(),
                    &item.quantity.to_string(),
                    admin,
                )
            )?;
        }
    }

    writeln!(output, "{}", "=".repeat(width))?;
    writeln!(output)?;
    Ok(())
}

/// Write the priced lines and total of a committed purchase
pub fn write_receipt(receipt: &Receipt, output: &mut dyn Write) -> Result<(), StoreError> {
    for line in &receipt.lines {
        writeln!(
            output,
            "{:<30} {:>4} x {:>8} = {:>10}",
            line.name, line.quantity, line.unit_price, line.subtotal
        )?;
    }
    writeln!(output, "Total amount: #{}", receipt.total)?;
    writeln!(output)?;
    Ok(())
}
