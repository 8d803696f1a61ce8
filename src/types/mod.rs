//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `item`: Stock item record and numeric aliases
//! - `cart`: Cart built by the purchase flow and the receipt it produces
//! - `error`: Error types for the retail market

pub mod cart;
pub mod error;
pub mod item;

pub use cart::{Cart, Receipt, ReceiptLine};
pub use error::StoreError;
pub use item::{Amount, Item, ItemId, Price, Quantity};
