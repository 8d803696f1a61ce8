//! Retail Market Library
//! # Overview
//!
//! This library provides a single-terminal retail store simulator: a stock
//! loaded once from a flat file, an admin who views and edits it, and
//! customers who browse and buy against the same in-memory stock while the
//! day's gain is accumulated.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Item, Cart, Receipt, StoreError)
//! - [`cli`] - CLI arguments parsing
//! - [`io`] - Stock file parsing, table rendering and the interactive console
//! - [`core`] - Business logic components:
//!   - [`core::inventory`] - Stock lookup, admin edits and stock decrement
//!   - [`core::ledger`] - Cart pricing and the running gain
//!   - [`core::purchase`] - Interactive purchase flow
//!   - [`core::checkout`] - Purchase commit
//! - [`session`] - Name prompt and the admin/customer menus
//!
//! # Stock File
//!
//! One record per line, no header: `'name', quantity, price`, with quantity
//! and price as non-negative integers (price in the smallest currency unit).
//! A malformed line aborts the load.
//!
//! # Purchase Commit
//!
//! A completed cart is priced (`Σ quantity × unit price`), subtracted from the
//! stock, and the total is added to the day's gain. Nothing is written back to
//! the stock file.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod session;
pub mod types;

pub use crate::core::{checkout, GainLedger, Inventory, PurchaseFlow};
pub use io::{load_stock, Console};
pub use session::{Session, StoreContext};
pub use types::{Amount, Cart, Item, ItemId, Price, Quantity, Receipt, StoreError};
