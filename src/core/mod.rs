//! Core business logic module
//!
//! This module contains the store's business logic components:
//! - `inventory` - Stock ownership, item lookup, admin edits and stock decrement
//! - `ledger` - Cart pricing and the running gain for the day
//! - `purchase` - Interactive purchase flow that collects a cart
//! - `checkout` - Commit of a completed cart (price, decrement stock, record gain)

pub mod checkout;
pub mod inventory;
pub mod ledger;
pub mod purchase;

pub use checkout::checkout;
pub use inventory::Inventory;
pub use ledger::{price_cart, GainLedger};
pub use purchase::{PurchaseFlow, PurchaseState};
