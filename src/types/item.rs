//! Item-related types for the retail market
//!
//! This module defines the stock item record and the numeric aliases used
//! for item identity, quantities and prices.

/// Item identifier
///
/// Identity is positional: the 1-based index of the item in the stock sequence.
pub type ItemId = usize;

/// Units of an item (in stock or requested)
pub type Quantity = u32;

/// Unit price in the smallest currency unit
pub type Price = u32;

/// Monetary amount (line totals, purchase totals, gain)
///
/// Wider than `Price` so that `Quantity * Price` sums cannot overflow in practice.
pub type Amount = u64;

/// A single stock item
///
/// Quantity never goes negative; it is only decremented by a committed
/// purchase or overwritten by an admin edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    /// Display name of the item
    pub name: String,

    /// Units currently in stock
    pub quantity: Quantity,

    /// Unit price in the smallest currency unit
    pub price: Price,
}

impl Item {
    /// Create a new item record
    pub fn new(name: impl Into<String>, quantity: Quantity, price: Price) -> Self {
        Item {
            name: name.into(),
            quantity,
            price,
        }
    }

    /// Whether any units are left to sell
    pub fn in_stock(&self) -> bool {
        self.quantity > 0
    }
}
