//! Inventory management module
//!
//! This module provides the `Inventory` struct which owns the stock sequence
//! for the lifetime of a run.
//!
//! The Inventory is responsible for:
//! - Resolving 1-based item IDs to stock positions
//! - Applying a completed cart (decrementing stock quantities)
//! - Admin edits: adding items and changing name, price or quantity

use crate::types::{Cart, Item, ItemId, Price, Quantity, StoreError};

/// Ordered, in-memory stock
///
/// Item identity is positional: item ID `n` is `items[n - 1]`. Items are
/// never removed, so IDs stay stable for the whole run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    /// Create an inventory from a loaded stock sequence
    pub fn new(items: Vec<Item>) -> Self {
        Inventory { items }
    }

    /// All items in ID order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by its 1-based ID
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidItemId` if `item_id` is outside `[1, len]`.
    pub fn get(&self, item_id: ItemId) -> Result<&Item, StoreError> {
        item_id
            .checked_sub(1)
            .and_then(|index| self.items.get(index))
            .ok_or_else(|| StoreError::invalid_item_id(item_id, self.items.len()))
    }

    fn get_mut(&mut self, item_id: ItemId) -> Result<&mut Item, StoreError> {
        let stock_size = self.items.len();
        item_id
            .checked_sub(1)
            .and_then(|index| self.items.get_mut(index))
            .ok_or_else(|| StoreError::invalid_item_id(item_id, stock_size))
    }

    /// Find an item ID by name, ignoring case
    pub fn find_by_name(&self, name: &str) -> Option<ItemId> {
        let wanted = name.to_lowercase();
        self.items
            .iter()
            .position(|item| item.name.to_lowercase() == wanted)
            .map(|index| index + 1)
    }

    /// Append a new item, returning its ID
    pub fn add_item(&mut self, item: Item) -> ItemId {
        tracing::info!(name = %item.name, quantity = item.quantity, price = item.price, "Item added");
        self.items.push(item);
        self.items.len()
    }

    /// Replace an item's name
    pub fn rename(&mut self, item_id: ItemId, name: impl Into<String>) -> Result<(), StoreError> {
        let item = self.get_mut(item_id)?;
        let name = name.into();
        tracing::info!(item_id, from = %item.name, to = %name, "Item renamed");
        item.name = name;
        Ok(())
    }

    /// Replace an item's unit price
    pub fn set_price(&mut self, item_id: ItemId, price: Price) -> Result<(), StoreError> {
        let item = self.get_mut(item_id)?;
        tracing::info!(item_id, from = item.price, to = price, "Item price changed");
        item.price = price;
        Ok(())
    }

    /// Replace an item's stock quantity
    pub fn set_quantity(&mut self, item_id: ItemId, quantity: Quantity) -> Result<(), StoreError> {
        let item = self.get_mut(item_id)?;
        tracing::info!(item_id, from = item.quantity, to = quantity, "Item quantity changed");
        item.quantity = quantity;
        Ok(())
    }

    /// Decrement stock by every line of a completed cart
    ///
    /// All lines are checked before any quantity changes, so a failing cart
    /// leaves the stock untouched.
    ///
    /// # Errors
    ///
    /// - `StoreError::InvalidItemId` if a line references an unknown item
    /// - `StoreError::InsufficientStock` if a line asks for more than is left
    pub fn apply_cart(&mut self, cart: &Cart) -> Result<(), StoreError> {
        for (item_id, quantity) in cart.iter() {
            let item = self.get(item_id)?;
            if item.quantity < quantity {
                return Err(StoreError::insufficient_stock(
                    item_id,
                    item.quantity,
                    quantity,
                ));
            }
        }

        for (item_id, quantity) in cart.iter() {
            let item = self.get_mut(item_id)?;
            let available = item.quantity;
            item.quantity = available
                .checked_sub(quantity)
                .ok_or_else(|| StoreError::insufficient_stock(item_id, available, quantity))?;
        }

        Ok(())
    }
}
