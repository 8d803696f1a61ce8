//! Shopping cart built during a single purchase flow
//!
//! A cart maps item IDs to requested quantities. Keys are unique: selecting
//! the same item again either overwrites or keeps the recorded quantity,
//! it never creates a second line.

use super::item::{Amount, ItemId, Price, Quantity};
use std::collections::BTreeMap;

/// Item ID → requested quantity, ordered by item ID
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: BTreeMap<ItemId, Quantity>,
}

impl Cart {
    /// Create an empty cart
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `quantity` for `item_id`, returning the previously recorded quantity
    pub fn set(&mut self, item_id: ItemId, quantity: Quantity) -> Option<Quantity> {
        self.lines.insert(item_id, quantity)
    }

    /// Quantity recorded for `item_id`, if selected
    pub fn get(&self, item_id: ItemId) -> Option<Quantity> {
        self.lines.get(&item_id).copied()
    }

    pub fn contains(&self, item_id: ItemId) -> bool {
        self.lines.contains_key(&item_id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Iterate `(item_id, quantity)` pairs in item ID order
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, Quantity)> + '_ {
        self.lines.iter().map(|(&id, &qty)| (id, qty))
    }
}

impl FromIterator<(ItemId, Quantity)> for Cart {
    fn from_iter<I: IntoIterator<Item = (ItemId, Quantity)>>(iter: I) -> Self {
        Cart {
            lines: iter.into_iter().collect(),
        }
    }
}

/// One priced line of a committed purchase
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptLine {
    pub item_id: ItemId,
    pub name: String,
    pub quantity: Quantity,
    pub unit_price: Price,
    /// `quantity * unit_price`
    pub subtotal: Amount,
}

/// Priced summary of a committed purchase
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Receipt {
    pub lines: Vec<ReceiptLine>,
    /// Sum of all line subtotals
    pub total: Amount,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_returns_previous_quantity() {
        let mut cart = Cart::new();
        assert_eq!(cart.set(2, 3), None);
        assert_eq!(cart.set(2, 5), Some(3));
        assert_eq!(cart.get(2), Some(5));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_iter_is_ordered_by_item_id() {
        let cart: Cart = [(3, 1), (1, 4), (2, 2)].into_iter().collect();
        let lines: Vec<_> = cart.iter().collect();
        assert_eq!(lines, vec![(1, 4), (2, 2), (3, 1)]);
    }
}
