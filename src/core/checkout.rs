//! Purchase commit
//!
//! Applies a completed cart in three steps: price it, decrement the stock,
//! then add the total to the day's gain.

use crate::core::{price_cart, GainLedger, Inventory};
use crate::types::{Cart, Receipt, StoreError};

/// Commit `cart` against the inventory and ledger
///
/// The stock is only decremented if the whole cart can be satisfied, and the
/// gain is only recorded once the stock has been updated.
///
/// # Returns
///
/// The priced receipt of the purchase; its `total` is what was added to the gain.
pub fn checkout(
    inventory: &mut Inventory,
    ledger: &mut GainLedger,
    cart: &Cart,
) -> Result<Receipt, StoreError> {
    let receipt = price_cart(inventory, cart)?;
    inventory.apply_cart(cart)?;
    ledger.record(receipt.total)?;

    tracing::info!(
        lines = receipt.lines.len(),
        total = receipt.total,
        gain = ledger.gain(),
        "Purchase committed"
    );
    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Item;

    #[test]
    fn test_checkout_single_line() {
        let mut inventory = Inventory::new(vec![Item::new("Rice", 10, 100)]);
        let mut ledger = GainLedger::new();
        let cart: Cart = [(1, 3)].into_iter().collect();

        let receipt = checkout(&mut inventory, &mut ledger, &cart).unwrap();

        assert_eq!(receipt.total, 300);
        assert_eq!(inventory.get(1).unwrap().quantity, 7);
        assert_eq!(ledger.gain(), 300);
    }

    #[test]
    fn test_checkout_twice_accumulates_gain() {
        let mut inventory = Inventory::new(vec![
            Item::new("Rice", 10, 100),
            Item::new("Palm Oil", 12, 450),
        ]);
        let mut ledger = GainLedger::new();

        let first: Cart = [(1, 2)].into_iter().collect();
        let second: Cart = [(2, 1), (1, 1)].into_iter().collect();
        let t1 = checkout(&mut inventory, &mut ledger, &first).unwrap().total;
        let t2 = checkout(&mut inventory, &mut ledger, &second).unwrap().total;

        assert_eq!((t1, t2), (200, 550));
        assert_eq!(ledger.gain(), t1 + t2);
        assert_eq!(inventory.get(1).unwrap().quantity, 7);
        assert_eq!(inventory.get(2).unwrap().quantity, 11);
    }

    #[test]
    fn test_failed_checkout_records_no_gain() {
        let mut inventory = Inventory::new(vec![Item::new("Rice", 2, 100)]);
        let mut ledger = GainLedger::new();
        let cart: Cart = [(1, 3)].into_iter().collect();

        let result = checkout(&mut inventory, &mut ledger, &cart);

        assert_eq!(result, Err(StoreError::insufficient_stock(1, 2, 3)));
        assert_eq!(inventory.get(1).unwrap().quantity, 2);
        assert_eq!(ledger, GainLedger::new());
    }
}
