//! Gain accumulator
//!
//! Tracks the running total of every completed purchase for the current run.
//! The gain starts at zero, only ever grows, and is never persisted.

use crate::core::Inventory;
use crate::types::{Amount, Cart, Receipt, ReceiptLine, StoreError};

/// Running gain for the day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GainLedger {
    gain: Amount,
    purchases: u32,
}

impl GainLedger {
    /// Create a ledger with zero gain
    pub fn new() -> Self {
        Self::default()
    }

    /// Total of all recorded purchases
    pub fn gain(&self) -> Amount {
        self.gain
    }

    /// Number of recorded purchases
    pub fn purchases(&self) -> u32 {
        self.purchases
    }

    /// Add a purchase total to the running gain
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ArithmeticOverflow` if the gain would overflow;
    /// the ledger is left unchanged in that case.
    pub fn record(&mut self, total: Amount) -> Result<(), StoreError> {
        let gain = self
            .gain
            .checked_add(total)
            .ok_or_else(|| StoreError::arithmetic_overflow("gain"))?;

        self.gain = gain;
        self.purchases = self.purchases.saturating_add(1);
        tracing::debug!(total, gain, purchases = self.purchases, "Gain recorded");
        Ok(())
    }
}

/// Price every line of `cart` against the current stock
///
/// The receipt total is `Σ quantity × unit price`.
pub fn price_cart(inventory: &Inventory, cart: &Cart) -> Result<Receipt, StoreError> {
    let mut receipt = Receipt::default();

    for (item_id, quantity) in cart.iter() {
        let item = inventory.get(item_id)?;
        let subtotal = Amount::from(quantity)
            .checked_mul(Amount::from(item.price))
            .ok_or_else(|| StoreError::arithmetic_overflow("purchase total"))?;

        receipt.total = receipt
            .total
            .checked_add(subtotal)
            .ok_or_else(|| StoreError::arithmetic_overflow("purchase total"))?;
        receipt.lines.push(ReceiptLine {
            item_id,
            name: item.name.clone(),
            quantity,
            unit_price: item.price,
            subtotal,
        });
    }

    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Item;

    #[test]
    fn test_gain_accumulates_across_purchases() {
        let mut ledger = GainLedger::new();

        ledger.record(300).unwrap();
        ledger.record(450).unwrap();

        assert_eq!(ledger.gain(), 750);
        assert_eq!(ledger.purchases(), 2);
    }

    #[test]
    fn test_gain_overflow_leaves_ledger_unchanged() {
        let mut ledger = GainLedger::new();
        ledger.record(Amount::MAX).unwrap();

        assert_eq!(
            ledger.record(1),
            Err(StoreError::arithmetic_overflow("gain"))
        );
        assert_eq!(ledger.gain(), Amount::MAX);
        assert_eq!(ledger.purchases(), 1);
    }

    #[test]
    fn test_price_cart_sums_lines() {
        let inventory = Inventory::new(vec![
            Item::new("Rice", 10, 100),
            Item::new("Beans", 25, 80),
        ]);
        let cart: Cart = [(1, 3), (2, 2)].into_iter().collect();

        let receipt = price_cart(&inventory, &cart).unwrap();

        assert_eq!(receipt.total, 460);
        assert_eq!(receipt.lines.len(), 2);
        assert_eq!(receipt.lines[0].subtotal, 300);
        assert_eq!(receipt.lines[1].name, "Beans");
        assert_eq!(receipt.lines[1].subtotal, 160);
    }

    #[test]
    fn test_price_empty_cart() {
        let receipt = price_cart(&Inventory::default(), &Cart::new()).unwrap();
        assert_eq!(receipt, Receipt::default());
    }
}
