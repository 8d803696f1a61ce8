//! Interactive purchase flow
//!
//! Collects a cart (item ID → quantity) from the console against the current
//! stock. The stock is only read here; committing the cart is `checkout`'s job.
//!
//! # States
//!
//! ```text
//! AwaitingItemId ──valid──▶ AwaitingQuantity ──1..=max──▶ record ─▶ AwaitingContinue
//!      ▲  │invalid               │ <1: one retry           │ dup        │  y │ n
//!      └──┘                      │ >max                    ▼            │    ▼
//!                                ▼               ConfirmingDuplicate    │   Done
//!                       ResolvingShortfall ──────────────────┘          │
//!      ▲                                                                │
//!      └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A rejected selection (failed quantity retry, skipped or invalid shortfall
//! option) is discarded without touching the cart, then the flow asks the
//! "buy another item" y/n question rather than returning straight to item
//! ID entry; `y` leads back there.
//!
//! Text where a number is expected never ends the flow: the same question is
//! asked again. The "buy another item" question accepts only `y` or `n` and
//! is the one prompt without a retry limit.

use crate::io::Console;
use crate::types::{Cart, Item, ItemId, Quantity, StoreError};
use std::io::{BufRead, Write};

const ITEM_ID_PROMPT: &str = "Enter item ID: ";
const OPTION_PROMPT: &str = "Please, Choose an option: ";
const CONTINUE_PROMPT: &str = "Do you want to buy another item (y/n)? ";
const INVALID_QUANTITY: &str = "Invalid Quantity!!";

/// Position in the purchase flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseState {
    AwaitingItemId,
    AwaitingQuantity { item_id: ItemId },
    /// The requested quantity exceeded what is in stock
    ResolvingShortfall { item_id: ItemId },
    /// The item is already in the cart with another quantity
    ConfirmingDuplicate { item_id: ItemId, quantity: Quantity },
    AwaitingContinue,
    Done,
}

/// One purchase flow invocation over a read-only stock
pub struct PurchaseFlow<'a> {
    stock: &'a [Item],
    cart: Cart,
}

impl<'a> PurchaseFlow<'a> {
    pub fn new(stock: &'a [Item]) -> Self {
        PurchaseFlow {
            stock,
            cart: Cart::new(),
        }
    }

    /// Run the flow to completion and return the collected cart
    ///
    /// If nothing is in stock the flow ends immediately with an empty cart.
    ///
    /// # Errors
    ///
    /// Only console failures escape: `StoreError::InputClosed` when the input
    /// ends, or an I/O error.
    pub fn run<R: BufRead, W: Write>(
        mut self,
        console: &mut Console<R, W>,
    ) -> Result<Cart, StoreError> {
        if !self.stock.iter().any(Item::in_stock) {
            console.say("Sorry, no items are currently available")?;
            return Ok(self.cart);
        }

        let mut state = PurchaseState::AwaitingItemId;
        loop {
            tracing::trace!(?state, "Purchase flow step");
            state = match state {
                PurchaseState::AwaitingItemId => self.await_item_id(console)?,
                PurchaseState::AwaitingQuantity { item_id } => {
                    self.await_quantity(item_id, console)?
                }
                PurchaseState::ResolvingShortfall { item_id } => {
                    self.resolve_shortfall(item_id, console)?
                }
                PurchaseState::ConfirmingDuplicate { item_id, quantity } => {
                    self.confirm_duplicate(item_id, quantity, console)?
                }
                PurchaseState::AwaitingContinue => {
                    if console.ask_yes_no(CONTINUE_PROMPT)? {
                        PurchaseState::AwaitingItemId
                    } else {
                        PurchaseState::Done
                    }
                }
                PurchaseState::Done => return Ok(self.cart),
            };
        }
    }

    /// Units in stock for a validated item ID
    fn available(&self, item_id: ItemId) -> Quantity {
        self.stock[item_id - 1].quantity
    }

    fn quantity_prompt(&self, item_id: ItemId) -> String {
        format!("Enter item Quantity (1 - {}): ", self.available(item_id))
    }

    /// Map a typed number to an item ID that exists and is in stock
    fn resolve_item_id(&self, number: i64) -> Option<ItemId> {
        usize::try_from(number)
            .ok()
            .filter(|&id| id >= 1 && id <= self.stock.len())
            .filter(|&id| self.stock[id - 1].in_stock())
    }

    /// Accept `number` as a quantity of `item_id` if it lies in `1..=available`
    fn valid_quantity(&self, item_id: ItemId, number: i64) -> Option<Quantity> {
        Quantity::try_from(number)
            .ok()
            .filter(|&qty| qty >= 1 && qty <= self.available(item_id))
    }

    fn await_item_id<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<PurchaseState, StoreError> {
        let number = console.ask_number(ITEM_ID_PROMPT)?;
        match self.resolve_item_id(number) {
            Some(item_id) => Ok(PurchaseState::AwaitingQuantity { item_id }),
            None => {
                tracing::debug!(number, "Rejected item ID");
                console.say("Invalid Item ID")?;
                Ok(PurchaseState::AwaitingItemId)
            }
        }
    }

    fn await_quantity<R: BufRead, W: Write>(
        &mut self,
        item_id: ItemId,
        console: &mut Console<R, W>,
    ) -> Result<PurchaseState, StoreError> {
        let prompt = self.quantity_prompt(item_id);
        let number = console.ask_number(&prompt)?;

        if number < 1 {
            // A single retry; a second miss in either direction drops the selection
            let retry = console.ask_number(&prompt)?;
            return self.accept_retry(item_id, retry, console);
        }

        match self.valid_quantity(item_id, number) {
            Some(quantity) => Ok(self.select(item_id, quantity)),
            None => Ok(PurchaseState::ResolvingShortfall { item_id }),
        }
    }

    fn resolve_shortfall<R: BufRead, W: Write>(
        &mut self,
        item_id: ItemId,
        console: &mut Console<R, W>,
    ) -> Result<PurchaseState, StoreError> {
        console.say(
            "Sorry, the requested quantity is currently unavailable.\n\
             1. Skip item\n\
             2. Request all available quantity\n\
             3. Enter another quantity\n",
        )?;

        match console.ask_number(OPTION_PROMPT)? {
            1 => {
                tracing::debug!(item_id, "Item skipped");
                Ok(PurchaseState::AwaitingContinue)
            }
            2 => Ok(self.select(item_id, self.available(item_id))),
            3 => {
                let retry = console.ask_number(&self.quantity_prompt(item_id))?;
                self.accept_retry(item_id, retry, console)
            }
            _ => {
                console.say("Wrong Input!!")?;
                Ok(PurchaseState::AwaitingContinue)
            }
        }
    }

    fn accept_retry<R: BufRead, W: Write>(
        &mut self,
        item_id: ItemId,
        number: i64,
        console: &mut Console<R, W>,
    ) -> Result<PurchaseState, StoreError> {
        match self.valid_quantity(item_id, number) {
            Some(quantity) => Ok(self.select(item_id, quantity)),
            None => {
                tracing::debug!(item_id, number, "Selection discarded after retry");
                console.say(INVALID_QUANTITY)?;
                Ok(PurchaseState::AwaitingContinue)
            }
        }
    }

    /// Record a validated selection, or ask first if the item is already in the cart
    fn select(&mut self, item_id: ItemId, quantity: Quantity) -> PurchaseState {
        if self.cart.contains(item_id) {
            return PurchaseState::ConfirmingDuplicate { item_id, quantity };
        }
        self.cart.set(item_id, quantity);
        PurchaseState::AwaitingContinue
    }

    fn confirm_duplicate<R: BufRead, W: Write>(
        &mut self,
        item_id: ItemId,
        quantity: Quantity,
        console: &mut Console<R, W>,
    ) -> Result<PurchaseState, StoreError> {
        let previous = self.cart.get(item_id).unwrap_or_default();
        console.say(&format!(
            "This item '{}' has been selected earlier with quantity '{}'",
            self.stock[item_id - 1].name,
            previous
        ))?;
        console.say("1. Change to new quantity\n2. Leave with previous quantity\n")?;

        match console.ask_number(OPTION_PROMPT)? {
            1 => {
                self.cart.set(item_id, quantity);
            }
            2 => {}
            _ => console.say("Wrong input!!\nItem quantity left unchanged")?,
        }
        Ok(PurchaseState::AwaitingContinue)
    }
}
