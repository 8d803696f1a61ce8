//! Customer menu: browse items and purchase

use super::{MenuExit, StoreContext, INVALID_OPTION, MENU_PROMPT};
use crate::core::{checkout, PurchaseFlow};
use crate::io::{write_receipt, write_stock_table, Console};
use crate::types::StoreError;
use std::io::{BufRead, Write};

const CUSTOMER_MENU: &str = "1. View item list\n\
                             2. Purchase Goods\n\
                             3. Exit\n";

pub(super) fn customer_menu<R: BufRead, W: Write>(
    context: &mut StoreContext,
    console: &mut Console<R, W>,
    username: &str,
) -> Result<MenuExit, StoreError> {
    console.say(&format!("Welcome, {}!\n", username))?;

    loop {
        console.say(CUSTOMER_MENU)?;
        let choice = console.ask_number(MENU_PROMPT)?;
        console.blank()?;

        match choice {
            1 => write_stock_table(context.inventory.items(), false, console.output())?,
            2 => purchase(context, console)?,
            3 => {
                console.say(&format!(
                    "Have a good day, {}!\nThanks for shopping with us.\n",
                    username
                ))?;
                return Ok(MenuExit::Logout);
            }
            _ => console.say(INVALID_OPTION)?,
        }
    }
}

/// Offer the item list, collect a cart and commit it
fn purchase<R: BufRead, W: Write>(
    context: &mut StoreContext,
    console: &mut Console<R, W>,
) -> Result<(), StoreError> {
    let answer = console.ask("Do you want to see the item list (Y/N)? ")?;
    console.blank()?;
    if answer.trim().eq_ignore_ascii_case("y") {
        write_stock_table(context.inventory.items(), false, console.output())?;
    }

    let cart = PurchaseFlow::new(context.inventory.items()).run(console)?;
    console.blank()?;

    if cart.is_empty() {
        console.say("You didn't select any items")?;
    } else {
        let receipt = checkout(&mut context.inventory, &mut context.ledger, &cart)?;
        write_receipt(&receipt, console.output())?;
    }
    console.say("Thanks for shopping with us!!!\n")
}
