//! Admin menu: stock view, stock edits and the day's gain

use super::{MenuExit, StoreContext, INVALID_OPTION, MENU_PROMPT};
use crate::core::{GainLedger, Inventory};
use crate::io::{write_stock_table, Console};
use crate::types::{Item, ItemId, StoreError};
use std::io::{BufRead, Write};

const ADMIN_MENU: &str = "1. View stock\n\
                          2. Add items\n\
                          3. Change item detail\n\
                          4. View today's gain\n\
                          5. Exit\n\
                          6. End the day\n";

const DETAIL_MENU: &str = "1. Item Name\n\
                           2. Item Price\n\
                           3. Item Quantity\n\
                           4. Back\n";

/// Editable item field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ItemField {
    Name,
    Price,
    Quantity,
}

pub(super) fn admin_menu<R: BufRead, W: Write>(
    context: &mut StoreContext,
    console: &mut Console<R, W>,
) -> Result<MenuExit, StoreError> {
    loop {
        console.say(ADMIN_MENU)?;
        let choice = console.ask_number(MENU_PROMPT)?;
        console.blank()?;

        match choice {
            1 => write_stock_table(context.inventory.items(), true, console.output())?,
            2 => add_items(&mut context.inventory, console)?,
            3 => detail_menu(&mut context.inventory, console)?,
            4 => view_gain(&context.ledger, console)?,
            5 => return Ok(MenuExit::Logout),
            6 => {
                console.say(&format!(
                    "The day has ended. Total gain: #{}\n",
                    context.ledger.gain()
                ))?;
                return Ok(MenuExit::EndOfDay);
            }
            _ => console.say(INVALID_OPTION)?,
        }
    }
}

fn detail_menu<R: BufRead, W: Write>(
    inventory: &mut Inventory,
    console: &mut Console<R, W>,
) -> Result<(), StoreError> {
    loop {
        console.say(DETAIL_MENU)?;
        let choice = console.ask_number(MENU_PROMPT)?;
        console.blank()?;

        let field = match choice {
            1 => ItemField::Name,
            2 => ItemField::Price,
            3 => ItemField::Quantity,
            4 => return Ok(()),
            _ => {
                console.say(INVALID_OPTION)?;
                continue;
            }
        };
        change_detail(inventory, field, console)?;
    }
}

fn view_gain<R: BufRead, W: Write>(
    ledger: &GainLedger,
    console: &mut Console<R, W>,
) -> Result<(), StoreError> {
    console.say(&format!(
        "Today's gain: #{} ({} purchases)\n",
        ledger.gain(),
        ledger.purchases()
    ))
}

/// Ask for a name that is non-empty and not used by another item
///
/// `current` is the ID of the item being renamed, which may keep its own name.
fn ask_item_name<R: BufRead, W: Write>(
    inventory: &Inventory,
    current: Option<ItemId>,
    console: &mut Console<R, W>,
) -> Result<String, StoreError> {
    loop {
        let name = console.ask("Enter item name: ")?.trim().to_string();
        if name.is_empty() {
            console.say("Item name cannot be empty")?;
            continue;
        }
        match inventory.find_by_name(&name) {
            Some(existing) if Some(existing) != current => {
                console.say(&format!(
                    "An item named '{}' already exists with ID {}",
                    name, existing
                ))?;
            }
            _ => return Ok(name),
        }
    }
}

fn add_items<R: BufRead, W: Write>(
    inventory: &mut Inventory,
    console: &mut Console<R, W>,
) -> Result<(), StoreError> {
    loop {
        let name = ask_item_name(inventory, None, console)?;
        let quantity = console.ask_amount("Enter item quantity: ")?;
        let price = console.ask_amount("Enter unit price (#): ")?;

        let item_id = inventory.add_item(Item::new(name.as_str(), quantity, price));
        console.say(&format!("Item '{}' added with ID {}", name, item_id))?;

        if !console.ask_yes_no("Do you want to add another item (y/n)? ")? {
            console.blank()?;
            return Ok(());
        }
    }
}

/// Ask for an existing item ID; sold-out items are valid here
fn ask_item_id<R: BufRead, W: Write>(
    inventory: &Inventory,
    console: &mut Console<R, W>,
) -> Result<ItemId, StoreError> {
    loop {
        let number = console.ask_number("Enter item ID: ")?;
        match usize::try_from(number)
            .ok()
            .filter(|&id| inventory.get(id).is_ok())
        {
            Some(item_id) => return Ok(item_id),
            None => console.say("Invalid Item ID")?,
        }
    }
}

fn change_detail<R: BufRead, W: Write>(
    inventory: &mut Inventory,
    field: ItemField,
    console: &mut Console<R, W>,
) -> Result<(), StoreError> {
    if inventory.is_empty() {
        return console.say("There are no items in stock\n");
    }

    let item_id = ask_item_id(inventory, console)?;
    let item = inventory.get(item_id)?.clone();

    match field {
        ItemField::Name => {
            console.say(&format!("Current name: {}", item.name))?;
            let name = ask_item_name(inventory, Some(item_id), console)?;
            inventory.rename(item_id, name)?;
        }
        ItemField::Price => {
            console.say(&format!("Current unit price: #{}", item.price))?;
            let price = console.ask_amount("Enter new unit price (#): ")?;
            inventory.set_price(item_id, price)?;
        }
        ItemField::Quantity => {
            console.say(&format!("Current quantity: {}", item.quantity))?;
            let quantity = console.ask_amount("Enter new quantity: ")?;
            inventory.set_quantity(item_id, quantity)?;
        }
    }

    console.say("Item detail updated\n")
}
