//! Session and menu controller
//!
//! The top-level loop of the store: ask for a name, then hand the console to
//! the admin menu (name equals `admin`, any case) or the customer menu. Both
//! menus return to the name prompt on exit; only the admin "End the day"
//! option, or the end of input, finishes the session.
//!
//! All state lives in an explicit [`StoreContext`] owned by the session.

mod admin;
mod customer;

use crate::core::{GainLedger, Inventory};
use crate::io::Console;
use crate::types::{Item, StoreError};
use std::io::{BufRead, Write};

/// Name that opens the admin menu (compared case-insensitively)
pub const ADMIN_NAME: &str = "admin";

const MENU_PROMPT: &str = "Choose an option: ";
const INVALID_OPTION: &str = "Invalid Option!!\n";

/// Mutable store state shared by every menu for one run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreContext {
    pub inventory: Inventory,
    pub ledger: GainLedger,
}

impl StoreContext {
    /// Start a day with the loaded stock and zero gain
    pub fn new(stock: Vec<Item>) -> Self {
        StoreContext {
            inventory: Inventory::new(stock),
            ledger: GainLedger::new(),
        }
    }
}

/// How a menu was left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuExit {
    /// Back to the name prompt
    Logout,
    /// Finish the session
    EndOfDay,
}

/// Whether `username` selects the admin menu
pub fn is_admin(username: &str) -> bool {
    username.trim().eq_ignore_ascii_case(ADMIN_NAME)
}

/// Interactive session over a console
pub struct Session<R, W> {
    context: StoreContext,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(context: StoreContext, console: Console<R, W>) -> Self {
        Session { context, console }
    }

    /// Store state as it currently stands
    pub fn context(&self) -> &StoreContext {
        &self.context
    }

    /// Serve users until the day ends
    ///
    /// End of input is treated like the end of the day.
    pub fn run(&mut self) -> Result<(), StoreError> {
        tracing::info!(items = self.context.inventory.len(), "Session started");

        match self.serve() {
            Ok(()) => {}
            Err(StoreError::InputClosed) => {
                tracing::info!("Input closed, ending the day");
            }
            Err(e) => return Err(e),
        }

        tracing::info!(
            gain = self.context.ledger.gain(),
            purchases = self.context.ledger.purchases(),
            "Session ended"
        );
        Ok(())
    }

    fn serve(&mut self) -> Result<(), StoreError> {
        loop {
            let username = self.console.ask("Please, Enter Your Name: ")?;
            self.console.blank()?;

            let exit = if is_admin(&username) {
                tracing::debug!("Admin logged in");
                admin::admin_menu(&mut self.context, &mut self.console)?
            } else {
                tracing::debug!(user = %username.trim(), "Customer logged in");
                customer::customer_menu(&mut self.context, &mut self.console, username.trim())?
            };

            if exit == MenuExit::EndOfDay {
                return Ok(());
            }
        }
    }

    /// Consume the session, returning the final state and console
    pub fn into_parts(self) -> (StoreContext, Console<R, W>) {
        (self.context, self.console)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Cursor;

    #[rstest]
    #[case::lower("admin", true)]
    #[case::upper("ADMIN", true)]
    #[case::mixed(" Admin ", true)]
    #[case::customer("Ada", false)]
    #[case::prefix("administrator", false)]
    #[case::empty("", false)]
    fn test_is_admin(#[case] username: &str, #[case] expected: bool) {
        assert_eq!(is_admin(username), expected);
    }

    fn run_session(stock: Vec<Item>, input: &str) -> (StoreContext, String) {
        let console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let mut session = Session::new(StoreContext::new(stock), console);
        session.run().unwrap();
        let (context, console) = session.into_parts();
        (context, String::from_utf8(console.into_output()).unwrap())
    }

    #[test]
    fn test_end_of_day_stops_session() {
        let (_, transcript) = run_session(vec![], "admin\n6\nnobody\n");
        assert_eq!(transcript.matches("Please, Enter Your Name: ").count(), 1);
    }

    #[test]
    fn test_logout_returns_to_name_prompt() {
        let (_, transcript) = run_session(vec![], "admin\n5\nAda\n3\nadmin\n6\n");
        assert_eq!(transcript.matches("Please, Enter Your Name: ").count(), 3);
        assert!(transcript.contains("Welcome, Ada!"));
        assert!(transcript.contains("Have a good day, Ada!"));
    }

    #[test]
    fn test_closed_input_ends_session_cleanly() {
        let (context, _) = run_session(vec![Item::new("Rice", 10, 100)], "Ada\n2\n");
        assert_eq!(context.inventory.get(1).unwrap().quantity, 10);
        assert_eq!(context.ledger.gain(), 0);
    }
}
