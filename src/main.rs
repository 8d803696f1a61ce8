//! Retail Market CLI
//!
//! Interactive retail store simulator on the terminal.
//!
//! # Usage
//!
//! ```bash
//! cargo run                          # uses ./data.csv
//! cargo run -- stock.csv
//! cargo run -- --log-level debug stock.csv
//! RUST_LOG=retail_market=trace cargo run -- stock.csv
//! ```
//!
//! The program loads the stock file, then prompts for a user name. `admin`
//! opens the stock management menu; any other name opens the customer menu.
//! The program ends when the admin ends the day or the input is closed.
//!
//! Diagnostics are written to stderr so they never mix with the console.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (stock file not found or malformed, console I/O failure)

use retail_market::{cli, load_stock, Console, Session, StoreContext};
use std::io;
use std::process;
use tracing_subscriber::EnvFilter;

fn init_tracing(default_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();
    init_tracing(&args.log_level);

    // A malformed stock file aborts before any menu is shown
    let stock = match load_stock(&args.stock_file) {
        Ok(stock) => stock,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    let mut session = Session::new(StoreContext::new(stock), console);
    if let Err(e) = session.run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
