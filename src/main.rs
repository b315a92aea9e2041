//! Billing Engine CLI
//!
//! An interactive shell over a fixed product catalog: add line items by
//! product code, then generate a bill as a plain-text file and a
//! paginated document in the working directory.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- catalog.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use billing_engine::{BillingError, BillingSession, Catalog, Result};
use chrono::Local;
use std::env;
use std::io::{self, BufRead, Write};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(BillingError::MissingArgument);
    }

    let catalog = Catalog::load(&args[1])?;
    println!(
        "Loaded catalog with {} products. Type 'help' for commands.",
        catalog.len()
    );

    let mut session = BillingSession::new(catalog);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }

        if !dispatch(line.trim(), &mut session)? {
            break;
        }
    }

    Ok(())
}

/// Handles one shell command. Returns `false` when the session should end.
///
/// Recoverable errors (unknown code, bad quantity, empty bill) are
/// printed inline and leave the session unchanged; only I/O failures
/// propagate.
fn dispatch(line: &str, session: &mut BillingSession) -> Result<bool> {
    let mut parts = line.split_whitespace();
    let command = match parts.next() {
        Some(cmd) => cmd,
        None => return Ok(true), // blank line
    };

    match command {
        "add" => {
            let code = parts.next().unwrap_or("");
            let qty_arg = parts.next().unwrap_or("");
            match qty_arg.parse::<i64>() {
                Ok(qty) => match session.add_line_item(code, qty) {
                    Ok(item) => println!(
                        "Added: {} - {} - {} x {} = {}",
                        item.code, item.name, item.price, item.quantity, item.line_total
                    ),
                    Err(e) => println!("Error: {}", e),
                },
                Err(_) => println!(
                    "Error: Invalid quantity '{}': must be a positive integer",
                    qty_arg
                ),
            }
        }
        "list" => {
            if session.current_entries().is_empty() {
                println!("No items yet. Add products to begin billing.");
            } else {
                for item in session.current_entries() {
                    println!(
                        "{} - {} - {} x {} = {}",
                        item.code, item.name, item.price, item.quantity, item.line_total
                    );
                }
                println!("Total: {}", session.current_total());
            }
        }
        "total" => println!("Total: {}", session.current_total()),
        "bill" => match session.generate_bill() {
            Ok(bill) => {
                let stamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
                let artifacts = bill.write_to(".", &stamp)?;
                println!(
                    "Saved {} and {}",
                    artifacts.text_path.display(),
                    artifacts.document_path.display()
                );
            }
            Err(e) => println!("Error: {}", e),
        },
        "clear" => {
            session.reset();
            println!("Cleared all items.");
        }
        "help" => print_help(),
        "quit" | "exit" => return Ok(false),
        other => println!("Unknown command '{}'. Type 'help' for commands.", other),
    }

    Ok(true)
}

fn print_help() {
    println!("Commands:");
    println!("  add <code> <qty>  add a product to the bill");
    println!("  list              show current items and total");
    println!("  total             show the running total");
    println!("  bill              write the bill files and start fresh");
    println!("  clear             discard current items");
    println!("  quit              exit");
}
