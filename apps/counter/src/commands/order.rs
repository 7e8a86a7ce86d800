//! # Order Commands
//!
//! The order loop: pick a product or exit, then size, quantity and add-ons.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Loop                                           │
//! │                                                                         │
//! │  ┌──────────┐  product,   ┌──────────┐     ┌──────────┐                │
//! │  │  Menu    │  room left  │ Size +   │────►│ Add-on   │◄──┐ 1..=n      │
//! │  │  prompt  │────────────►│ Quantity │     │ rounds   │───┘ (max 5)    │
//! │  └──────────┘             └──────────┘     └──────────┘                │
//! │     ▲   │ └── ledger full ──► report ──┐        │ 0                     │
//! │     ├───┼──────────────────────────────┘        │                       │
//! │     │   │ exit                                  ▼                       │
//! │     │   ▼                                 ┌──────────┐                  │
//! │     │  return                             │  record  │ CapacityExceeded │
//! │     │                                     │  line    │──► report ──┐    │
//! │     │                                     └──────────┘             │    │
//! │     └─────────────── running total printed ──┴─────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use hearth_core::validation::{parse_add_on_choice, parse_menu_choice, parse_quantity, parse_size};
use hearth_core::{AddOnChoice, AddOnSelection, Catalog, CoreError, LineItem, MenuChoice};
use tracing::{debug, warn};

use crate::error::AppResult;
use crate::prompt::Prompter;
use crate::receipt;
use crate::state::{CounterConfig, LedgerState};

/// Runs the order loop until the exit choice is entered.
///
/// ## Rules
/// - Every answer is re-asked until valid
/// - A full ledger is reported as soon as a product is picked, before size
///   and quantity are asked; the loop keeps going so the user can exit
pub fn take_orders<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config: &CounterConfig,
    catalog: &Catalog,
    ledger: &LedgerState,
) -> AppResult<()> {
    let menu_prompt = format!(
        "Select an item by number or enter {} to exit: ",
        config.exit_choice
    );

    loop {
        let choice = prompter.ask_until(&menu_prompt, |raw| {
            parse_menu_choice(raw, catalog, config.exit_choice)
        })?;

        let product_index = match choice {
            MenuChoice::Exit => return Ok(()),
            MenuChoice::Product(index) => index,
        };

        if let Err(e) = ledger.ensure_room() {
            report_rejected_line(prompter, config, e)?;
            continue;
        }

        let line = compose_line(prompter, config, catalog, product_index)?;
        let line_total = line.line_total();
        let product_name = line.product().name.clone();

        match ledger.record(line) {
            Ok(running_total) => {
                debug!(
                    product = %product_name,
                    line_total = %line_total,
                    running_total = %running_total,
                    "Line recorded"
                );
                prompter.say(format_args!(
                    "Added {} for {}. Running total: {}",
                    product_name,
                    config.format_amount(line_total),
                    config.format_amount(running_total)
                ))?;
            }
            Err(e) => {
                debug!(product = %product_name, "Record failed");
                report_rejected_line(prompter, config, e)?;
            }
        }
    }
}

/// Reports a recoverable rejection so the loop can go on; anything else ends it.
fn report_rejected_line<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config: &CounterConfig,
    error: CoreError,
) -> AppResult<()> {
    if !error.is_recoverable() {
        return Err(error.into());
    }
    warn!(error = %error, "Line rejected");
    prompter.say(format_args!(
        "{error}. Enter {} to finish the order.",
        config.exit_choice
    ))
}

/// Asks for size, quantity and add-ons and prices the line.
fn compose_line<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config: &CounterConfig,
    catalog: &Catalog,
    product_index: usize,
) -> AppResult<LineItem> {
    let product = catalog.product(product_index)?.clone();

    prompter.say(receipt::size_menu())?;
    let size = prompter.ask_until("Enter your choice (1, 2, or 3): ", parse_size)?;
    let quantity = prompter.ask_until("Enter the quantity: ", parse_quantity)?;
    let add_ons = collect_add_ons(prompter, config, catalog)?;

    Ok(LineItem::new(product, size, quantity, add_ons))
}

/// Runs add-on rounds until `0` is entered.
///
/// A sixth add-on is refused and the round repeats; only `0` leaves.
fn collect_add_ons<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config: &CounterConfig,
    catalog: &Catalog,
) -> AppResult<AddOnSelection> {
    let mut selection = AddOnSelection::new();

    loop {
        prompter.say(receipt::add_on_menu(catalog, config))?;
        let choice = prompter.ask_until("Enter your choice: ", |raw| parse_add_on_choice(raw, catalog))?;

        let index = match choice {
            AddOnChoice::Finish => return Ok(selection),
            AddOnChoice::Select(index) => index,
        };

        let add_on = catalog.add_on(index)?.clone();
        match selection.push(add_on) {
            Ok(()) => {}
            Err(e) if e.is_recoverable() => {
                debug!(count = selection.len(), "Add-on refused at limit");
                prompter.say(format_args!("{e}. Enter 0 to finish."))?;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_core::{Money, SizeTier};
    use std::io::Cursor;

    struct Run {
        ledger: LedgerState,
        output: String,
        result: AppResult<()>,
    }

    fn run_with(script: &str, config: &CounterConfig) -> Run {
        let catalog = Catalog::reference();
        let ledger = LedgerState::new(config.ledger_capacity);
        let mut prompter = Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::<u8>::new());

        let result = take_orders(&mut prompter, config, &catalog, &ledger);
        Run {
            ledger,
            output: String::from_utf8(prompter.into_output()).unwrap(),
            result,
        }
    }

    fn run(script: &str) -> Run {
        run_with(script, &CounterConfig::default())
    }

    #[test]
    fn test_two_lines_then_exit() {
        let run = run("1\n2\n2\n1\n2\n0\n2\n1\n1\n0\n6\n");
        assert!(run.result.is_ok());

        assert_eq!(run.ledger.count(), 2);
        assert_eq!(run.ledger.running_total(), Money::from_major_minor(750, 0));
        assert!(run.output.contains("Added Cheese Burst Pizza for INR 600.00. Running total: INR 600.00"));
        assert!(run.output.contains("Added Veggie Pizza for INR 150.00. Running total: INR 750.00"));
    }

    #[test]
    fn test_immediate_exit() {
        let run = run("6\n");
        assert!(run.result.is_ok());
        assert_eq!(run.ledger.count(), 0);
    }

    #[test]
    fn test_bad_answers_reprompted() {
        // menu: "x", "9"; size: "4"; quantity: "0"; add-on: "7"
        let run = run("x\n9\n3\n4\n2\n0\n1\n7\n0\n6\n");
        assert!(run.result.is_ok());

        assert_eq!(run.ledger.count(), 1);
        run.ledger.with_ledger(|l| {
            let line = &l.items()[0];
            assert_eq!(line.product().name, "Paneer Pizza");
            assert_eq!(line.size(), SizeTier::Medium);
            assert_eq!(line.quantity().get(), 1);
            assert!(line.add_ons().is_empty());
        });
        assert_eq!(run.output.matches("Invalid input:").count(), 5);
    }

    #[test]
    fn test_sixth_add_on_refused() {
        // Olives x6, the sixth refused, then finish
        let run = run("2\n1\n1\n4\n4\n4\n4\n4\n4\n0\n6\n");
        assert!(run.result.is_ok());

        assert!(run.output.contains("A line item can carry at most 5 add-ons. Enter 0 to finish."));
        run.ledger.with_ledger(|l| assert_eq!(l.items()[0].add_ons().len(), 5));
        // 150 + 5 x 10
        assert_eq!(run.ledger.running_total(), Money::from_major_minor(200, 0));
    }

    #[test]
    fn test_capacity_reported_and_loop_continues() {
        let config = CounterConfig {
            ledger_capacity: 1,
            ..CounterConfig::default()
        };
        // second pick goes straight back to the menu
        let run = run_with("2\n1\n1\n0\n3\n6\n", &config);
        assert!(run.result.is_ok());

        assert_eq!(run.ledger.count(), 1);
        assert_eq!(run.ledger.running_total(), Money::from_major_minor(150, 0));
        assert!(run.output.contains("Order limit of 1 line items reached. Enter 6 to finish the order."));
        assert_eq!(run.output.matches("Enter the quantity: ").count(), 1);
        assert_eq!(run.output.matches("Invalid input:").count(), 0);
    }

    #[test]
    fn test_full_ledger_skips_size_and_quantity() {
        let config = CounterConfig {
            ledger_capacity: 1,
            ..CounterConfig::default()
        };
        let run = run_with("1\n1\n1\n0\n4\n2\n6\n", &config);
        assert!(run.result.is_ok());

        let (_, after_full) = run
            .output
            .split_once("Order limit of 1 line items reached.")
            .unwrap();
        assert!(!after_full.contains("Enter your choice (1, 2, or 3): "));
        assert_eq!(run.output.matches("Order limit of 1 line items reached.").count(), 2);
        assert_eq!(run.ledger.count(), 1);
    }

    #[test]
    fn test_custom_exit_choice() {
        let config = CounterConfig {
            exit_choice: 9,
            ..CounterConfig::default()
        };
        let run = run_with("6\n9\n", &config);
        assert!(run.result.is_ok());
        assert!(run.output.contains("Select an item by number or enter 9 to exit: "));
        assert_eq!(run.output.matches("Invalid input:").count(), 1);
    }

    #[test]
    fn test_input_ends_mid_line() {
        let run = run("1\n2\n");
        assert!(matches!(run.result, Err(crate::error::AppError::InputClosed)));
        assert_eq!(run.ledger.count(), 0);
    }
}
