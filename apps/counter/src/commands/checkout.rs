//! # Checkout Commands
//!
//! Collects the customer's contact details and prints the final bill.

use std::io::{BufRead, Write};

use chrono::{DateTime, Utc};
use hearth_core::validation::{validate_customer_name, validate_email, validate_phone};
use hearth_core::{Bill, Customer};
use tracing::info;

use crate::error::AppResult;
use crate::prompt::Prompter;
use crate::receipt;
use crate::state::{CounterConfig, LedgerState};

/// Asks for name, phone and email, each until valid.
pub fn collect_customer<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> AppResult<Customer> {
    let name = prompter.ask_until("Enter your name: ", validate_customer_name)?;
    let phone = prompter.ask_until("Enter your phone number: ", validate_phone)?;
    let email = prompter.ask_until("Enter your email: ", validate_email)?;

    Ok(Customer::new(&name, &phone, &email)?)
}

/// Builds the bill from the ledger and prints summary plus footer.
///
/// ## Returns
/// `None` (and nothing printed) when the ledger is empty.
pub fn print_bill<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config: &CounterConfig,
    ledger: &LedgerState,
    customer: Customer,
    issued_at: DateTime<Utc>,
) -> AppResult<Option<Bill>> {
    let Some(bill) = ledger.with_ledger(|l| l.bill(customer, issued_at)) else {
        return Ok(None);
    };

    info!(lines = bill.lines.len(), total = %bill.total, "Bill issued");
    prompter.say(receipt::bill(&bill, config))?;
    Ok(Some(bill))
}
