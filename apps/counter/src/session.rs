//! # Counter Session
//!
//! One customer visit from welcome banner to printed bill.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Counter Session                                   │
//! │                                                                         │
//! │  1. Welcome banner ──────────────────────────────────────────────────► │
//! │  2. authenticate ──── rejected ──► "Invalid login credentials." ──► end│
//! │  3. Menu ────────────────────────────────────────────────────────────► │
//! │  4. take_orders (until exit choice) ─────────────────────────────────► │
//! │  5. Farewell                                                           │
//! │       ├── no lines ──► "No order placed." ───────────────────────► end│
//! │       └── lines ─────► collect_customer ──► print_bill ───────────► end│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use chrono::Utc;
use hearth_core::{Bill, Catalog};
use tracing::info;
use uuid::Uuid;

use crate::commands::{authenticate, collect_customer, print_bill, take_orders};
use crate::error::AppResult;
use crate::prompt::Prompter;
use crate::receipt;
use crate::state::{CounterConfig, LedgerState};

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Wrong username or password.
    LoginRejected,
    /// The user exited without recording a line.
    NoOrder,
    /// The order was billed.
    Billed(Bill),
}

/// A single counter session over one prompter.
pub struct Session<'a, R, W> {
    id: Uuid,
    config: &'a CounterConfig,
    catalog: &'a Catalog,
    ledger: LedgerState,
    prompter: Prompter<R, W>,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(config: &'a CounterConfig, catalog: &'a Catalog, prompter: Prompter<R, W>) -> Self {
        Session {
            id: Uuid::new_v4(),
            config,
            catalog,
            ledger: LedgerState::new(config.ledger_capacity),
            prompter,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn ledger(&self) -> &LedgerState {
        &self.ledger
    }

    /// Runs the session to completion.
    pub fn run(&mut self) -> AppResult<SessionOutcome> {
        info!(session_id = %self.id, shop = %self.config.shop_name, "Session started");

        let outcome = self.run_steps()?;

        let outcome_name = match &outcome {
            SessionOutcome::LoginRejected => "login_rejected",
            SessionOutcome::NoOrder => "no_order",
            SessionOutcome::Billed(_) => "billed",
        };
        info!(
            session_id = %self.id,
            outcome = outcome_name,
            lines = self.ledger.count(),
            "Session finished"
        );
        Ok(outcome)
    }

    fn run_steps(&mut self) -> AppResult<SessionOutcome> {
        let config = self.config;
        let catalog = self.catalog;
        let prompter = &mut self.prompter;

        prompter.say(format_args!("Welcome to {}!", config.shop_name))?;

        if !authenticate(prompter, config)? {
            prompter.say("Invalid login credentials. Exiting.")?;
            return Ok(SessionOutcome::LoginRejected);
        }

        prompter.say(receipt::menu(catalog, config))?;
        take_orders(prompter, config, catalog, &self.ledger)?;

        prompter.say(format_args!(
            "Exiting the program. Thank you for visiting {}!",
            config.shop_name
        ))?;

        if self.ledger.count() == 0 {
            prompter.say("No order placed.")?;
            return Ok(SessionOutcome::NoOrder);
        }

        let customer = collect_customer(prompter)?;
        match print_bill(prompter, config, &self.ledger, customer, Utc::now())? {
            Some(bill) => Ok(SessionOutcome::Billed(bill)),
            None => Ok(SessionOutcome::NoOrder),
        }
    }

    /// Consumes the session and hands back the prompter's writer.
    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }
}
