//! # Login Command
//!
//! Single-attempt username/password challenge at the start of a session.

use std::io::{BufRead, Write};

use tracing::{info, warn};

use crate::error::AppResult;
use crate::prompt::Prompter;
use crate::state::CounterConfig;

/// Asks for credentials once and compares them with the configured pair.
///
/// ## Returns
/// `true` when both username and password match exactly.
pub fn authenticate<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config: &CounterConfig,
) -> AppResult<bool> {
    prompter.say("--- Login ---")?;
    let username = prompter.ask("Enter username: ")?;
    let password = prompter.ask("Enter password: ")?;

    let accepted = username == config.username && password == config.password;
    if accepted {
        info!(username = %username, "Login accepted");
    } else {
        warn!(username = %username, "Login rejected");
    }

    Ok(accepted)
}
