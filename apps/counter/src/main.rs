//! # Hearth Counter Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Hearth Counter                                   │
//! │                                                                         │
//! │   stdin ──► Prompter ──► commands ──► hearth-core (price, record)       │
//! │                │                                                        │
//! │   stdout ◄─────┘  prompts, running totals, bill                         │
//! │   stderr ◄──────  tracing output                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The actual setup is in lib.rs so it can be tested.

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    hearth_counter::run().context("Counter session failed")?;
    Ok(())
}
