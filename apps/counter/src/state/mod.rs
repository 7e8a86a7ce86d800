//! # State Module
//!
//! State shared by the counter's commands.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────┐      ┌──────────────────────────┐        │
//! │  │      LedgerState         │      │      CounterConfig       │        │
//! │  │                          │      │                          │        │
//! │  │  Arc<Mutex<              │      │  shop_name               │        │
//! │  │    OrderLedger           │      │  currency_code           │        │
//! │  │  >>                      │      │  ledger_capacity         │        │
//! │  │                          │      │  exit_choice             │        │
//! │  └──────────────────────────┘      └──────────────────────────┘        │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • LedgerState: append + total update under one lock                   │
//! │  • CounterConfig: read-only after load                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod ledger;

pub use config::{ConfigError, CounterConfig};
pub use ledger::LedgerState;
