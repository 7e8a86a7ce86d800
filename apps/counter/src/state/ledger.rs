//! # Ledger State
//!
//! The session's order ledger behind a mutex.
//!
//! ## Thread Safety
//! The counter itself is single-threaded, but the ledger's two pieces of
//! state (the line sequence and the running total) must move together. All
//! access goes through one `Mutex`, so a host that shares the ledger across
//! threads can never observe a line without its total or the reverse.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Command                  LedgerState call         Ledger effect        │
//! │  ───────                  ────────────────         ─────────────        │
//! │  take_orders ───────────► ensure_room() ─────────► (read only)          │
//! │  take_orders ───────────► record(line) ──────────► push + total (lock)  │
//! │  print_bill ────────────► with_ledger(bill) ─────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use hearth_core::{CoreResult, LineItem, Money, OrderLedger};

/// Shared handle to the session ledger.
#[derive(Debug, Clone)]
pub struct LedgerState {
    ledger: Arc<Mutex<OrderLedger>>,
}

impl LedgerState {
    /// Creates an empty ledger accepting at most `capacity` lines.
    pub fn new(capacity: usize) -> Self {
        LedgerState {
            ledger: Arc::new(Mutex::new(OrderLedger::with_capacity(capacity))),
        }
    }

    /// Executes a function with read access to the ledger.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let rows = ledger_state.with_ledger(|l| l.summarize());
    /// ```
    pub fn with_ledger<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&OrderLedger) -> R,
    {
        // record() cannot panic mid-update, so a poisoned ledger is still consistent.
        let ledger = self.ledger.lock().unwrap_or_else(PoisonError::into_inner);
        f(&ledger)
    }

    /// Executes a function with write access to the ledger.
    pub fn with_ledger_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut OrderLedger) -> R,
    {
        let mut ledger = self.ledger.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut ledger)
    }

    /// Records a line and returns the running total it produced.
    pub fn record(&self, line: LineItem) -> CoreResult<Money> {
        self.with_ledger_mut(|ledger| {
            ledger.record(line)?;
            Ok(ledger.running_total())
        })
    }

    /// Fails with `CapacityExceeded` when no further line fits.
    pub fn ensure_room(&self) -> CoreResult<()> {
        self.with_ledger(OrderLedger::ensure_room)
    }

    pub fn count(&self) -> usize {
        self.with_ledger(OrderLedger::count)
    }

    pub fn running_total(&self) -> Money {
        self.with_ledger(OrderLedger::running_total)
    }
}

impl Default for LedgerState {
    fn default() -> Self {
        LedgerState::new(hearth_core::DEFAULT_LEDGER_CAPACITY)
    }
}
