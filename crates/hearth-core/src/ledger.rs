//! # Order Ledger
//!
//! The session's append-only record of placed line items and its running bill.
//!
//! ## Ledger Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Ledger Operations                                    │
//! │                                                                         │
//! │  Session Step             Ledger Call             Effect                │
//! │  ────────────             ───────────             ──────                │
//! │                                                                         │
//! │  Line priced ───────────► record(line) ────────► items.push(line)       │
//! │                                                   total += line_total   │
//! │                                                                         │
//! │  Running bill ──────────► running_total() ─────► (read only)            │
//! │                                                                         │
//! │  Exit chosen ───────────► summarize() ─────────► (read only)            │
//! │                           bill(customer) ──────► None when empty        │
//! │                                                                         │
//! │  There is no update, remove or clear: lines are final once recorded.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::customer::Customer;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::order::{LineItem, SizeTier};
use crate::{DEFAULT_LEDGER_CAPACITY, MAX_LEDGER_CAPACITY};

// =============================================================================
// Line Summary
// =============================================================================

/// Display row for one recorded line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSummary {
    pub product_name: String,
    pub size: SizeTier,
    pub size_label: String,
    pub quantity: u32,
    pub add_on_names: Vec<String>,
    pub line_total: Money,
}

impl From<&LineItem> for LineSummary {
    fn from(item: &LineItem) -> Self {
        LineSummary {
            product_name: item.product().name.clone(),
            size: item.size(),
            size_label: item.size().label().to_string(),
            quantity: item.quantity().get(),
            add_on_names: item.add_ons().iter().map(|a| a.name.clone()).collect(),
            line_total: item.line_total(),
        }
    }
}

// =============================================================================
// Bill
// =============================================================================

/// The final itemized bill handed to the customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub customer: Customer,
    pub lines: Vec<LineSummary>,
    pub total: Money,
    pub issued_at: DateTime<Utc>,
}

// =============================================================================
// Order Ledger
// =============================================================================

/// Insertion-ordered, capacity-bounded sequence of line items.
///
/// ## Invariants
/// - `running_total() == Σ line_total` over `items()` at every point
/// - `count() <= capacity()`
/// - Recorded items are never mutated or removed
#[derive(Debug, Clone)]
pub struct OrderLedger {
    items: Vec<LineItem>,
    capacity: usize,
    running_total: Money,
}

impl Default for OrderLedger {
    fn default() -> Self {
        OrderLedger::with_capacity(DEFAULT_LEDGER_CAPACITY)
    }
}

impl OrderLedger {
    /// Creates an empty ledger that accepts at most `capacity` lines.
    ///
    /// Capacity is capped at [`MAX_LEDGER_CAPACITY`], which keeps the running
    /// total of catalog-priced lines inside `i64`.
    pub fn with_capacity(capacity: usize) -> Self {
        OrderLedger {
            items: Vec::new(),
            capacity: capacity.min(MAX_LEDGER_CAPACITY),
            running_total: Money::zero(),
        }
    }

    /// Fails with `CapacityExceeded` when no further line fits.
    pub fn ensure_room(&self) -> CoreResult<()> {
        if self.is_full() {
            return Err(CoreError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    /// Appends a line item and folds its total into the running bill.
    ///
    /// ## Errors
    /// `CapacityExceeded` when the ledger is full. The ledger is left
    /// exactly as it was: count and total unchanged.
    pub fn record(&mut self, item: LineItem) -> CoreResult<()> {
        self.ensure_room()?;
        self.running_total += item.line_total();
        self.items.push(item);
        Ok(())
    }

    pub fn running_total(&self) -> Money {
        self.running_total
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Display rows in insertion order.
    pub fn summarize(&self) -> Vec<LineSummary> {
        self.items.iter().map(LineSummary::from).collect()
    }

    /// Builds the bill, or `None` when nothing was ordered.
    pub fn bill(&self, customer: Customer, issued_at: DateTime<Utc>) -> Option<Bill> {
        if self.is_empty() {
            return None;
        }
        Some(Bill {
            customer,
            lines: self.summarize(),
            total: self.running_total,
            issued_at,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
