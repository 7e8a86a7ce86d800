//! # hearth-core: Order Composition & Pricing for Hearth Counter
//!
//! This crate turns a sequence of validated counter selections into priced,
//! immutable line items and an aggregate bill. It performs no I/O: the
//! prompt loop, login and receipt text belong to `hearth-counter`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Hearth Counter Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 hearth-counter (prompt loop)                    │   │
//! │  │    Login ──► Menu ──► Size ──► Qty ──► Add-ons ──► Bill         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ raw text tokens                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ hearth-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐  ┌───────────┐  ┌───────────┐  ┌──────────┐   │   │
//! │  │   │ validation │─►│   order   │─►│  ledger   │  │ customer │   │   │
//! │  │   │  choices   │  │ LineItem  │  │ running   │  │  name    │   │   │
//! │  │   │  size/qty  │  │ price_line│  │   bill    │  │  phone   │   │   │
//! │  │   └─────┬──────┘  └─────┬─────┘  └───────────┘  └──────────┘   │   │
//! │  │         └───────┬───────┘                                       │   │
//! │  │           ┌─────▼─────┐   ┌───────────┐                         │   │
//! │  │           │  catalog  │   │   money   │                         │   │
//! │  │           └───────────┘   └───────────┘                         │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO GLOBAL STATE • PURE FUNCTIONS          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Products and add-ons, looked up by ordinal index
//! - [`order`] - Size tiers, quantities, line items and the line pricer
//! - [`ledger`] - Append-only, capacity-bounded order ledger
//! - [`customer`] - Validated customer identity
//! - [`validation`] - Raw input to validated selection transforms
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use hearth_core::{Catalog, LineItem, OrderLedger, Quantity, SizeTier};
//!
//! let catalog = Catalog::reference();
//! let mut ledger = OrderLedger::default();
//!
//! // Cheese Burst (250.00), Medium, x2, Mushrooms (20.00) + Onions (30.00)
//! let line = LineItem::from_catalog(
//!     &catalog,
//!     0,
//!     SizeTier::Medium,
//!     Quantity::new(2).unwrap(),
//!     &[0, 1],
//! )
//! .unwrap();
//! assert_eq!(line.line_total().cents(), 60_000);
//!
//! ledger.record(line).unwrap();
//! assert_eq!(ledger.running_total().to_string(), "600.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod customer;
pub mod error;
pub mod ledger;
pub mod money;
pub mod order;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{AddOn, Catalog, Product};
pub use customer::Customer;
pub use error::{CatalogSection, CoreError, CoreResult, ValidationError};
pub use ledger::{Bill, LineSummary, OrderLedger};
pub use money::Money;
pub use order::{price_line, AddOnSelection, LineItem, Quantity, SizeTier};
pub use validation::{AddOnChoice, MenuChoice};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Default number of line items a single session ledger accepts.
///
/// ## Business Reason
/// The counter historically capped one session at 50 lines. The bound is a
/// soft limit: `OrderLedger::with_capacity` overrides it.
pub const DEFAULT_LEDGER_CAPACITY: usize = 50;

/// Maximum add-ons attached to a single line item.
pub const MAX_ADD_ONS_PER_LINE: usize = 5;

/// Maximum quantity of a single line item.
pub const MAX_LINE_QUANTITY: u32 = 999;

/// Highest catalog price accepted, in minor units (1,000,000.00).
///
/// ## Overflow Bound
/// ```text
/// line max   = (price + 5 × price) × 999      ≈ 6.0 × 10^11
/// ledger max = line max × MAX_LEDGER_CAPACITY ≈ 6.0 × 10^15  < i64::MAX
/// ```
pub const MAX_PRICE_CENTS: i64 = 100_000_000;

/// Largest ledger capacity `OrderLedger::with_capacity` will grant.
pub const MAX_LEDGER_CAPACITY: usize = 10_000;

/// Menu number that ends the ordering loop in the reference deployment.
pub const DEFAULT_EXIT_CHOICE: u32 = 6;
