//! # Error Types
//!
//! Domain-specific error types for hearth-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  hearth-core errors (this file)                                        │
//! │  ├── CoreError        - Catalog, pricing and ledger failures           │
//! │  └── ValidationError  - Rejected user input (always re-prompted)       │
//! │                                                                         │
//! │  hearth-counter errors (app crate)                                     │
//! │  ├── ConfigError      - Bad environment configuration                  │
//! │  └── AppError         - What the binary reports before exiting         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → stderr                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Recoverability
//! | Class                  | Meaning                        | Handling          |
//! |------------------------|--------------------------------|-------------------|
//! | `ValidationError`      | input rejected                 | re-prompt         |
//! | `CapacityExceeded`     | ledger full                    | reject line, tell |
//! | `AddOnLimitReached`    | sixth add-on                   | reject, tell      |
//! | `OutOfRange`           | caller passed a bad index      | defect, surface   |
//! | `InvalidCatalog`       | catalog data rejected at load  | fatal at startup  |

use std::fmt;

use thiserror::Error;

// =============================================================================
// Catalog Section
// =============================================================================

/// Which half of the catalog an index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSection {
    Products,
    AddOns,
}

impl fmt::Display for CatalogSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSection::Products => f.write_str("product"),
            CatalogSection::AddOns => f.write_str("add-on"),
        }
    }
}

// =============================================================================
// Core Error
// =============================================================================

/// Core ordering errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A catalog index fell outside `[0, len)`.
    ///
    /// ## When This Occurs
    /// Only when a caller bypasses the validators: every index produced by
    /// `validation::parse_menu_choice` / `parse_add_on_choice` is in range.
    #[error("{section} index {index} is out of range (catalog has {len})")]
    OutOfRange {
        section: CatalogSection,
        index: usize,
        len: usize,
    },

    /// The ledger already holds its maximum number of line items.
    ///
    /// ## User Workflow
    /// ```text
    /// 50 lines recorded
    ///      │
    ///      ▼
    /// record(line #51)
    ///      │
    ///      ▼
    /// CapacityExceeded { capacity: 50 }   (ledger unchanged)
    ///      │
    ///      ▼
    /// Prompt shows: "Order limit of 50 line items reached"
    /// ```
    #[error("Order limit of {capacity} line items reached")]
    CapacityExceeded { capacity: usize },

    /// A line item already carries the maximum number of add-ons.
    #[error("A line item can carry at most {max} add-ons")]
    AddOnLimitReached { max: usize },

    /// Catalog data failed validation when it was built or loaded.
    #[error("Invalid catalog: {reason}")]
    InvalidCatalog { reason: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Returns true when the caller should inform the user and carry on.
    ///
    /// `OutOfRange` and `InvalidCatalog` indicate programming or data
    /// defects and are not recoverable at the prompt.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CoreError::CapacityExceeded { .. }
                | CoreError::AddOnLimitReached { .. }
                | CoreError::Validation(_)
        )
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Rejected input.
///
/// Every variant is recoverable: the prompt loop prints the message and asks
/// again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Text was given where a whole number was expected.
    #[error("{field} must be a whole number")]
    NotANumber { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be a positive number")]
    MustBePositive { field: String },

    /// Invalid format (e.g., phone number, email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
