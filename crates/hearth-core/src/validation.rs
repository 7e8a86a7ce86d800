//! # Validation Module
//!
//! Turns raw prompt text into validated selections.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Selection Validation                               │
//! │                                                                         │
//! │  prompt loop (hearth-counter)                                          │
//! │  ├── reads one raw line                                                │
//! │  └── calls a parse_* / validate_* function below                       │
//! │           │                                                             │
//! │           ├── Ok(value)  → hand to pricer / ledger                     │
//! │           └── Err(e)     → print e, ask again (no retry limit)         │
//! │                                                                         │
//! │  Every function here is pure: same text in, same result out.          │
//! │  Surrounding whitespace is trimmed before any rule is applied.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use hearth_core::validation::{parse_menu_choice, parse_size, MenuChoice};
//! use hearth_core::{Catalog, SizeTier};
//!
//! let catalog = Catalog::reference();
//! assert_eq!(parse_menu_choice("2", &catalog, 6), Ok(MenuChoice::Product(1)));
//! assert_eq!(parse_menu_choice("6", &catalog, 6), Ok(MenuChoice::Exit));
//! assert_eq!(parse_size("3"), Ok(SizeTier::Large));
//! ```

use crate::catalog::Catalog;
use crate::error::ValidationError;
use crate::order::{Quantity, SizeTier};
use crate::MAX_LINE_QUANTITY;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Selections
// =============================================================================

/// Outcome of the main menu prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// 0-based product index.
    Product(usize),
    /// The exit sentinel: stop ordering.
    Exit,
}

/// Outcome of one add-on round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOnChoice {
    /// 0-based add-on index.
    Select(usize),
    /// `0` was entered: the line item has all its add-ons.
    Finish,
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Parses a whole number, naming `field` in the rejection.
pub fn parse_whole_number(field: &str, raw: &str) -> ValidationResult<i64> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    raw.parse::<i64>().map_err(|_| ValidationError::NotANumber {
        field: field.to_string(),
    })
}

/// Validates the main menu selection.
///
/// ## Rules
/// - `exit_choice` ends ordering
/// - `1..=product_count` selects product `n - 1`
/// - anything else is rejected
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  "Select an item by number or enter 6 to exit: "                        │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  parse_menu_choice(raw) ← THIS FUNCTION                                 │
/// │       │                                                                 │
/// │       ├── "abc"  → NotANumber, ask again                                │
/// │       ├── "9"    → OutOfRange 1..4, ask again                           │
/// │       ├── "6"    → Exit                                                 │
/// │       └── "1"    → Product(0), go on to size                            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn parse_menu_choice(raw: &str, catalog: &Catalog, exit_choice: u32) -> ValidationResult<MenuChoice> {
    let choice = parse_whole_number("choice", raw)?;

    if choice == i64::from(exit_choice) {
        return Ok(MenuChoice::Exit);
    }

    let count = catalog.product_count() as i64;
    if (1..=count).contains(&choice) {
        return Ok(MenuChoice::Product((choice - 1) as usize));
    }

    Err(ValidationError::OutOfRange {
        field: "choice".to_string(),
        min: 1,
        max: count,
    })
}

/// Validates a size code (`1` Small, `2` Medium, `3` Large).
pub fn parse_size(raw: &str) -> ValidationResult<SizeTier> {
    let code = parse_whole_number("size", raw)?;

    SizeTier::from_code(code).ok_or_else(|| ValidationError::OutOfRange {
        field: "size".to_string(),
        min: 1,
        max: 3,
    })
}

/// Validates a line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_LINE_QUANTITY (999)
pub fn parse_quantity(raw: &str) -> ValidationResult<Quantity> {
    let qty = parse_whole_number("quantity", raw)?;

    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    let qty = u32::try_from(qty)
        .ok()
        .filter(|&q| q <= MAX_LINE_QUANTITY)
        .ok_or_else(|| ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: i64::from(MAX_LINE_QUANTITY),
        })?;

    Quantity::new(qty)
}

/// Validates one add-on round: `0` finishes, `1..=add_on_count` selects.
///
/// The five-add-on cap is enforced by `AddOnSelection::push`, not here.
pub fn parse_add_on_choice(raw: &str, catalog: &Catalog) -> ValidationResult<AddOnChoice> {
    let choice = parse_whole_number("add-on choice", raw)?;

    if choice == 0 {
        return Ok(AddOnChoice::Finish);
    }

    let count = catalog.add_on_count() as i64;
    if (1..=count).contains(&choice) {
        return Ok(AddOnChoice::Select((choice - 1) as usize));
    }

    Err(ValidationError::OutOfRange {
        field: "add-on choice".to_string(),
        min: 0,
        max: count,
    })
}

// =============================================================================
// Contact Validators
// =============================================================================

/// Validates a customer name.
///
/// ## Rules
/// - Must not be empty
/// - Must not contain a digit
///
/// ## Returns
/// The trimmed name.
pub fn validate_customer_name(raw: &str) -> ValidationResult<String> {
    let name = raw.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "name".to_string(),
            reason: "must not contain digits".to_string(),
        });
    }

    Ok(name.to_string())
}

/// Validates a phone number: exactly 10 ASCII digits.
///
/// ## Example
/// ```rust
/// use hearth_core::validation::validate_phone;
///
/// assert!(validate_phone("9876543210").is_ok());
/// assert!(validate_phone("12345").is_err());
/// assert!(validate_phone("98765-43210").is_err());
/// ```
pub fn validate_phone(raw: &str) -> ValidationResult<String> {
    let phone = raw.trim();

    if phone.len() != 10 || !phone.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: "phone".to_string(),
            reason: "must be exactly 10 digits".to_string(),
        });
    }

    Ok(phone.to_string())
}

/// Validates the shape of an email address.
///
/// ## Rules
/// Equivalent to `^[A-Za-z0-9+_.-]+@(.+)$`:
/// - Local part before the first `@`: one or more letters, digits, `+ _ . -`
/// - Anything non-empty after it (on a single line)
///
/// This is a shape check, not RFC 5322: `a@b` passes.
pub fn validate_email(raw: &str) -> ValidationResult<String> {
    let email = raw.trim();

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "email".to_string(),
        reason: reason.to_string(),
    };

    let (local, domain) = email.split_once('@').ok_or_else(|| invalid("must contain '@'"))?;

    if local.is_empty()
        || !local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '_' | '.' | '-'))
    {
        return Err(invalid(
            "part before '@' may only use letters, digits, '+', '_', '.', '-'",
        ));
    }

    if domain.is_empty() || domain.contains(['\n', '\r']) {
        return Err(invalid("must have something after '@'"));
    }

    Ok(email.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================
