//! # Line Items & Pricing
//!
//! A line item is one priced entry in an order: one product, a size, a
//! quantity and up to five add-ons. It is priced once, at creation, and never
//! changes afterwards.
//!
//! ## Pricing Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  line_total = (base_price + Σ add_on.price) × quantity                  │
//! │                                                                         │
//! │  Cheese Burst 250.00 + Mushrooms 20.00 + Onions 30.00 = 300.00          │
//! │  300.00 × 2 = 600.00                                                    │
//! │                                                                         │
//! │  Size is recorded for the receipt but does NOT change the price.        │
//! │  A Large costs the same as a Small.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::catalog::{AddOn, Catalog, Product};
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::{MAX_ADD_ONS_PER_LINE, MAX_LINE_QUANTITY};

// =============================================================================
// Size Tier
// =============================================================================

/// Size of an ordered product, encoded `1..=3` at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeTier {
    Small,
    Medium,
    Large,
}

impl SizeTier {
    pub const ALL: [SizeTier; 3] = [SizeTier::Small, SizeTier::Medium, SizeTier::Large];

    /// Decodes the menu number (`1` Small, `2` Medium, `3` Large).
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(SizeTier::Small),
            2 => Some(SizeTier::Medium),
            3 => Some(SizeTier::Large),
            _ => None,
        }
    }

    pub fn code(&self) -> u8 {
        match self {
            SizeTier::Small => 1,
            SizeTier::Medium => 2,
            SizeTier::Large => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SizeTier::Small => "Small",
            SizeTier::Medium => "Medium",
            SizeTier::Large => "Large",
        }
    }
}

impl fmt::Display for SizeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Quantity
// =============================================================================

/// A line quantity in `1..=MAX_LINE_QUANTITY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// ## Example
    /// ```rust
    /// use hearth_core::Quantity;
    ///
    /// assert_eq!(Quantity::new(2).unwrap().get(), 2);
    /// assert!(Quantity::new(0).is_err());
    /// assert!(Quantity::new(1_000).is_err());
    /// ```
    pub fn new(qty: u32) -> Result<Self, ValidationError> {
        if qty > MAX_LINE_QUANTITY {
            return Err(ValidationError::OutOfRange {
                field: "quantity".to_string(),
                min: 1,
                max: i64::from(MAX_LINE_QUANTITY),
            });
        }

        NonZeroU32::new(qty)
            .map(Quantity)
            .ok_or_else(|| ValidationError::MustBePositive {
                field: "quantity".to_string(),
            })
    }

    #[inline]
    pub fn get(&self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<u32> for Quantity {
    type Error = ValidationError;

    fn try_from(qty: u32) -> Result<Self, Self::Error> {
        Quantity::new(qty)
    }
}

impl From<Quantity> for u32 {
    fn from(qty: Quantity) -> Self {
        qty.get()
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Add-On Selection
// =============================================================================

/// Add-ons collected for the line item being composed.
///
/// Holds at most [`MAX_ADD_ONS_PER_LINE`] entries. Duplicates are allowed:
/// double olives is two entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddOnSelection {
    add_ons: Vec<AddOn>,
}

impl AddOnSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an add-on, rejecting the sixth with `AddOnLimitReached`.
    ///
    /// A rejected push leaves the selection untouched.
    pub fn push(&mut self, add_on: AddOn) -> CoreResult<()> {
        if self.is_full() {
            return Err(CoreError::AddOnLimitReached {
                max: MAX_ADD_ONS_PER_LINE,
            });
        }
        self.add_ons.push(add_on);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.add_ons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.add_ons.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.add_ons.len() >= MAX_ADD_ONS_PER_LINE
    }

    pub fn as_slice(&self) -> &[AddOn] {
        &self.add_ons
    }

    /// Sum of the selected add-on prices for one unit.
    pub fn unit_price(&self) -> Money {
        self.add_ons.iter().map(|a| a.price).sum()
    }
}

// =============================================================================
// Line Pricer
// =============================================================================

/// Computes `(base_price + Σ add_on.price) × quantity`.
///
/// Exact integer arithmetic: nothing is rounded, so the receipt's two
/// decimals are the whole story. Prices are expected within
/// [`MAX_PRICE_CENTS`](crate::MAX_PRICE_CENTS), which every catalog enforces.
pub fn price_line(product: &Product, quantity: Quantity, add_ons: &[AddOn]) -> Money {
    let add_on_total: Money = add_ons.iter().map(|a| a.price).sum();
    (product.base_price + add_on_total).multiply_quantity(quantity.get())
}

// =============================================================================
// Line Item
// =============================================================================

/// One priced, immutable entry of an order.
///
/// Product and add-ons are held by value: the line keeps the names and
/// prices it was priced with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    product: Product,
    size: SizeTier,
    quantity: Quantity,
    add_ons: Vec<AddOn>,
    line_total: Money,
}

impl LineItem {
    /// Prices a line from already-resolved catalog records.
    pub fn new(product: Product, size: SizeTier, quantity: Quantity, add_ons: AddOnSelection) -> Self {
        let add_ons = add_ons.add_ons;
        let line_total = price_line(&product, quantity, &add_ons);
        LineItem {
            product,
            size,
            quantity,
            add_ons,
            line_total,
        }
    }

    /// Resolves 0-based catalog indices and prices the line.
    ///
    /// ## Errors
    /// - `OutOfRange` for a bad product or add-on index
    /// - `AddOnLimitReached` for more than five add-on indices
    pub fn from_catalog(
        catalog: &Catalog,
        product_index: usize,
        size: SizeTier,
        quantity: Quantity,
        add_on_indices: &[usize],
    ) -> CoreResult<Self> {
        let product = catalog.product(product_index)?.clone();

        let mut add_ons = AddOnSelection::new();
        for &index in add_on_indices {
            add_ons.push(catalog.add_on(index)?.clone())?;
        }

        Ok(LineItem::new(product, size, quantity, add_ons))
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn size(&self) -> SizeTier {
        self.size
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn add_ons(&self) -> &[AddOn] {
        &self.add_ons
    }

    pub fn line_total(&self) -> Money {
        self.line_total
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
