//! # Catalog
//!
//! Read-only reference data: the products the counter sells and the add-ons
//! that can be attached to them.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                            Catalog                                      │
//! │                                                                         │
//! │  products (index → Product)          add_ons (index → AddOn)           │
//! │  ─────────────────────────           ───────────────────────           │
//! │  0  Cheese Burst Pizza  250.00       0  Mushrooms      20.00           │
//! │  1  Veggie Pizza        150.00       1  Onions         30.00           │
//! │  2  Paneer Pizza        200.00       2  Bell Peppers   25.00           │
//! │  3  Pepperoni Pizza     400.00       3  Olives         10.00           │
//! │                                      4  Bacon          50.00           │
//! │                                                                         │
//! │  Indices are 0-based here; the menu shows them 1-based.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A catalog is fixed once built. Share it by reference (or `Arc`) across
//! any number of sessions.

use serde::{Deserialize, Serialize};

use crate::error::{CatalogSection, CoreError, CoreResult};
use crate::money::Money;
use crate::MAX_PRICE_CENTS;

// =============================================================================
// Product
// =============================================================================

/// A product the counter sells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Display name shown on the menu and receipt.
    pub name: String,

    /// Price of one unit before add-ons, in minor units.
    #[serde(rename = "base_price_cents")]
    pub base_price: Money,
}

impl Product {
    pub fn new(name: impl Into<String>, base_price: Money) -> Self {
        Product {
            name: name.into(),
            base_price,
        }
    }
}

// =============================================================================
// Add-On
// =============================================================================

/// An optional priced customization (a topping, an extra shot).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOn {
    pub name: String,

    #[serde(rename = "price_cents")]
    pub price: Money,
}

impl AddOn {
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        AddOn {
            name: name.into(),
            price,
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Ordered products and add-ons, validated on construction.
///
/// ## Invariants
/// - At least one product
/// - Every name is non-blank
/// - Every price is in `0..=MAX_PRICE_CENTS`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogDocument")]
pub struct Catalog {
    products: Vec<Product>,
    add_ons: Vec<AddOn>,
}

/// Unchecked wire shape of a catalog JSON document.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    products: Vec<Product>,
    #[serde(default)]
    add_ons: Vec<AddOn>,
}

impl TryFrom<CatalogDocument> for Catalog {
    type Error = CoreError;

    fn try_from(doc: CatalogDocument) -> CoreResult<Self> {
        Catalog::new(doc.products, doc.add_ons)
    }
}

impl Catalog {
    /// Builds a catalog, rejecting empty menus, blank names and negative prices.
    pub fn new(products: Vec<Product>, add_ons: Vec<AddOn>) -> CoreResult<Self> {
        if products.is_empty() {
            return Err(CoreError::InvalidCatalog {
                reason: "at least one product is required".to_string(),
            });
        }

        for (index, product) in products.iter().enumerate() {
            check_entry(CatalogSection::Products, index, &product.name, product.base_price)?;
        }
        for (index, add_on) in add_ons.iter().enumerate() {
            check_entry(CatalogSection::AddOns, index, &add_on.name, add_on.price)?;
        }

        Ok(Catalog { products, add_ons })
    }

    /// The built-in menu of the reference pizza counter.
    pub fn reference() -> Self {
        let products = [
            ("Cheese Burst Pizza", 250),
            ("Veggie Pizza", 150),
            ("Paneer Pizza", 200),
            ("Pepperoni Pizza", 400),
        ]
        .into_iter()
        .map(|(name, major)| Product::new(name, Money::from_major_minor(major, 0)))
        .collect();

        let add_ons = [
            ("Mushrooms", 20),
            ("Onions", 30),
            ("Bell Peppers", 25),
            ("Olives", 10),
            ("Bacon", 50),
        ]
        .into_iter()
        .map(|(name, major)| AddOn::new(name, Money::from_major_minor(major, 0)))
        .collect();

        Catalog { products, add_ons }
    }

    /// Parses and validates a catalog JSON document.
    ///
    /// ## Format
    /// ```json
    /// {
    ///   "products": [{ "name": "Veggie Pizza", "base_price_cents": 15000 }],
    ///   "add_ons":  [{ "name": "Olives", "price_cents": 1000 }]
    /// }
    /// ```
    pub fn from_json(text: &str) -> CoreResult<Self> {
        let doc: CatalogDocument =
            serde_json::from_str(text).map_err(|e| CoreError::InvalidCatalog {
                reason: e.to_string(),
            })?;
        Catalog::try_from(doc)
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn add_on_count(&self) -> usize {
        self.add_ons.len()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn add_ons(&self) -> &[AddOn] {
        &self.add_ons
    }

    /// Looks up a product by 0-based index.
    pub fn product(&self, index: usize) -> CoreResult<&Product> {
        self.products.get(index).ok_or(CoreError::OutOfRange {
            section: CatalogSection::Products,
            index,
            len: self.products.len(),
        })
    }

    /// Looks up an add-on by 0-based index.
    pub fn add_on(&self, index: usize) -> CoreResult<&AddOn> {
        self.add_ons.get(index).ok_or(CoreError::OutOfRange {
            section: CatalogSection::AddOns,
            index,
            len: self.add_ons.len(),
        })
    }

    pub fn base_price_of(&self, index: usize) -> CoreResult<Money> {
        self.product(index).map(|p| p.base_price)
    }

    pub fn add_on_price_of(&self, index: usize) -> CoreResult<Money> {
        self.add_on(index).map(|a| a.price)
    }
}

fn check_entry(section: CatalogSection, index: usize, name: &str, price: Money) -> CoreResult<()> {
    if name.trim().is_empty() {
        return Err(CoreError::InvalidCatalog {
            reason: format!("{section} #{} has a blank name", index + 1),
        });
    }
    if price.is_negative() {
        return Err(CoreError::InvalidCatalog {
            reason: format!("{section} '{name}' has a negative price"),
        });
    }
    if price.cents() > MAX_PRICE_CENTS {
        return Err(CoreError::InvalidCatalog {
            reason: format!(
                "{section} '{name}' costs more than {}",
                Money::from_cents(MAX_PRICE_CENTS)
            ),
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
