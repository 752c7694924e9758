//! # Catalog
//!
//! The static, read-only list of products the kiosk sells.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  process start ──► Catalog::standard() ──► shared read-only            │
//! │                                              │                          │
//! │                                              ├──► listed by the shell   │
//! │                                              └──► get("donuts") ──► add │
//! │                                                                         │
//! │  Never mutated, never dropped before the shell exits.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart itself does not check that a product came from here. Call sites
//! resolve names through [`Catalog::get`] before dispatching, which is what
//! keeps foreign products out of the cart.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::Product;
use crate::validation::validate_product;

/// An ordered, validated list of products keyed by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, validating every entry.
    ///
    /// ## Errors
    /// - `Validation(Required | TooLong)` for a bad name or blank glyph
    /// - `Validation(MustBeNonNegative)` for a negative price
    /// - `Validation(Duplicate)` when two products share a name
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());

        for product in &products {
            validate_product(product)?;

            if !seen.insert(product.name.as_str()) {
                return Err(ValidationError::Duplicate {
                    field: "name".to_string(),
                    value: product.name.clone(),
                }
                .into());
            }
        }

        Ok(Catalog { products })
    }

    /// The kiosk's built-in product list.
    ///
    /// | Glyph | Name       | Price |
    /// |-------|------------|-------|
    /// | 🍦    | ice cream  | 5.00  |
    /// | 🍩    | donuts     | 2.50  |
    /// | 🍉    | watermelon | 4.00  |
    pub fn standard() -> Self {
        Catalog {
            products: vec![
                Product::new("ice cream", Money::from_cents(500), "🍦"),
                Product::new("donuts", Money::from_cents(250), "🍩"),
                Product::new("watermelon", Money::from_cents(400), "🍉"),
            ],
        }
    }

    /// Looks up a product by exact name.
    ///
    /// Surrounding whitespace in `name` is ignored.
    pub fn get(&self, name: &str) -> CoreResult<&Product> {
        let name = name.trim();
        self.products
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| CoreError::ProductNotFound(name.to_string()))
    }

    /// Products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
