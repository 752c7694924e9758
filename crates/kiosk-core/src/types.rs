//! # Domain Types
//!
//! Core domain types shared by the catalog, the cart, and the presentation
//! layer.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │    Product      │   │   CartSummary   │                              │
//! │  │  ─────────────  │   │  ─────────────  │                              │
//! │  │  name (key)     │   │  item_count     │                              │
//! │  │  price (Money)  │   │  total (Money)  │                              │
//! │  │  glyph          │   │  items          │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! A product has no id column: its `name` is the key. A cart line is a plain
//! copy of the product and has no identity of its own either.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product available at the kiosk.
///
/// Products are built once with the [`Catalog`](crate::catalog::Catalog)
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Display name; unique within a catalog.
    pub name: String,

    /// Unit price.
    pub price: Money,

    /// Glyph shown next to the product (🍦, 🍩, ...).
    pub glyph: String,
}

impl Product {
    /// Creates a product.
    pub fn new(name: impl Into<String>, price: Money, glyph: impl Into<String>) -> Self {
        Product {
            name: name.into(),
            price,
            glyph: glyph.into(),
        }
    }

    /// Whether this product and `other` share a name (the cart's match rule).
    #[inline]
    pub fn same_name(&self, other: &Product) -> bool {
        self.name == other.name
    }
}

// =============================================================================
// Cart Summary
// =============================================================================

/// Read-only view of the cart handed to the presentation layer.
///
/// Built with `CartSummary::from(&cart)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    /// Number of lines (duplicates counted separately).
    pub item_count: usize,

    /// Sum of line prices.
    pub total: Money,

    /// Lines in insertion order.
    pub items: Vec<Product>,
}

// =============================================================================
// Unit Tests
// =============================================================================
