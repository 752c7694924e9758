//! # Cart
//!
//! The ordered list of products a customer has picked.
//!
//! ## Copy-on-Write
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  before             operation                  after (new value)        │
//! │  ──────             ─────────                  ─────────────────        │
//! │                                                                         │
//! │  [🍦]        ──────► add(🍩) ──────────────────► [🍦, 🍩]              │
//! │                                                                         │
//! │  [🍦, 🍩, 🍦] ─────► remove(🍦) ───────────────► [🍩, 🍦]              │
//! │                      (first match by name only)                        │
//! │                                                                         │
//! │  [🍩]        ──────► remove(🍦) ───────────────► [🍩]                   │
//! │                      (not found: same cart back)                       │
//! │                                                                         │
//! │  NOTE: `before` is never touched. Every operation returns a new Cart.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines keep insertion order
//! - Adding the same product twice creates two lines (no quantity field)
//! - `remove` deletes at most one line, and only one whose name matches

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{CartSummary, Product};

/// The shopping cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<Product>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { lines: Vec::new() }
    }

    /// Returns a new cart with `product` appended at the end.
    ///
    /// ## Behavior
    /// - Always succeeds
    /// - Duplicates are kept as separate lines
    #[must_use]
    pub fn add(&self, product: &Product) -> Cart {
        let mut lines = Vec::with_capacity(self.lines.len() + 1);
        lines.extend_from_slice(&self.lines);
        lines.push(product.clone());
        Cart { lines }
    }

    /// Returns a new cart without the first line named `product.name`.
    ///
    /// ## Behavior
    /// - Found at index i: that line is dropped, the rest keep their order
    /// - Not found: an identical cart comes back, nothing else is removed
    #[must_use]
    pub fn remove(&self, product: &Product) -> Cart {
        match self.position_of(product) {
            Some(index) => {
                let mut lines = self.lines.clone();
                lines.remove(index);
                Cart { lines }
            }
            None => self.clone(),
        }
    }

    /// Index of the first line sharing `product`'s name.
    pub fn position_of(&self, product: &Product) -> Option<usize> {
        self.lines.iter().position(|line| line.same_name(product))
    }

    /// Whether any line shares `product`'s name.
    pub fn contains(&self, product: &Product) -> bool {
        self.position_of(product).is_some()
    }

    /// Sum of the line prices.
    pub fn total(&self) -> Money {
        self.lines.iter().map(|line| line.price).sum()
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[Product] {
        &self.lines
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.lines.iter()
    }
}

/// Sum of the prices of every line in `cart`.
///
/// Free-function form of [`Cart::total`] for call sites that only hold a
/// cart reference.
pub fn get_total(cart: &Cart) -> Money {
    cart.total()
}

impl FromIterator<Product> for Cart {
    fn from_iter<I: IntoIterator<Item = Product>>(iter: I) -> Self {
        Cart {
            lines: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        CartSummary {
            item_count: cart.len(),
            total: cart.total(),
            items: cart.lines.clone(),
        }
    }
}
