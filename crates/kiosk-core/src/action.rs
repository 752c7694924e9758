//! # Cart Actions
//!
//! The two-case action type and the pure reducer that folds it into a cart.
//!
//! ## Reducer Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   (current: &Cart, action: &CartAction) ──► reduce() ──► next: Cart    │
//! │                                                                         │
//! │   Add { product }      ──► current.add(product)                        │
//! │   Remove { product }   ──► current.remove(product)                     │
//! │   Unknown              ──► current.clone()                             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Shape
//! ```json
//! { "type": "add", "product": { "name": "donuts", "price": 250, "glyph": "🍩" } }
//! ```
//! Any other `type` value deserializes to [`CartAction::Unknown`], which the
//! reducer ignores.

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::types::Product;

/// Something the presentation layer asks the cart to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CartAction {
    /// Append a line for `product`.
    Add { product: Product },

    /// Drop the first line named `product.name`, if any.
    Remove { product: Product },

    /// Any action kind this version does not know about.
    #[serde(other)]
    Unknown,
}

impl CartAction {
    pub fn add(product: &Product) -> Self {
        CartAction::Add {
            product: product.clone(),
        }
    }

    pub fn remove(product: &Product) -> Self {
        CartAction::Remove {
            product: product.clone(),
        }
    }

    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            CartAction::Add { .. } => "add",
            CartAction::Remove { .. } => "remove",
            CartAction::Unknown => "unknown",
        }
    }

    /// The product the action is about, if it carries one.
    pub fn product(&self) -> Option<&Product> {
        match self {
            CartAction::Add { product } | CartAction::Remove { product } => Some(product),
            CartAction::Unknown => None,
        }
    }
}

/// Folds `action` into `state`, returning the next cart.
///
/// Pure: `state` is left as it was, and the same inputs always give the same
/// output. Never fails; an `Unknown` action returns `state` unchanged.
pub fn reduce(state: &Cart, action: &CartAction) -> Cart {
    match action {
        CartAction::Add { product } => state.add(product),
        CartAction::Remove { product } => state.remove(product),
        CartAction::Unknown => state.clone(),
    }
}
