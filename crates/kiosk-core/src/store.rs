//! # Cart Store
//!
//! Owns the current cart and replaces it through the reducer.
//!
//! ## Ownership
//! The store is the single writer. Mutation takes `&mut self`, so there is
//! no lock: the borrow checker already rules out a second writer. Readers
//! get `&Cart` or a [`CartSummary`].
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  mount() ──► empty cart                                                │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  dispatch(Add / Remove / Unknown) ──► cart = reduce(cart, action)      │
//! │     │          ▲                                                        │
//! │     └──────────┘  (one action at a time, each runs to completion)      │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  unmount() ──► final Cart handed back, nothing persisted               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::action::{reduce, CartAction};
use crate::cart::Cart;
use crate::money::Money;
use crate::types::{CartSummary, Product};

/// Single-owner state cell for the cart.
#[derive(Debug)]
pub struct CartStore {
    cart: Cart,
    mounted_at: DateTime<Utc>,
    dispatched: u64,
}

impl CartStore {
    /// Creates a store holding an empty cart.
    pub fn mount() -> Self {
        Self::from_cart(Cart::new())
    }

    /// Creates a store starting from an existing cart value.
    pub fn from_cart(cart: Cart) -> Self {
        let mounted_at = Utc::now();
        debug!(%mounted_at, lines = cart.len(), "cart store mounted");
        CartStore {
            cart,
            mounted_at,
            dispatched: 0,
        }
    }

    /// Applies `action` and returns the new cart.
    pub fn dispatch(&mut self, action: &CartAction) -> &Cart {
        let next = reduce(&self.cart, action);
        let changed = next != self.cart;
        self.dispatched += 1;

        match (action, changed) {
            (CartAction::Remove { product }, false) => {
                debug!(product = %product.name, "remove ignored, product not in cart");
            }
            (CartAction::Unknown, _) => {
                debug!("unknown cart action ignored");
            }
            _ => {
                debug!(
                    action = action.kind(),
                    product = action.product().map(|p| p.name.as_str()).unwrap_or_default(),
                    count = next.len(),
                    total = %next.total(),
                    "cart action applied"
                );
            }
        }

        self.cart = next;
        &self.cart
    }

    /// Dispatches `CartAction::Add`.
    pub fn add(&mut self, product: &Product) -> &Cart {
        self.dispatch(&CartAction::add(product))
    }

    /// Dispatches `CartAction::Remove`.
    pub fn remove(&mut self, product: &Product) -> &Cart {
        self.dispatch(&CartAction::remove(product))
    }

    /// Read-only view of the current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust
    /// use kiosk_core::{CartStore, CartSummary};
    ///
    /// let store = CartStore::mount();
    /// let summary = store.with_cart(|cart| CartSummary::from(cart));
    /// assert_eq!(summary.item_count, 0);
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        f(&self.cart)
    }

    /// Number of lines in the cart.
    pub fn count(&self) -> usize {
        self.cart.len()
    }

    /// Sum of line prices.
    pub fn total(&self) -> Money {
        self.cart.total()
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary::from(&self.cart)
    }

    pub fn mounted_at(&self) -> DateTime<Utc> {
        self.mounted_at
    }

    /// Number of actions dispatched since mount, no-ops included.
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    /// Consumes the store and returns the final cart.
    pub fn unmount(self) -> Cart {
        let open_for = Utc::now() - self.mounted_at;
        debug!(
            open_ms = open_for.num_milliseconds(),
            dispatched = self.dispatched,
            lines = self.cart.len(),
            "cart store unmounted"
        );
        self.cart
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::mount()
    }
}
