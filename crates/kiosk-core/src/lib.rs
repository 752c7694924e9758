//! # kiosk-core: Pure Cart Logic for the Kiosk
//!
//! This crate is the **heart** of the kiosk cart. It contains the cart state
//! machine as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Kiosk Cart Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation Layer (kiosk-shell)                │   │
//! │  │    "add donuts" ──► CartAction::Add ──► summary printed         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ dispatch(action)                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ kiosk-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   money   │  │   cart    │  │  action   │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │  reduce   │  │   │
//! │  │   │  Catalog  │  │  format   │  │ CartStore │  │CartAction │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`format`] - Currency display options
//! - [`types`] - Domain types (Product, CartSummary)
//! - [`catalog`] - The static product list
//! - [`cart`] - Copy-on-write cart value
//! - [`action`] - Cart actions and the reducer
//! - [`store`] - Single-owner state cell driven by the reducer
//! - [`validation`] - Catalog validation rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use kiosk_core::{Catalog, CartStore};
//!
//! let catalog = Catalog::standard();
//! let ice_cream = catalog.get("ice cream").unwrap();
//! let donuts = catalog.get("donuts").unwrap();
//!
//! let mut store = CartStore::mount();
//! store.add(ice_cream);
//! store.add(donuts);
//! assert_eq!(store.count(), 2);
//! assert_eq!(store.total().cents(), 750);
//!
//! store.remove(ice_cream);
//! store.remove(ice_cream); // not in the cart any more: no-op
//! assert_eq!(store.count(), 1);
//! assert_eq!(store.total().cents(), 250);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod action;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod format;
pub mod money;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use action::{reduce, CartAction};
pub use cart::{get_total, Cart};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use format::CurrencyFormat;
pub use money::Money;
pub use store::CartStore;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name, in characters.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;

/// Largest number of fraction digits `Money` can represent.
///
/// Money is stored in cents, so anything finer than hundredths does not
/// exist to display.
pub const MONEY_FRACTION_DIGITS: u8 = 2;
