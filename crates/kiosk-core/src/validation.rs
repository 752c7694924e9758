//! # Validation Module
//!
//! Input validation for catalog entries and display options.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Catalog construction (THIS MODULE)                           │
//! │  ├── name present, not too long, unique                                │
//! │  └── price non-negative, glyph present                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Shell call site                                              │
//! │  └── every product name resolved through the catalog                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart                                                         │
//! │  └── nothing to validate: add/remove are total                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kiosk_core::validation::{validate_product_name, validate_price_cents};
//!
//! validate_product_name("ice cream").unwrap();
//! validate_price_cents(500).unwrap();
//! ```

use crate::error::ValidationError;
use crate::types::Product;
use crate::{MAX_PRODUCT_NAME_LEN, MONEY_FRACTION_DIGITS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use kiosk_core::validation::validate_product_name;
///
/// assert!(validate_product_name("watermelon").is_ok());
/// assert!(validate_product_name("  ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a display glyph. Any non-blank string is accepted.
pub fn validate_glyph(glyph: &str) -> ValidationResult<()> {
    if glyph.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "glyph".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free samples)
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a pair of fraction digit counts for currency display.
///
/// ## Rules
/// - `max` is at most 2 (Money has cent precision)
/// - `min` is at most `max`
pub fn validate_fraction_digits(min: u8, max: u8) -> ValidationResult<()> {
    if max > MONEY_FRACTION_DIGITS {
        return Err(ValidationError::OutOfRange {
            field: "maximum fraction digits".to_string(),
            min: 0,
            max: MONEY_FRACTION_DIGITS as i64,
        });
    }

    if min > max {
        return Err(ValidationError::OutOfRange {
            field: "minimum fraction digits".to_string(),
            min: 0,
            max: max as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Entity Validators
// =============================================================================

/// Validates every field of a product.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_name(&product.name)?;
    validate_price_cents(product.price.cents())?;
    validate_glyph(&product.glyph)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("ice cream").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(200)).is_ok());
        assert!(validate_product_name(&"A".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_glyph() {
        assert!(validate_glyph("🍉").is_ok());
        assert!(validate_glyph("").is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(500).is_ok());
        assert_eq!(
            validate_price_cents(-1),
            Err(ValidationError::MustBeNonNegative {
                field: "price".to_string()
            })
        );
    }

    #[test]
    fn test_validate_fraction_digits() {
        assert!(validate_fraction_digits(2, 2).is_ok());
        assert!(validate_fraction_digits(0, 2).is_ok());
        assert!(validate_fraction_digits(0, 0).is_ok());
        assert!(validate_fraction_digits(0, 3).is_err());
        assert!(validate_fraction_digits(2, 1).is_err());
    }

    #[test]
    fn test_validate_product() {
        let ok = Product::new("donuts", Money::from_cents(250), "🍩");
        assert!(validate_product(&ok).is_ok());

        let negative = Product::new("donuts", Money::from_cents(-250), "🍩");
        assert!(validate_product(&negative).is_err());

        let blank_glyph = Product::new("donuts", Money::from_cents(250), "");
        assert!(validate_product(&blank_glyph).is_err());
    }
}
