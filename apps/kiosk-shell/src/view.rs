//! # View
//!
//! Plain-text rendering of the cart, the catalog, and the help screen.
//!
//! ```text
//! Shopping Cart: 2 total items.
//! Total: 7.50
//! ```

use std::io::{self, Write};

use kiosk_core::{Catalog, CartSummary, CurrencyFormat};

/// Writes the two summary lines.
pub fn render_summary<W: Write>(
    out: &mut W,
    summary: &CartSummary,
    currency: &CurrencyFormat,
) -> io::Result<()> {
    writeln!(out, "Shopping Cart: {} total items.", summary.item_count)?;
    writeln!(out, "Total: {}", currency.format(summary.total))
}

/// Writes one line per product: glyph, name, price.
pub fn render_catalog<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    currency: &CurrencyFormat,
) -> io::Result<()> {
    let width = catalog
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0);

    for product in catalog {
        writeln!(
            out,
            "{} {:<width$}  {}",
            product.glyph,
            product.name,
            currency.format(product.price),
            width = width
        )?;
    }
    Ok(())
}

pub fn render_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  add <product>      put a product in the cart")?;
    writeln!(out, "  remove <product>   take one of that product out")?;
    writeln!(out, "  action <json>      dispatch a raw cart action")?;
    writeln!(out, "  show               print the cart summary")?;
    writeln!(out, "  catalog            list products")?;
    writeln!(out, "  config             print the active configuration")?;
    writeln!(out, "  quit               leave")
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiosk_core::Money;

    #[test]
    fn test_render_summary() {
        let summary = CartSummary {
            item_count: 2,
            total: Money::from_cents(750),
            items: Vec::new(),
        };
        let mut out = Vec::new();
        render_summary(&mut out, &summary, &CurrencyFormat::default()).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Shopping Cart: 2 total items.\nTotal: 7.50\n"
        );
    }

    #[test]
    fn test_render_catalog_aligns_names() {
        let mut out = Vec::new();
        render_catalog(&mut out, &Catalog::standard(), &CurrencyFormat::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "🍦 ice cream   5.00");
        assert_eq!(lines[1], "🍩 donuts      2.50");
        assert_eq!(lines[2], "🍉 watermelon  4.00");
    }

    #[test]
    fn test_render_help_mentions_every_command() {
        let mut out = Vec::new();
        render_help(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        for word in ["add", "remove", "action", "show", "catalog", "config", "quit"] {
            assert!(text.contains(word), "help is missing {}", word);
        }
    }
}
