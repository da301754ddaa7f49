//! # Text Renderer
//!
//! Reflects cart state into text. The cart store knows nothing about this
//! module; it only hands out data and totals.
//!
//! ## Cart View
//! ```text
//! AndazLibas cart (3)
//! ----------------------------------------
//! Silk Kurta                        $24.99
//!   Size: M                    [-] 2 [+]
//! Dupatta                           $12.50
//!   Size:                      [-] 1 [+]
//! ----------------------------------------
//! Subtotal                          $62.48
//! Tax (8%)                           $5.00
//! Total                             $67.48
//! ```

use andaz_core::{Cart, CartTotals, SALES_TAX_RATE};
use andaz_store::CartObserver;
use tracing::info;

use crate::commands::cart::CartResponse;
use crate::state::ConfigState;

/// Width of the rendered block.
const WIDTH: usize = 40;

/// Message shown instead of line items when the cart has none.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";

/// Renders cart responses as plain text.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    config: ConfigState,
}

impl TextRenderer {
    pub fn new(config: ConfigState) -> Self {
        TextRenderer { config }
    }

    /// Full cart: header with badge, one block per line, then totals.
    pub fn render_cart(&self, cart: &CartResponse) -> String {
        let rule = "-".repeat(WIDTH);
        let mut lines = vec![
            format!("{} cart ({})", self.config.store_name, cart.totals.item_count),
            rule.clone(),
        ];

        if cart.items.is_empty() {
            lines.push(EMPTY_CART_MESSAGE.to_string());
        }

        for item in &cart.items {
            lines.push(self.row(&item.name, &self.config.format_currency(item.price)));
            lines.push(self.row(&format!("  Size: {}", item.size), &format!("[-] {} [+]", item.qty)));
        }

        lines.push(rule);
        lines.push(self.row("Subtotal", &self.config.format_currency(cart.totals.subtotal)));
        lines.push(self.row(
            &format!("Tax ({}%)", SALES_TAX_RATE.percentage()),
            &self.config.format_currency(cart.totals.tax),
        ));
        lines.push(self.row("Total", &self.config.format_currency(cart.totals.total)));

        lines.join("\n")
    }

    /// The header badge on its own.
    pub fn render_badge(&self, count: u64) -> String {
        count.to_string()
    }

    /// Left label, right-aligned value, padded to `WIDTH`.
    fn row(&self, label: &str, value: &str) -> String {
        let used = label.chars().count() + value.chars().count();
        let pad = WIDTH.saturating_sub(used).max(1);
        format!("{}{}{}", label, " ".repeat(pad), value)
    }
}

/// Keeps the header badge in sync with the stored cart.
///
/// Logs the new count whenever a mutation changes it.
#[derive(Debug, Default)]
pub struct BadgeObserver {
    last_count: Option<u64>,
}

impl BadgeObserver {
    pub fn last_count(&self) -> Option<u64> {
        self.last_count
    }
}

impl CartObserver for BadgeObserver {
    fn cart_changed(&mut self, _cart: &Cart, totals: &CartTotals) {
        if self.last_count != Some(totals.item_count) {
            info!(count = totals.item_count, "Cart badge updated");
            self.last_count = Some(totals.item_count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use andaz_core::{LineItem, Money};

    fn response(items: Vec<LineItem>) -> CartResponse {
        CartResponse::from(&Cart::from_items(items))
    }

    #[test]
    fn test_empty_cart() {
        let renderer = TextRenderer::new(ConfigState::default());
        let text = renderer.render_cart(&response(vec![]));

        assert!(text.starts_with("AndazLibas cart (0)"));
        assert!(text.contains(EMPTY_CART_MESSAGE));
        assert!(text.lines().last().unwrap().ends_with("$0.00"));
    }

    #[test]
    fn test_lines_and_totals() {
        let mut kurta =
            LineItem::new("a", "Silk Kurta", Money::from_cents(2499), "/img/a.jpg").with_size("M");
        kurta.qty = 2;
        let renderer = TextRenderer::new(ConfigState::default());
        let text = renderer.render_cart(&response(vec![kurta]));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "AndazLibas cart (2)");
        assert!(lines[2].starts_with("Silk Kurta"));
        assert!(lines[2].ends_with("$24.99"));
        assert!(lines[3].starts_with("  Size: M"));
        assert!(lines[3].ends_with("[-] 2 [+]"));
        assert!(lines[5].ends_with("$49.98"));
        assert!(lines[6].starts_with("Tax (8%)"));
        assert!(lines[6].ends_with("$4.00"));
        assert!(lines[7].ends_with("$53.98"));
        assert_eq!(lines[7].chars().count(), WIDTH);
    }

    #[test]
    fn test_badge_observer_tracks_count() {
        let mut badge = BadgeObserver::default();
        let cart = Cart::from_items(vec![LineItem::new("a", "Scarf", Money::from_cents(500), "")]);

        badge.cart_changed(&cart, &cart.totals());
        assert_eq!(badge.last_count(), Some(1));
    }

    #[test]
    fn test_render_badge() {
        let renderer = TextRenderer::new(ConfigState::default());
        assert_eq!(renderer.render_badge(7), "7");
    }
}
