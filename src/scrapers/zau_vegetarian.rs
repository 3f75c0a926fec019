//! Zau Vegetarian buffet.
//!
//! Zau has no daily menu online. It runs a self-service buffet priced by
//! weight, which is always offered as one poll item.

use super::FragmentPolicy;
use crate::models::MenuItem;

pub const NAME: &str = "Zau Vegetarian";
pub const FRAGMENT_POLICY: FragmentPolicy = FragmentPolicy::Skip;

/// Buffet price per 100 g in CZK.
pub const BUFFET_PRICE_PER_100G: i32 = 29;

pub fn menu() -> Vec<MenuItem> {
    vec![MenuItem::new(
        "Vegetariánský bufet (cena za 100 g)",
        BUFFET_PRICE_PER_100G,
    )]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_is_single_buffet_item() {
        let menu = menu();
        assert_eq!(menu.len(), 1);
        assert_eq!(menu[0].price, BUFFET_PRICE_PER_100G);
        assert!(menu[0].name.contains("100 g"));
    }
}
