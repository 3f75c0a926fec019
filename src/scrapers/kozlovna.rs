//! Kozlovna daily menu scraper.
//!
//! The daily menu is a list in `div.daily-menu`, every `li` holding a
//! `span.meal` and a `span.price`. The list also advertises drinks, which are
//! filtered out by name.

use super::FragmentPolicy;
use crate::error::ParseError;
use crate::models::MenuItem;
use crate::utils::{element_text, parse_price};
use scraper::Html;

pub const NAME: &str = "Kozlovna";
pub const MENU_URL: &str = "https://www.kozlovna.cz/denni-menu/";
pub const FRAGMENT_POLICY: FragmentPolicy = FragmentPolicy::Abort;

/// Lowercase name fragments of beverages listed among the dishes.
const EXCLUDED_BEVERAGES: &[&str] = &["pivo", "káva", "limonáda", "čaj"];

selector!(DAILY_MENU = "div.daily-menu");
selector!(ITEMS = "li");
selector!(MEAL = "span.meal");
selector!(PRICE = "span.price");

pub fn parse_menu(html: &str) -> Result<Vec<MenuItem>, ParseError> {
    let document = Html::parse_document(html);
    let Some(daily_menu) =
        FRAGMENT_POLICY.require(NAME, "div.daily-menu", document.select(&DAILY_MENU).next())?
    else {
        return Ok(Vec::new());
    };

    let mut menu = Vec::new();
    for item in daily_menu.select(&ITEMS) {
        let Some(meal) = FRAGMENT_POLICY.require(NAME, "span.meal", item.select(&MEAL).next())? else {
            continue;
        };
        let name = element_text(meal);
        if name.is_empty() || is_beverage(&name) {
            continue;
        }

        let Some(price) = FRAGMENT_POLICY.require(NAME, "span.price", item.select(&PRICE).next())?
        else {
            continue;
        };
        menu.push(MenuItem::new(name, parse_price(&element_text(price))));
    }

    Ok(menu)
}

fn is_beverage(name: &str) -> bool {
    let name = name.to_lowercase();
    EXCLUDED_BEVERAGES.iter().any(|beverage| name.contains(beverage))
}
