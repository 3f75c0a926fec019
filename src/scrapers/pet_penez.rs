//! Pět Peněz daily menu scraper.
//!
//! Dishes are `div.jidlo` cards with `.nazev` and `.cena`. The same list
//! offers lunch boxes and small extras (bread, sauce) which are filtered out.

use super::FragmentPolicy;
use crate::error::ParseError;
use crate::models::MenuItem;
use crate::utils::{element_text, parse_price};
use scraper::Html;

pub const NAME: &str = "Pět Peněz";
pub const MENU_URL: &str = "https://www.petpenez.cz/denni-menu/";
pub const FRAGMENT_POLICY: FragmentPolicy = FragmentPolicy::Abort;

const EXCLUDED_MEALS: &[&str] = &["Menu box"];

/// Items with a known price below this are extras, not meals.
pub const MIN_MEAL_PRICE: i32 = 50;

selector!(MEALS = "div.jidla div.jidlo");
selector!(MEAL_NAME = ".nazev");
selector!(MEAL_PRICE = ".cena");

pub fn parse_menu(html: &str) -> Result<Vec<MenuItem>, ParseError> {
    let document = Html::parse_document(html);
    let mut menu = Vec::new();

    for meal in document.select(&MEALS) {
        let Some(name) = FRAGMENT_POLICY.require(NAME, ".nazev", meal.select(&MEAL_NAME).next())?
        else {
            continue;
        };
        let Some(price) = FRAGMENT_POLICY.require(NAME, ".cena", meal.select(&MEAL_PRICE).next())?
        else {
            continue;
        };

        let item = MenuItem::new(element_text(name), parse_price(&element_text(price)));
        if item.name.is_empty() {
            continue;
        }
        if EXCLUDED_MEALS.iter().any(|excluded| item.name.starts_with(excluded)) {
            continue;
        }
        if item.has_price() && item.price < MIN_MEAL_PRICE {
            continue;
        }
        menu.push(item);
    }

    Ok(menu)
}
