//! Potrefená Husa daily offer scraper.
//!
//! The daily offer lives in `div.denninabidka` as three parallel lists: `h4`
//! dish names, `span.price` prices and `p` side dishes / details. They are
//! paired up by position.

use super::FragmentPolicy;
use crate::error::ParseError;
use crate::models::MenuItem;
use crate::utils::{element_text, parse_price};
use itertools::izip;
use scraper::Html;

pub const NAME: &str = "Potrefená Husa";
pub const MENU_URL: &str = "https://www.potrefena-husa.eu/";
pub const FRAGMENT_POLICY: FragmentPolicy = FragmentPolicy::Abort;

selector!(DAILY_OFFER = "div.denninabidka");
selector!(MEAL_NAME = "h4");
selector!(MEAL_PRICE = "span.price");
selector!(MEAL_DETAILS = "p");

pub fn parse_menu(html: &str) -> Result<Vec<MenuItem>, ParseError> {
    let document = Html::parse_document(html);
    let Some(offer) = FRAGMENT_POLICY.require(
        NAME,
        "div.denninabidka",
        document.select(&DAILY_OFFER).next(),
    )?
    else {
        return Ok(Vec::new());
    };

    let menu = izip!(
        offer.select(&MEAL_NAME),
        offer.select(&MEAL_PRICE),
        offer.select(&MEAL_DETAILS)
    )
    .filter_map(|(name, price, details)| {
        let name = element_text(name);
        if name.is_empty() {
            return None;
        }
        let full_name = format!("{name} {}", element_text(details));
        Some(MenuItem::new(full_name.trim(), parse_price(&element_text(price))))
    })
    .collect();

    Ok(menu)
}
