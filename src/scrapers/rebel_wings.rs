//! Rebel Wings weekly menu scraper.
//!
//! The weekly menu is split into `div.foodlist` blocks, one per day, each
//! titled with an `h2` like `Středa / Wednesday`. Some blocks are not days at
//! all (the free tap water note, the burger of the week) and are skipped by
//! their header.

use super::FragmentPolicy;
use crate::error::ParseError;
use crate::models::MenuItem;
use crate::utils::{element_text, header_text, parse_price};
use crate::weekday::day_from_header;
use scraper::Html;

pub const NAME: &str = "Rebel Wings";
pub const MENU_URL: &str = "http://www.rebelwings.cz/#weeklymenu";
pub const FRAGMENT_POLICY: FragmentPolicy = FragmentPolicy::Skip;

/// Lowercase header fragments of blocks that are not a day's menu.
const SKIPPED_HEADERS: &[&str] = &["acqua comunale", "hit týdne"];

selector!(FOODLIST = "div.foodlist");
selector!(HEADER = "h2");
selector!(FOOD_NAME = "div.foodname");
selector!(FOOD_PRICE = "div.foodprice");

pub fn parse_menu(html: &str, today: usize) -> Result<Vec<MenuItem>, ParseError> {
    let document = Html::parse_document(html);
    let mut menu = Vec::new();

    for block in document.select(&FOODLIST) {
        let Some(header) = FRAGMENT_POLICY.require(NAME, "h2", block.select(&HEADER).next())? else {
            continue;
        };

        let title = header_text(header).to_lowercase();
        if SKIPPED_HEADERS.iter().any(|skipped| title.contains(skipped)) {
            continue;
        }

        if day_of_header(&title)? != Some(today) {
            continue;
        }

        let names = block.select(&FOOD_NAME);
        let prices = block.select(&FOOD_PRICE);
        for (name, price) in names.zip(prices) {
            let name = element_text(name);
            if name.is_empty() {
                continue;
            }
            menu.push(MenuItem::new(name, parse_price(&element_text(price))));
        }
    }

    Ok(menu)
}

/// Weekday named by the part of the header before the first `/`.
///
/// An empty leading part is not a day. A non-empty part that is not a
/// weekday name means a new kind of block appeared on the page, which is
/// reported rather than ignored.
fn day_of_header(header_text: &str) -> Result<Option<usize>, ParseError> {
    let day_part = header_text.split('/').next().unwrap_or_default().trim();
    if day_part.is_empty() {
        return Ok(None);
    }

    day_from_header(day_part)
        .map(Some)
        .ok_or_else(|| ParseError::UnknownDayHeader {
            source_name: NAME,
            header: day_part.to_string(),
        })
}
