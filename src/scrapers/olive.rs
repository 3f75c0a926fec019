//! Olive Florentinum weekly menu scraper.
//!
//! The whole week is a single table. A row containing only a weekday name
//! opens that day's section, and each dish row has the name in `th` and the
//! price in `td`. Dish names are bilingual, e.g.
//! `Polévka: **Kulajda s houbami / Dill sour soup`, and only the Czech part
//! after `**` is kept.

use super::FragmentPolicy;
use crate::error::ParseError;
use crate::models::MenuItem;
use crate::utils::{element_text, header_text, normalize_ws, parse_price};
use crate::weekday::select_day_section;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::Html;

pub const NAME: &str = "Olive";
pub const MENU_URL: &str = "http://www.olivefood.cz/olive-florentinum/10/";
pub const FRAGMENT_POLICY: FragmentPolicy = FragmentPolicy::Abort;

/// Placeholder for dishes whose name is not in the `**name / translation` form.
const UNKNOWN_MEAL_NAME: &str = "N/A";

/// Rows advertising the neighbouring bar rather than a dish.
const IGNORED_MEALS: &[&str] = &["Denní nabídka jídel z Hummus a Gyros baru!"];

static MEAL_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^/]+)").expect("meal name regex should be valid"));

selector!(ROWS = "div#detail_content_block tr");
selector!(NAME_CELL = "th");
selector!(PRICE_CELL = "td");

pub fn parse_menu(html: &str, today: usize) -> Result<Vec<MenuItem>, ParseError> {
    let document = Html::parse_document(html);
    let rows = document.select(&ROWS);
    let mut menu = Vec::new();

    for row in select_day_section(rows, |row| header_text(*row), today) {
        let Some(name_cell) = FRAGMENT_POLICY.require(NAME, "th", row.select(&NAME_CELL).next())?
        else {
            continue;
        };

        let full_name = name_cell.text().collect::<String>();
        let name = MEAL_NAME_RE
            .captures(&full_name)
            .and_then(|caps| caps.get(1))
            .map(|m| normalize_ws(m.as_str()))
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNKNOWN_MEAL_NAME.to_string());

        if IGNORED_MEALS.contains(&name.as_str()) {
            continue;
        }

        let Some(price_cell) =
            FRAGMENT_POLICY.require(NAME, "td", row.select(&PRICE_CELL).next())?
        else {
            continue;
        };

        menu.push(MenuItem::new(name, parse_price(&element_text(price_cell))));
    }

    Ok(menu)
}
