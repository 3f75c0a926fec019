//! Mahini weekly lunch table scraper.
//!
//! A single table covers the week. Weekday rows have one cell with the day
//! name. Dish rows have three cells: course label, dish name and price.

use super::FragmentPolicy;
use crate::error::ParseError;
use crate::models::MenuItem;
use crate::utils::{element_text, parse_price};
use crate::weekday::select_day_section;
use scraper::{ElementRef, Html};

pub const NAME: &str = "Mahini";
pub const MENU_URL: &str = "http://www.mahini.cz/denni-menu/";
pub const FRAGMENT_POLICY: FragmentPolicy = FragmentPolicy::Skip;

const NAME_COLUMN: usize = 1;
const PRICE_COLUMN: usize = 2;

selector!(ROWS = "div.menu-table table tr");
selector!(CELLS = "td");

pub fn parse_menu(html: &str, today: usize) -> Result<Vec<MenuItem>, ParseError> {
    let document = Html::parse_document(html);
    let mut menu = Vec::new();

    for row in select_day_section(document.select(&ROWS), |row| element_text(*row), today) {
        let cells: Vec<ElementRef<'_>> = row.select(&CELLS).collect();
        let Some(price_cell) = FRAGMENT_POLICY.require(NAME, "td (price)", cells.get(PRICE_COLUMN))?
        else {
            continue;
        };

        let name = element_text(cells[NAME_COLUMN]);
        if name.is_empty() {
            continue;
        }
        menu.push(MenuItem::new(name, parse_price(&element_text(*price_cell))));
    }

    Ok(menu)
}
