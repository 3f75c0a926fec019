//! Pinta weekly menu scraper.
//!
//! The weekly menu is free text in `div.tydenni-menu`: an `h3` per weekday,
//! followed by one `p` per dish with the price at the end of the line
//! (`Guláš, knedlík 125,-`). Drink add-ons are written the same way, so they
//! are told apart by price only.

use super::FragmentPolicy;
use crate::error::ParseError;
use crate::models::MenuItem;
use crate::utils::{element_text, header_text, split_name_and_price};
use crate::weekday::select_day_section;
use scraper::Html;
use tracing::debug;

pub const NAME: &str = "Pinta";
pub const MENU_URL: &str = "https://www.restauracepinta.cz/tydenni-menu";
pub const FRAGMENT_POLICY: FragmentPolicy = FragmentPolicy::Skip;

/// Cheaper lines are drinks or extras, not meals.
pub const MIN_MEAL_PRICE: i32 = 60;

selector!(MENU_LINES = "div.tydenni-menu h3, div.tydenni-menu p");

pub fn parse_menu(html: &str, today: usize) -> Result<Vec<MenuItem>, ParseError> {
    let document = Html::parse_document(html);
    let lines = document.select(&MENU_LINES);

    let header_of = |line: &scraper::ElementRef<'_>| {
        if line.value().name() == "h3" {
            header_text(*line)
        } else {
            String::new()
        }
    };

    let mut menu = Vec::new();
    for line in select_day_section(lines, header_of, today) {
        let text = element_text(line);
        let Some((name, price)) = split_name_and_price(&text) else {
            debug!(line = %text, "Pinta line without a price");
            continue;
        };
        if price < MIN_MEAL_PRICE {
            continue;
        }
        menu.push(MenuItem::new(name, price));
    }

    Ok(menu)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <div class="tydenni-menu">
          <h3>Úterý</h3>
          <p>Hovězí vývar s nudlemi 45,-</p>
          <p>Smažený sýr, hranolky, tatarka 159,-</p>
          <h3>Středa</h3>
          <p>Polévka: Česnečka 45 Kč</p>
          <p>Vepřová pečeně, zelí, knedlík 149,-</p>
          <p>Malé pivo k menu 35,-</p>
          <p>Dezert dle denní nabídky</p>
          <p>Kuřecí steak s grilovanou zeleninou 169 Kč</p>
          <h3>Čtvrtek</h3>
          <p>Rajská omáčka, hovězí, knedlík 155,-</p>
        </div>
    "#;

    #[test]
    fn test_parse_menu_wednesday_with_price_floor() {
        let menu = parse_menu(PAGE, 2).unwrap();
        assert_eq!(
            menu,
            vec![
                MenuItem::new("Vepřová pečeně, zelí, knedlík", 149),
                MenuItem::new("Kuřecí steak s grilovanou zeleninou", 169),
            ]
        );
    }

    #[test]
    fn test_every_kept_item_meets_the_floor() {
        for day in 0..7 {
            for item in parse_menu(PAGE, day).unwrap() {
                assert!(item.price >= MIN_MEAL_PRICE, "{item:?}");
            }
        }
    }

    #[test]
    fn test_weekday_text_in_paragraph_is_not_a_header() {
        let page = r#"
            <div class="tydenni-menu">
              <h3>Pondělí</h3>
              <p>Pátek</p>
              <p>Kuře na paprice 139,-</p>
            </div>
        "#;
        let menu = parse_menu(page, 0).unwrap();
        assert_eq!(menu, vec![MenuItem::new("Kuře na paprice", 139)]);
    }
}
