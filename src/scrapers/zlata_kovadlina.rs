//! Zlatá Kovadlina daily menu scraper.

use super::FragmentPolicy;
use crate::error::ParseError;
use crate::models::MenuItem;
use crate::utils::{element_text, parse_price};
use scraper::Html;

pub const NAME: &str = "Zlatá Kovadlina";
pub const MENU_URL: &str = "https://www.zlatakovadlina.cz/denni-menu";
pub const FRAGMENT_POLICY: FragmentPolicy = FragmentPolicy::Skip;

/// Rows that are notes or drinks rather than dishes.
const EXCLUDED_ROWS: &[&str] = &["Menu dne sestavuje", "Nápoj"];

selector!(ROWS = "table.denni-menu tr");
selector!(NAME_CELL = "td.nazev");
selector!(PRICE_CELL = "td.cena");

pub fn parse_menu(html: &str) -> Result<Vec<MenuItem>, ParseError> {
    let document = Html::parse_document(html);
    let mut menu = Vec::new();

    for row in document.select(&ROWS) {
        let Some(name_cell) =
            FRAGMENT_POLICY.require(NAME, "td.nazev", row.select(&NAME_CELL).next())?
        else {
            continue;
        };
        let Some(price_cell) =
            FRAGMENT_POLICY.require(NAME, "td.cena", row.select(&PRICE_CELL).next())?
        else {
            continue;
        };

        let name = element_text(name_cell);
        if name.is_empty() || EXCLUDED_ROWS.iter().any(|excluded| name.contains(excluded)) {
            continue;
        }
        menu.push(MenuItem::new(name, parse_price(&element_text(price_cell))));
    }

    Ok(menu)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_menu() {
        let page = r#"
            <table class="denni-menu">
              <tr><th colspan="2">Denní menu 16. 10.</th></tr>
              <tr><td class="nazev">Zelňačka s klobásou</td><td class="cena">49 Kč</td></tr>
              <tr><td class="nazev">Nápoj k menu: malinovka</td><td class="cena">25 Kč</td></tr>
              <tr><td class="nazev">Konfitované kachní stehno, červené zelí</td><td class="cena">189 Kč</td></tr>
              <tr><td class="nazev">Pstruh na másle</td><td class="cena">dle váhy</td></tr>
              <tr><td class="nazev" colspan="2">Menu dne sestavuje šéfkuchař</td></tr>
              <tr><td class="nazev">Menu dne sestavuje šéfkuchař</td><td class="cena"></td></tr>
            </table>
        "#;
        let menu = parse_menu(page).unwrap();
        assert_eq!(
            menu,
            vec![
                MenuItem::new("Zelňačka s klobásou", 49),
                MenuItem::new("Konfitované kachní stehno, červené zelí", 189),
                MenuItem::new("Pstruh na másle", -1),
            ]
        );
    }

    #[test]
    fn test_page_without_table_is_empty() {
        assert!(parse_menu("<p>Dnes zavřeno</p>").unwrap().is_empty());
    }
}
