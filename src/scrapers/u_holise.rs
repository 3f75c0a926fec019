//! U Holise weekly menu scraper.
//!
//! An old site: the page is windows-1250 regardless of what the server
//! declares, so it is fetched with encoding detection. The week is a flat
//! list of `p` elements in `div.obsah`. Day headers are bold-only lines that
//! carry the date (`<b>Pondělí 14. 10.</b>`) and dishes are numbered
//! (`1. Svíčková 139 Kč`).

use super::FragmentPolicy;
use crate::error::ParseError;
use crate::models::MenuItem;
use crate::utils::{element_text, header_text, normalize_ws, split_name_and_price};
use crate::weekday::select_day_section;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html};
use tracing::debug;

pub const NAME: &str = "U Holise";
pub const MENU_URL: &str = "http://www.uholise.cz/denni-menu.htm";
pub const FRAGMENT_POLICY: FragmentPolicy = FragmentPolicy::Skip;

/// Trailing `14. 10.` / `14.10.2024` date on a day header.
static HEADER_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s*\d{1,2}\.\s*\d{1,2}\.(\s*\d{4})?\s*$").expect("header date regex should be valid")
});

/// Leading `1.` / `2)` dish number.
static ORDINAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\s*[.)]\s*").expect("ordinal regex should be valid"));

selector!(LINES = "div.obsah p");
selector!(BOLD = "b, strong");

pub fn parse_menu(html: &str, today: usize) -> Result<Vec<MenuItem>, ParseError> {
    let document = Html::parse_document(html);
    let header_of = |line: &ElementRef<'_>| {
        bold_header(*line)
            .map(|text| strip_header_date(&text))
            .unwrap_or_default()
    };

    let mut menu = Vec::new();
    for line in select_day_section(document.select(&LINES), header_of, today) {
        let text = element_text(line);
        let text = ORDINAL_RE.replace(&text, "");
        let Some((name, price)) = split_name_and_price(&text) else {
            debug!(line = %text, "U Holise line without a price");
            continue;
        };
        menu.push(MenuItem::new(name, price));
    }

    Ok(menu)
}

/// Text of a line written entirely in bold, `None` for ordinary lines.
fn bold_header(line: ElementRef<'_>) -> Option<String> {
    let bold = normalize_ws(&line.select(&BOLD).flat_map(|b| b.text()).collect::<String>());
    (!bold.is_empty() && bold == header_text(line)).then_some(bold)
}

fn strip_header_date(text: &str) -> String {
    HEADER_DATE_RE.replace(text, "").into_owned()
}
