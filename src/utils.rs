//! Text helpers shared by the menu scrapers.
//!
//! - Price extraction from free text (`120 Kč`, `85,-`)
//! - Whitespace normalization and element text collection
//! - Log truncation for long payloads

use crate::models::PRICE_NOT_FOUND;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::ElementRef;

/// A number followed by "Kč", or a number followed by the ",-" / ",–" suffix.
static PRICE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:(\d+)\s*[Kk][Čč])|(?:(\d+)\s*,[-–])").expect("price regex should be valid")
});

static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex should be valid"));

/// Extract a price in CZK from a text fragment.
///
/// The first price-looking token wins, whichever of the two notations it
/// uses.
///
/// # Returns
///
/// The amount, or [`PRICE_NOT_FOUND`] when there is no price in `text` or the
/// number does not fit.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(parse_price("120 Kč"), 120);
/// assert_eq!(parse_price("85,-"), 85);
/// assert_eq!(parse_price("zdarma"), -1);
/// ```
pub fn parse_price(text: &str) -> i32 {
    PRICE_RE
        .captures(text)
        .and_then(|caps| caps.iter().skip(1).flatten().next())
        .and_then(|m| m.as_str().parse::<i32>().ok())
        .unwrap_or(PRICE_NOT_FOUND)
}

/// Split a menu line like `"Svíčková na smetaně 139 Kč"` into name and price.
///
/// The name is everything before the price token, normalized. Returns `None`
/// when the line carries no price or nothing precedes it.
pub fn split_name_and_price(line: &str) -> Option<(String, i32)> {
    let caps = PRICE_RE.captures(line)?;
    let whole = caps.get(0)?;
    let price = caps
        .iter()
        .skip(1)
        .flatten()
        .next()
        .and_then(|m| m.as_str().parse::<i32>().ok())?;

    let name = normalize_ws(&line[..whole.start()]);
    let name = name.trim_end_matches([',', '-', '–', '.', ':']).trim_end();
    if name.is_empty() {
        return None;
    }
    Some((name.to_string(), price))
}

/// Collapse runs of whitespace into a single space and trim both ends.
pub fn normalize_ws(s: &str) -> String {
    WHITESPACE_RE.replace_all(s.trim(), " ").into_owned()
}

/// All text below `element`, whitespace-normalized.
pub fn element_text(element: ElementRef<'_>) -> String {
    normalize_ws(&element.text().collect::<Vec<_>>().join(" "))
}

/// Text of a header element, for matching against weekday names.
///
/// Text nodes are joined without separators, so a word split across inline
/// tags (`<b>S</b>tředa`) stays one word.
pub fn header_text(element: ElementRef<'_>) -> String {
    normalize_ws(&element.text().collect::<String>())
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to `max` bytes (backing off to a char boundary) with
/// an ellipsis and byte count appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    #[test]
    fn test_parse_price_koruna_suffix() {
        assert_eq!(parse_price("120 Kč"), 120);
        assert_eq!(parse_price("120Kč"), 120);
        assert_eq!(parse_price("Cena: 99 kč"), 99);
        assert_eq!(parse_price("145 KČ"), 145);
    }

    #[test]
    fn test_parse_price_dash_suffix() {
        assert_eq!(parse_price("85,-"), 85);
        assert_eq!(parse_price("85 ,–"), 85);
    }

    #[test]
    fn test_parse_price_no_match() {
        assert_eq!(parse_price("no price here"), -1);
        assert_eq!(parse_price(""), -1);
        assert_eq!(parse_price("150"), -1);
    }

    #[test]
    fn test_parse_price_first_match_wins() {
        assert_eq!(parse_price("Polévka 35,- / menu 140 Kč"), 35);
        assert_eq!(parse_price("0,3 l 35 Kč, 0,5 l 49,-"), 35);
    }

    #[test]
    fn test_parse_price_overflow_degrades_to_sentinel() {
        assert_eq!(parse_price("99999999999999 Kč"), -1);
    }

    #[test]
    fn test_split_name_and_price() {
        assert_eq!(
            split_name_and_price("Svíčková na smetaně   139 Kč"),
            Some(("Svíčková na smetaně".to_string(), 139))
        );
        assert_eq!(
            split_name_and_price("Guláš, 125,-"),
            Some(("Guláš".to_string(), 125))
        );
        assert_eq!(split_name_and_price("139 Kč"), None);
        assert_eq!(split_name_and_price("Bez ceny"), None);
    }

    #[test]
    fn test_normalize_ws() {
        assert_eq!(normalize_ws("  Hovězí \n\t vývar  "), "Hovězí vývar");
        assert_eq!(normalize_ws(""), "");
    }

    #[test]
    fn test_element_text_joins_nested_nodes() {
        let html = Html::parse_fragment("<div><b>Kuřecí</b>\n řízek <i>s bramborem</i></div>");
        let sel = Selector::parse("div").unwrap();
        let div = html.select(&sel).next().unwrap();
        assert_eq!(element_text(div), "Kuřecí řízek s bramborem");
    }

    #[test]
    fn test_header_text_keeps_split_words_whole() {
        let html = Html::parse_fragment("<h3> <b>S</b>tředa\n </h3>");
        let sel = Selector::parse("h3").unwrap();
        let h3 = html.select(&sel).next().unwrap();
        assert_eq!(header_text(h3), "Středa");
        assert_eq!(element_text(h3), "S tředa");
    }

    #[test]
    fn test_truncate_for_log() {
        assert_eq!(truncate_for_log("short", 100), "short");
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_respects_char_boundary() {
        let result = truncate_for_log("čččč", 3);
        assert!(result.starts_with('č'));
        assert!(result.contains("(+6 bytes)"));
    }
}
