//! Slack poll text.
//!
//! Every restaurant becomes one poll option: the name in bold followed by a
//! line per dish. The options are then quoted and appended to the poll
//! question in the format the `/poll` command expects.

use crate::models::Restaurant;
use itertools::Itertools;

/// Question the poll asks.
pub const POLL_QUESTION: &str = "Kam na oběd?";

/// Render one restaurant as a poll option.
///
/// Items keep the order the scraper produced. Missing prices are printed as
/// the sentinel value, e.g. `(-1,-)`.
///
/// # Examples
///
/// ```ignore
/// let r = Restaurant::new("X", vec![MenuItem::new("Soup", 45)]);
/// assert_eq!(format_poll_option(&r), "*X*\n- Soup *(45,-)*\n\n");
/// ```
pub fn format_poll_option(restaurant: &Restaurant) -> String {
    let meals = restaurant
        .menu
        .iter()
        .map(|meal| format!("- {} *({},-)*", meal.name, meal.price))
        .join("\n");
    format!("*{}*\n{}\n\n", restaurant.name, meals)
}

/// Build the `/poll` command text from rendered options.
///
/// Each option is wrapped in double quotes, so double quotes inside an
/// option are turned into single quotes.
pub fn poll_text(options: &[String]) -> String {
    let options = options
        .iter()
        .map(|option| format!("\"{}\"", option.replace('"', "'")))
        .join("\n");
    format!("\"{POLL_QUESTION}\" {options}")
}
