//! Output generation for the scraped menus.
//!
//! # Submodules
//!
//! - [`poll`]: Renders restaurants as Slack poll options and builds the poll text
//! - [`json`]: Writes the day's menus to a JSON file for other consumers

pub mod json;
pub mod poll;
