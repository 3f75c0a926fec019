//! Data models for scraped restaurants and their menus.
//!
//! - [`Restaurant`]: A named restaurant together with today's menu
//! - [`MenuItem`]: A single dish with its price in CZK
//!
//! Both are plain values built once per run and thrown away after the poll
//! has been posted.

use serde::{Deserialize, Serialize};

/// Price value used when no price could be found for a menu item.
///
/// This is not a real price. It is rendered as-is in the poll so that a
/// missing price is visible instead of looking like a free meal.
pub const PRICE_NOT_FOUND: i32 = -1;

/// A restaurant and the menu it serves today.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Restaurant {
    /// Display name used as the poll option header.
    pub name: String,
    /// Menu items in the order the source lists them.
    pub menu: Vec<MenuItem>,
}

impl Restaurant {
    pub fn new(name: impl Into<String>, menu: Vec<MenuItem>) -> Self {
        Self {
            name: name.into(),
            menu,
        }
    }
}

/// One dish offered by a restaurant.
///
/// # Fields
///
/// * `name` - The dish name, whitespace-normalized
/// * `price` - Price in CZK, or [`PRICE_NOT_FOUND`]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MenuItem {
    pub name: String,
    pub price: i32,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, price: i32) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Whether the source provided a usable price for this item.
    pub fn has_price(&self) -> bool {
        self.price != PRICE_NOT_FOUND
    }
}
