//! Restaurant menu scrapers.
//!
//! Every restaurant has its own submodule. Each one knows the page address,
//! how to find the menu in the markup and which rows to throw away. The
//! modules share only the primitives in [`crate::utils`] and
//! [`crate::weekday`].
//!
//! # Supported Sources
//!
//! | Source | Module | Day selection | Missing markup |
//! |--------|--------|---------------|----------------|
//! | Olive | [`olive`] | weekday rows in a table | abort |
//! | Rebel Wings | [`rebel_wings`] | one block per day | skip |
//! | Potrefená Husa | [`potrefena_husa`] | daily page | abort |
//! | Mahini | [`mahini`] | weekday rows in a table | skip |
//! | Zau Vegetarian | [`zau_vegetarian`] | static buffet, no page | - |
//! | Kozlovna | [`kozlovna`] | daily page | abort |
//! | Pinta | [`pinta`] | `h3` weekday headers | skip |
//! | Zlatá Kovadlina | [`zlata_kovadlina`] | daily page | skip |
//! | U Holise | [`u_holise`] | dated weekday paragraphs | skip |
//! | Pět Peněz | [`pet_penez`] | daily page | abort |
//!
//! # Common Shape
//!
//! Each module exports:
//! - `NAME`, `MENU_URL`: display name and page address
//! - `FRAGMENT_POLICY`: what to do when an expected element is missing
//! - `parse_menu(html, today)`: pure extraction from page text
//!
//! The reference day `today` is an index into
//! [`DAYS_OF_WEEK`](crate::weekday::DAYS_OF_WEEK) and is always passed in.

use crate::error::{ParseError, ScrapeError};
use crate::fetch::fetch_page;
use crate::models::{MenuItem, Restaurant};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info, instrument};

/// Declare a lazily compiled CSS selector.
macro_rules! selector {
    ($name:ident = $sel:literal) => {
        static $name: once_cell::sync::Lazy<scraper::Selector> =
            once_cell::sync::Lazy::new(|| {
                scraper::Selector::parse($sel).expect(concat!("invalid selector: ", $sel))
            });
    };
}

pub mod kozlovna;
pub mod mahini;
pub mod olive;
pub mod pet_penez;
pub mod pinta;
pub mod potrefena_husa;
pub mod rebel_wings;
pub mod u_holise;
pub mod zau_vegetarian;
pub mod zlata_kovadlina;

/// What a scraper does when an element it relies on is not in the page.
///
/// Restaurants are tuned one by one. Some pages are stable enough that a
/// missing element means the layout changed and the whole source should
/// fail loudly. Others routinely contain decoration rows that are simply
/// not menu items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentPolicy {
    /// Fail the whole source with [`ParseError::MissingFragment`].
    Abort,
    /// Drop the affected row and continue.
    Skip,
}

impl FragmentPolicy {
    /// Apply the policy to a lookup result.
    ///
    /// Returns `Ok(Some(_))` when the element was found, `Ok(None)` when it is
    /// missing and the row should be skipped, and an error when it is missing
    /// and the source should abort.
    pub fn require<T>(
        self,
        source_name: &'static str,
        fragment: &'static str,
        found: Option<T>,
    ) -> Result<Option<T>, ParseError> {
        match (found, self) {
            (Some(found), _) => Ok(Some(found)),
            (None, FragmentPolicy::Skip) => {
                debug!(source = source_name, fragment, "Skipping row without expected element");
                Ok(None)
            }
            (None, FragmentPolicy::Abort) => Err(ParseError::MissingFragment {
                source_name,
                fragment,
            }),
        }
    }
}

/// A restaurant the poll can include.
///
/// The set of restaurants is closed, so dispatch is a plain `match`. The
/// order of a `Vec<Source>` is the order of the poll options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Source {
    Olive,
    RebelWings,
    PotrefenaHusa,
    Mahini,
    ZauVegetarian,
    Kozlovna,
    Pinta,
    ZlataKovadlina,
    UHolise,
    PetPenez,
}

impl Source {
    /// Every known restaurant.
    pub const ALL: [Source; 10] = [
        Source::Olive,
        Source::RebelWings,
        Source::PotrefenaHusa,
        Source::Mahini,
        Source::ZauVegetarian,
        Source::Kozlovna,
        Source::Pinta,
        Source::ZlataKovadlina,
        Source::UHolise,
        Source::PetPenez,
    ];

    /// Restaurants polled when the configuration does not list any.
    pub const DEFAULT: [Source; 7] = [
        Source::Mahini,
        Source::ZauVegetarian,
        Source::Kozlovna,
        Source::Pinta,
        Source::ZlataKovadlina,
        Source::UHolise,
        Source::PetPenez,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Source::Olive => olive::NAME,
            Source::RebelWings => rebel_wings::NAME,
            Source::PotrefenaHusa => potrefena_husa::NAME,
            Source::Mahini => mahini::NAME,
            Source::ZauVegetarian => zau_vegetarian::NAME,
            Source::Kozlovna => kozlovna::NAME,
            Source::Pinta => pinta::NAME,
            Source::ZlataKovadlina => zlata_kovadlina::NAME,
            Source::UHolise => u_holise::NAME,
            Source::PetPenez => pet_penez::NAME,
        }
    }

    /// Page to download, or `None` for restaurants with a fixed menu.
    pub fn menu_url(self) -> Option<&'static str> {
        match self {
            Source::Olive => Some(olive::MENU_URL),
            Source::RebelWings => Some(rebel_wings::MENU_URL),
            Source::PotrefenaHusa => Some(potrefena_husa::MENU_URL),
            Source::Mahini => Some(mahini::MENU_URL),
            Source::ZauVegetarian => None,
            Source::Kozlovna => Some(kozlovna::MENU_URL),
            Source::Pinta => Some(pinta::MENU_URL),
            Source::ZlataKovadlina => Some(zlata_kovadlina::MENU_URL),
            Source::UHolise => Some(u_holise::MENU_URL),
            Source::PetPenez => Some(pet_penez::MENU_URL),
        }
    }

    /// Whether the page must be decoded with a detected charset.
    pub fn override_encoding(self) -> bool {
        matches!(self, Source::UHolise)
    }

    pub fn fragment_policy(self) -> FragmentPolicy {
        match self {
            Source::Olive => olive::FRAGMENT_POLICY,
            Source::RebelWings => rebel_wings::FRAGMENT_POLICY,
            Source::PotrefenaHusa => potrefena_husa::FRAGMENT_POLICY,
            Source::Mahini => mahini::FRAGMENT_POLICY,
            Source::ZauVegetarian => zau_vegetarian::FRAGMENT_POLICY,
            Source::Kozlovna => kozlovna::FRAGMENT_POLICY,
            Source::Pinta => pinta::FRAGMENT_POLICY,
            Source::ZlataKovadlina => zlata_kovadlina::FRAGMENT_POLICY,
            Source::UHolise => u_holise::FRAGMENT_POLICY,
            Source::PetPenez => pet_penez::FRAGMENT_POLICY,
        }
    }

    /// Extract today's menu from the page text.
    ///
    /// Pure: the same page and day always give the same items.
    pub fn extract(self, page: &str, today: usize) -> Result<Vec<MenuItem>, ParseError> {
        match self {
            Source::Olive => olive::parse_menu(page, today),
            Source::RebelWings => rebel_wings::parse_menu(page, today),
            Source::PotrefenaHusa => potrefena_husa::parse_menu(page),
            Source::Mahini => mahini::parse_menu(page, today),
            Source::ZauVegetarian => Ok(zau_vegetarian::menu()),
            Source::Kozlovna => kozlovna::parse_menu(page),
            Source::Pinta => pinta::parse_menu(page, today),
            Source::ZlataKovadlina => zlata_kovadlina::parse_menu(page),
            Source::UHolise => u_holise::parse_menu(page, today),
            Source::PetPenez => pet_penez::parse_menu(page),
        }
    }

    /// Fetch the restaurant page and extract today's menu.
    pub async fn get_restaurant(self, client: &Client, today: usize) -> Result<Restaurant, ScrapeError> {
        self.get_restaurant_from(client, self.menu_url(), today).await
    }

    /// Like [`Source::get_restaurant`], reading the page from `url` instead of
    /// the built-in address. Sources with a static menu never fetch.
    #[instrument(level = "info", skip(self, client), fields(source = self.name()))]
    pub async fn get_restaurant_from(
        self,
        client: &Client,
        url: Option<&str>,
        today: usize,
    ) -> Result<Restaurant, ScrapeError> {
        let page = match url.filter(|_| self.menu_url().is_some()) {
            Some(url) => fetch_page(client, url, self.override_encoding())
                .await
                .map_err(|error| ScrapeError::Fetch {
                    source_name: self.name(),
                    error,
                })?,
            None => String::new(),
        };

        let menu = self.extract(&page, today)?;
        info!(items = menu.len(), "Scraped menu");
        Ok(Restaurant::new(self.name(), menu))
    }
}
