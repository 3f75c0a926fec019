//! Runs every configured scraper and collects the results in poll order.
//!
//! Sources are fetched concurrently (bounded), but outcomes always come back
//! in the configured order, whichever site answers first. A failing source
//! only loses its own poll option unless `fail_fast` is set, in which case
//! the first failure in configured order aborts the run.

use crate::error::ScrapeError;
use crate::models::Restaurant;
use crate::scrapers::Source;
use futures::stream::{self, StreamExt};
use reqwest::Client;
use std::collections::HashMap;
use tracing::{error, info, instrument, warn};

/// How [`aggregate`] runs the scrapers.
#[derive(Debug, Clone)]
pub struct AggregateOptions {
    /// Upper bound on requests in flight. `1` fetches strictly one by one.
    pub max_concurrent_fetches: usize,
    /// Abort on the first failing source instead of skipping it.
    pub fail_fast: bool,
    /// Page addresses replacing a source's built-in URL.
    pub url_overrides: HashMap<Source, String>,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            max_concurrent_fetches: 4,
            fail_fast: false,
            url_overrides: HashMap::new(),
        }
    }
}

/// Result of scraping one source.
#[derive(Debug)]
pub struct SourceOutcome {
    pub source: Source,
    pub result: Result<Restaurant, ScrapeError>,
}

/// Scrape all `sources` for the weekday index `today`.
///
/// # Returns
///
/// One [`SourceOutcome`] per source, in the order of `sources`.
///
/// # Errors
///
/// Only with `fail_fast`: the error of the first failing source.
#[instrument(level = "info", skip_all, fields(sources = sources.len(), today = today))]
pub async fn aggregate(
    client: &Client,
    sources: &[Source],
    today: usize,
    options: &AggregateOptions,
) -> Result<Vec<SourceOutcome>, ScrapeError> {
    let mut pending = stream::iter(sources.iter().copied())
        .map(|source| async move {
            let result = match options.url_overrides.get(&source) {
                Some(url) => source.get_restaurant_from(client, Some(url.as_str()), today).await,
                None => source.get_restaurant(client, today).await,
            };
            SourceOutcome { source, result }
        })
        .buffered(options.max_concurrent_fetches.max(1));

    let mut outcomes = Vec::with_capacity(sources.len());
    while let Some(SourceOutcome { source, result }) = pending.next().await {
        match &result {
            Ok(restaurant) if restaurant.menu.is_empty() => {
                warn!(source = source.name(), "Scraper returned an empty menu");
            }
            Ok(_) => {}
            Err(e) => {
                error!(source = source.name(), error = %e, "Scraping failed");
            }
        }

        let result = match result {
            Err(e) if options.fail_fast => return Err(e),
            result => result,
        };
        outcomes.push(SourceOutcome { source, result });
    }

    let succeeded = outcomes.iter().filter(|o| o.result.is_ok()).count();
    info!(succeeded, total = outcomes.len(), "Scraped restaurants");
    Ok(outcomes)
}

/// Restaurants of the successful outcomes, in order.
pub fn successful_restaurants(outcomes: &[SourceOutcome]) -> Vec<&Restaurant> {
    outcomes
        .iter()
        .filter_map(|outcome| outcome.result.as_ref().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::make_client;
    use httpmock::prelude::*;
    use std::time::Duration;

    const KOZLOVNA_PAGE: &str = r#"<div class="daily-menu"><ul>
        <li><span class="meal">Guláš</span><span class="price">159 Kč</span></li>
    </ul></div>"#;

    const PET_PENEZ_PAGE: &str = r#"<div class="jidla">
        <div class="jidlo"><span class="nazev">Rizoto</span><span class="cena">149 Kč</span></div>
    </div>"#;

    fn client() -> Client {
        make_client(Duration::from_secs(5)).unwrap()
    }

    fn options(server: &MockServer, max_concurrent_fetches: usize, fail_fast: bool) -> AggregateOptions {
        AggregateOptions {
            max_concurrent_fetches,
            fail_fast,
            url_overrides: HashMap::from([
                (Source::Kozlovna, server.url("/kozlovna")),
                (Source::PetPenez, server.url("/petpenez")),
            ]),
        }
    }

    #[tokio::test]
    async fn test_outcomes_follow_configured_order() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/kozlovna");
                then.status(200)
                    .delay(Duration::from_millis(300))
                    .body(KOZLOVNA_PAGE);
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/petpenez");
                then.status(200).body(PET_PENEZ_PAGE);
            })
            .await;

        let sources = [Source::Kozlovna, Source::ZauVegetarian, Source::PetPenez];
        let outcomes = aggregate(&client(), &sources, 0, &options(&server, 3, false))
            .await
            .unwrap();

        let order: Vec<Source> = outcomes.iter().map(|o| o.source).collect();
        assert_eq!(order, sources);

        let names: Vec<&str> = successful_restaurants(&outcomes)
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["Kozlovna", "Zau Vegetarian", "Pět Peněz"]);
    }

    #[tokio::test]
    async fn test_failed_source_is_isolated() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/kozlovna");
                then.status(500);
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/petpenez");
                then.status(200).body(PET_PENEZ_PAGE);
            })
            .await;

        let sources = [Source::Kozlovna, Source::PetPenez];
        let outcomes = aggregate(&client(), &sources, 0, &options(&server, 1, false))
            .await
            .unwrap();

        assert_eq!(outcomes.len(), 2);
        assert!(matches!(
            outcomes[0].result,
            Err(ScrapeError::Fetch { source_name: "Kozlovna", .. })
        ));
        let restaurants = successful_restaurants(&outcomes);
        assert_eq!(restaurants.len(), 1);
        assert_eq!(restaurants[0].menu[0].name, "Rizoto");
    }

    #[tokio::test]
    async fn test_fail_fast_aborts_on_first_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/kozlovna");
                then.status(200).body("<p>nová stránka bez menu</p>");
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/petpenez");
                then.status(200).body(PET_PENEZ_PAGE);
            })
            .await;

        let sources = [Source::PetPenez, Source::Kozlovna];
        let err = aggregate(&client(), &sources, 0, &options(&server, 2, true))
            .await
            .unwrap_err();

        assert!(matches!(err, ScrapeError::Parse(_)));
    }
}
