//! # Lunch Poll
//!
//! Scrapes today's lunch menus of restaurants around the Prague office and
//! posts them to Slack as a `/poll`, one option per restaurant.
//!
//! ## Usage
//!
//! ```sh
//! lunch_poll --slack-token xoxp-... --slack-channel C0123456
//! lunch_poll --dry-run --date 2024-05-15 -j ./menus.json
//! ```
//!
//! ## Architecture
//!
//! 1. **Configuration**: CLI flags over an optional YAML file over defaults
//! 2. **Scraping**: Every configured restaurant is fetched and parsed for the
//!    reference weekday; results keep the configured order
//! 3. **Formatting**: Each restaurant becomes one poll option
//! 4. **Output**: Post the poll to Slack (or print it) and optionally write JSON

use clap::{Parser, ValueEnum};
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod aggregate;
mod cli;
mod config;
mod error;
mod fetch;
mod models;
mod outputs;
mod scrapers;
mod slack;
mod utils;
mod weekday;

use aggregate::{aggregate, successful_restaurants};
use cli::Cli;
use config::{Config, Settings};
use outputs::json::{LunchReport, write_report};
use outputs::poll::{format_poll_option, poll_text};
use scrapers::Source;
use weekday::{DAYS_OF_WEEK, reference_day};

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("lunch_poll starting up");

    let args = Cli::parse();
    debug!(?args.config, ?args.sources, ?args.date, dry_run = args.dry_run, "Parsed CLI arguments");

    if args.list_sources {
        for source in Source::ALL {
            println!(
                "{:<16} {:<18} {:<6} {}",
                source.to_possible_value().map(|v| v.get_name().to_string()).unwrap_or_default(),
                source.name(),
                format!("{:?}", source.fragment_policy()).to_lowercase(),
                source.menu_url().unwrap_or("(static menu)")
            );
        }
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => Config::load(path).await?,
        None => Config::default(),
    };
    let settings = Settings::resolve(&args, config)?;

    let (date, today) = reference_day(args.date);
    info!(%date, weekday = DAYS_OF_WEEK[today], sources = settings.sources.len(), "Scraping lunch menus");

    let client = fetch::make_client(settings.request_timeout)?;

    // ---- Scrape ----
    let outcomes = aggregate(&client, &settings.sources, today, &settings.aggregate_options()).await?;
    let restaurants = successful_restaurants(&outcomes);
    let poll_options: Vec<String> = restaurants.iter().map(|r| format_poll_option(r)).collect();

    // ---- JSON output ----
    if let Some(path) = &args.json_output {
        let report = LunchReport::new(date, &outcomes);
        if let Err(e) = write_report(&report, path).await {
            error!(%path, error = %e, "Failed to write JSON report");
        }
    }

    // ---- Poll ----
    if args.dry_run {
        println!("{}", poll_text(&poll_options));
    } else {
        let outcome = slack::post_poll(
            &client,
            slack::API_URL,
            &poll_options,
            args.slack_token.as_deref(),
            args.slack_channel.as_deref(),
        )
        .await?;
        debug!(?outcome, "Slack post finished");
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        restaurants = restaurants.len(),
        failed = outcomes.len() - restaurants.len(),
        "Execution complete"
    );

    Ok(())
}
