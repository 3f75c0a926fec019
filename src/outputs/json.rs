//! JSON output of the day's menus.
//!
//! Besides posting the poll, a run can dump what it scraped to a file so
//! other tools can reuse it. Failed sources are listed with their error
//! instead of being silently missing.
//!
//! # Output Structure
//!
//! ```text
//! {
//!   "date": "2024-05-15",
//!   "weekday": "středa",
//!   "restaurants": [{ "name": "...", "menu": [{ "name": "...", "price": 139 }] }],
//!   "failed_sources": [{ "source": "Kozlovna", "error": "..." }]
//! }
//! ```

use crate::aggregate::SourceOutcome;
use crate::models::Restaurant;
use crate::weekday::{DAYS_OF_WEEK, date_weekday_index};
use chrono::NaiveDate;
use serde::Serialize;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

/// Everything one run scraped.
#[derive(Debug, Serialize)]
pub struct LunchReport<'a> {
    pub date: String,
    pub weekday: &'static str,
    pub restaurants: Vec<&'a Restaurant>,
    pub failed_sources: Vec<FailedSource>,
}

#[derive(Debug, Serialize)]
pub struct FailedSource {
    pub source: &'static str,
    pub error: String,
}

impl<'a> LunchReport<'a> {
    pub fn new(date: NaiveDate, outcomes: &'a [SourceOutcome]) -> Self {
        let mut restaurants = Vec::new();
        let mut failed_sources = Vec::new();
        for outcome in outcomes {
            match &outcome.result {
                Ok(restaurant) => restaurants.push(restaurant),
                Err(e) => failed_sources.push(FailedSource {
                    source: outcome.source.name(),
                    error: e.to_string(),
                }),
            }
        }

        Self {
            date: date.to_string(),
            weekday: DAYS_OF_WEEK[date_weekday_index(date)],
            restaurants,
            failed_sources,
        }
    }
}

/// Write `report` as pretty-printed JSON to `path`, creating parent
/// directories as needed.
#[instrument(level = "info", skip_all, fields(%path))]
pub async fn write_report(report: &LunchReport<'_>, path: &str) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(report)?;

    if let Some(parent) = Path::new(path).parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(parent).await {
            error!(dir = %parent.display(), error = %e, "Failed to create JSON dir");
            return Err(e.into());
        }
    }

    fs::write(path, json).await?;
    info!(restaurants = report.restaurants.len(), "Wrote JSON report");
    Ok(())
}
