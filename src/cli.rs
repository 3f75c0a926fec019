//! Command-line interface definitions for the lunch poll.
//!
//! Slack credentials can be passed as flags or environment variables. All
//! other options override the config file.

use crate::scrapers::Source;
use chrono::NaiveDate;
use clap::Parser;

/// Command-line arguments for the lunch poll.
///
/// # Examples
///
/// ```sh
/// # Scrape and print the poll without posting
/// lunch_poll --dry-run
///
/// # Post to Slack
/// lunch_poll --slack-token xoxp-... --slack-channel C0123456
///
/// # Only two restaurants, as if it were Wednesday 15 May 2024
/// lunch_poll --dry-run --source pinta,kozlovna --date 2024-05-15
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Slack access token
    #[arg(long, env = "SLACK_TOKEN", hide_env_values = true)]
    pub slack_token: Option<String>,

    /// Slack channel ID the poll is posted to
    #[arg(long, env = "SLACK_CHANNEL")]
    pub slack_channel: Option<String>,

    /// Optional path to a YAML config file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Restaurants to poll, in order (overrides the config file)
    #[arg(long = "source", value_enum, value_delimiter = ',')]
    pub sources: Vec<Source>,

    /// Date whose menu is wanted, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Maximum number of restaurant pages fetched at once
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Abort the whole run when any restaurant fails
    #[arg(long)]
    pub fail_fast: bool,

    /// Print the poll text instead of posting it
    #[arg(long)]
    pub dry_run: bool,

    /// Also write the scraped menus to this JSON file
    #[arg(short, long)]
    pub json_output: Option<String>,

    /// List the known restaurants and exit
    #[arg(long)]
    pub list_sources: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "lunch_poll",
            "--slack-token",
            "xoxp-1",
            "--slack-channel",
            "C123",
            "--date",
            "2024-05-15",
            "--dry-run",
        ]);

        assert_eq!(cli.slack_token.as_deref(), Some("xoxp-1"));
        assert_eq!(cli.slack_channel.as_deref(), Some("C123"));
        assert_eq!(cli.date, NaiveDate::from_ymd_opt(2024, 5, 15));
        assert!(cli.dry_run);
        assert!(!cli.fail_fast);
    }

    #[test]
    fn test_cli_sources_keep_order() {
        let cli = Cli::parse_from(["lunch_poll", "--source", "pet-penez,olive", "--source", "pinta"]);
        assert_eq!(cli.sources, vec![Source::PetPenez, Source::Olive, Source::Pinta]);
    }

    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["lunch_poll", "-c", "/etc/lunch.yaml", "-j", "/tmp/menus.json"]);
        assert_eq!(cli.config.as_deref(), Some("/etc/lunch.yaml"));
        assert_eq!(cli.json_output.as_deref(), Some("/tmp/menus.json"));
    }

    #[test]
    fn test_cli_rejects_unknown_source() {
        assert!(Cli::try_parse_from(["lunch_poll", "--source", "u-fleku"]).is_err());
    }

    #[test]
    fn test_cli_rejects_bad_date() {
        assert!(Cli::try_parse_from(["lunch_poll", "--date", "15.5.2024"]).is_err());
    }
}
