//! Posting the lunch poll to Slack.
//!
//! The poll is created by invoking the `/poll` slash command in the target
//! channel through `chat.command`. Without a token and a channel nothing is
//! sent; the run still succeeds so the menus can be scraped and printed.

use crate::error::SlackError;
use crate::outputs::poll::poll_text;
use crate::utils::truncate_for_log;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, info, instrument};

/// Slack endpoint for running slash commands.
pub const API_URL: &str = "https://slack.com/api/chat.command";

/// Slash command creating the poll.
pub const COMMAND: &str = "/poll";

/// What [`post_poll`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostOutcome {
    Posted,
    /// Token or channel missing, nothing was sent.
    Skipped,
}

#[derive(Debug, Deserialize)]
struct SlackResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

/// Post the poll with `options` to `channel`.
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `api_url` - Slack endpoint, normally [`API_URL`]
/// * `options` - Poll options rendered by
///   [`format_poll_option`](crate::outputs::poll::format_poll_option)
/// * `token`, `channel` - Slack credentials; empty counts as missing
///
/// # Errors
///
/// Transport failures, a non-JSON answer, or `"ok": false` from Slack.
#[instrument(level = "info", skip_all, fields(options = options.len()))]
pub async fn post_poll(
    client: &Client,
    api_url: &str,
    options: &[String],
    token: Option<&str>,
    channel: Option<&str>,
) -> Result<PostOutcome, SlackError> {
    let (Some(token), Some(channel)) = (
        token.filter(|t| !t.is_empty()),
        channel.filter(|c| !c.is_empty()),
    ) else {
        error!("You need to provide --slack-token and --slack-channel to send the menu to Slack");
        return Ok(PostOutcome::Skipped);
    };

    let text = poll_text(options);
    debug!(%text, "Slack-formatted message");

    let params = [
        ("token", token),
        ("channel", channel),
        ("command", COMMAND),
        ("text", text.as_str()),
    ];
    let body = client
        .post(api_url)
        .form(&params)
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    let response: SlackResponse = serde_json::from_str(&body)?;
    if !response.ok {
        let reason = response.error.unwrap_or_else(|| truncate_for_log(&body, 200));
        error!(%reason, "Slack rejected the poll");
        return Err(SlackError::Api(reason));
    }

    info!(%channel, "Posted lunch poll");
    Ok(PostOutcome::Posted)
}
