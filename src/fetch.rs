//! HTTP access to restaurant pages.
//!
//! One [`reqwest::Client`] is built per run and shared by every scraper. The
//! client always carries an explicit timeout, so a hanging restaurant site
//! cannot stall the whole poll.

use crate::error::FetchError;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument, warn};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Build the shared HTTP client with a per-request `timeout`.
pub fn make_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
}

/// Download a menu page as text.
///
/// # Arguments
///
/// * `client` - Shared HTTP client
/// * `url` - Page to download
/// * `override_encoding` - Ignore the charset the server declares and decode
///   with a detected one instead. Some older sites send windows-1250 pages
///   labelled as something else.
///
/// # Returns
///
/// The page text with non-breaking spaces turned into plain spaces.
///
/// # Errors
///
/// [`FetchError::Status`] for a non-success status, [`FetchError::Request`]
/// for transport failures and timeouts. Nothing is retried.
#[instrument(level = "info", skip(client))]
pub async fn fetch_page(
    client: &Client,
    url: &str,
    override_encoding: bool,
) -> Result<String, FetchError> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        warn!(%status, "Menu page request failed");
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    let text = if override_encoding {
        let bytes = response.bytes().await?;
        decode_detected(&bytes)
    } else {
        response.text().await?
    };

    debug!(bytes = text.len(), "Fetched menu page");
    Ok(normalize_nbsp(&text))
}

/// Decode `bytes` with the encoding `chardetng` guesses for them.
pub fn decode_detected(bytes: &[u8]) -> String {
    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding: &'static encoding_rs::Encoding = detector.guess(None, true);
    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        warn!(encoding = encoding.name(), "Page contained malformed sequences");
    }
    debug!(encoding = encoding.name(), "Decoded page with detected encoding");
    text.into_owned()
}

/// Replace non-breaking spaces with plain spaces.
pub fn normalize_nbsp(text: &str) -> String {
    text.replace('\u{a0}', " ")
}
