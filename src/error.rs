//! Error types for fetching, parsing, configuration and posting.

use thiserror::Error;

/// A source page could not be downloaded.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("{url} responded with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// The page markup did not have the shape a scraper expects.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("{source_name}: expected element `{fragment}` is missing")]
    MissingFragment {
        source_name: &'static str,
        fragment: &'static str,
    },

    #[error("{source_name}: header `{header}` does not name a weekday")]
    UnknownDayHeader {
        source_name: &'static str,
        header: String,
    },
}

/// Failure of a single source, either while fetching or while parsing.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("{source_name}: {error}")]
    Fetch {
        source_name: &'static str,
        #[source]
        error: FetchError,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {error}")]
    Io {
        path: String,
        #[source]
        error: std::io::Error,
    },

    #[error("invalid config file {path}: {error}")]
    Yaml {
        path: String,
        #[source]
        error: serde_yaml::Error,
    },

    #[error("config value out of range: {message}")]
    Invalid { message: String },
}

#[derive(Error, Debug)]
pub enum SlackError {
    #[error("Slack request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected Slack response: {0}")]
    Response(#[from] serde_json::Error),

    #[error("Slack API returned an error: {0}")]
    Api(String),
}
