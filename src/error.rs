use thiserror::Error;

/// Longest response body kept in an error message
pub const BODY_EXCERPT_LEN: usize = 500;

/// Required configuration that was not supplied
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required configuration: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
}

/// Failure talking to the data provider or the storage backend
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{service} request failed: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} returned {status}: {body}")]
    Status {
        service: &'static str,
        status: u16,
        body: String,
    },

    #[error("failed to decode {service} response: {source}")]
    Decode {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    pub fn status(service: &'static str, status: reqwest::StatusCode, body: &str) -> Self {
        ApiError::Status {
            service,
            status: status.as_u16(),
            body: excerpt(body),
        }
    }

    pub fn is_timeout(&self) -> bool {
        match self {
            ApiError::Transport { source, .. } => source.is_timeout(),
            _ => false,
        }
    }
}

/// A "Match Winner" price that could not be turned into a number
#[derive(Debug, Error, PartialEq)]
pub enum ExtractError {
    #[error("{bookmaker}: price {position} is missing")]
    MissingPrice { bookmaker: String, position: usize },

    #[error("{bookmaker}: price {position} is not a number: {raw:?}")]
    InvalidPrice {
        bookmaker: String,
        position: usize,
        raw: String,
    },
}

/// Cut a response body down to something loggable
pub fn excerpt(body: &str) -> String {
    match body.char_indices().nth(BODY_EXCERPT_LEN) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
