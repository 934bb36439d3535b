use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum IexError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A response body could not be decoded as JSON.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// The requested resource was not found (HTTP 404).
    #[error("Not found at {url}: {body}")]
    NotFound {
        /// The URL that returned the error.
        url: String,
        /// The response body, e.g. `"Unknown symbol"`.
        body: String,
    },

    /// The API rejected the request because of rate limiting (HTTP 429).
    #[error("Rate limited at {url}: {body}")]
    RateLimited {
        /// The URL that returned the error.
        url: String,
        /// The response body, as returned by the server.
        body: String,
    },

    /// The server failed to process the request (HTTP 5xx).
    #[error("Server error {status} at {url}: {body}")]
    ServerError {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
        /// The response body, as returned by the server.
        body: String,
    },

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}: {body}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
        /// The response body, as returned by the server.
        body: String,
    },

    /// The credential file could not be read or parsed.
    #[error("Credential error: {0}")]
    Credentials(String),

    /// A chart range token is not one of the supported ranges.
    #[error("invalid chart range: {0}")]
    InvalidRange(String),

    /// An argument was rejected before any request was made.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The data received from the API was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),
}

impl IexError {
    /// Maps a non-success HTTP status to the matching error variant.
    pub(crate) fn from_status(status: u16, url: String, body: String) -> Self {
        match status {
            404 => Self::NotFound { url, body },
            429 => Self::RateLimited { url, body },
            500..=599 => Self::ServerError { status, url, body },
            _ => Self::Status { status, url, body },
        }
    }
}
