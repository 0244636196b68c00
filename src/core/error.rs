use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum LitError {
    /// The extractor was constructed without a usable identifier.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unsuccessful HTTP status code; the profile page is
    /// missing or inaccessible.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The page did not carry a readable `__NEXT_DATA__` payload.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The payload parsed but holds no profile (the identifier names no real profile).
    #[error("Not found: {0}")]
    NotFound(String),
}
