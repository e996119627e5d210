use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The news provider could not be reached, returned an unsuccessful status,
    /// or sent a body that is not the expected JSON document.
    #[error("failed to fetch news sentiment data: {0}")]
    DataFetch(String),

    /// A numeric field in a feed item could not be parsed.
    #[error("malformed feed data: {0}")]
    MalformedData(String),

    /// The language-model provider could not be reached, returned an unsuccessful
    /// status, or sent a response without any usable completion.
    #[error("failed to generate report: {0}")]
    Generation(String),

    /// The requested symbol was empty.
    #[error("stock symbol must not be empty")]
    InvalidSymbol,

    /// The model returned an empty report and empty reports are rejected.
    #[error("language model returned an empty report")]
    EmptyReport,

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The client could not be configured (missing API key, HTTP client build failure).
    #[error("configuration error: {0}")]
    Config(String),
}
