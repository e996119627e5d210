//! The end-to-end report pipeline: fetch, filter, structure, prompt, generate.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    ReportClient, ReportError,
    document::{Numbering, Structurer},
    filter::MalformedScorePolicy,
    llm,
    news::{NewsBuilder, NewsFeed},
    prompt::ReportRequest,
};

/// A generated narrative report.
///
/// The text is passed through untouched; `**emphasis**` markers are left for
/// the presentation layer to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// The symbol the report was generated for.
    pub symbol: String,
    /// The model's narrative.
    pub text: String,
}

/// Runs the report pipeline for one symbol at a time.
///
/// Each call to [`Reporter::generate`] makes exactly one news request followed by
/// exactly one completion request. No state is kept between calls, so a single
/// `Reporter` can serve concurrent runs.
///
/// # Example
///
/// ```no_run
/// # use sentiment_report::{ReportClientBuilder, Reporter};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ReportClientBuilder::from_env()?.build()?;
/// let report = Reporter::new(&client).generate("AAPL").await?;
/// println!("{}", report.text);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Reporter {
    client: ReportClient,
    structurer: Structurer,
    reject_empty: bool,
    now: Option<DateTime<Utc>>,
}

impl Reporter {
    /// Creates a reporter with positional numbering, aborting on malformed scores
    /// and accepting whatever text the model returns.
    pub fn new(client: &ReportClient) -> Self {
        Self {
            client: client.clone(),
            structurer: Structurer::new(),
            reject_empty: false,
            now: None,
        }
    }

    /// Selects how block ordinals in the document are counted.
    #[must_use]
    pub const fn numbering(mut self, numbering: Numbering) -> Self {
        self.structurer = self.structurer.numbering(numbering);
        self
    }

    /// Selects what happens to entries with a non-numeric relevance score.
    #[must_use]
    pub const fn malformed_scores(mut self, policy: MalformedScorePolicy) -> Self {
        self.structurer = self.structurer.malformed_scores(policy);
        self
    }

    /// When enabled, an empty or whitespace-only completion fails with
    /// `ReportError::EmptyReport`. Default: disabled.
    #[must_use]
    pub const fn reject_empty(mut self, reject: bool) -> Self {
        self.reject_empty = reject;
        self
    }

    /// Anchors the news window at `now` instead of the current time.
    #[must_use]
    pub const fn now(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    /// Fetches the news feed for `symbol`.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidSymbol` for an empty symbol and
    /// `ReportError::DataFetch` if the provider call fails.
    pub async fn fetch_feed(&self, symbol: &str) -> Result<NewsFeed, ReportError> {
        let symbol = validate_symbol(symbol)?;
        let mut builder = NewsBuilder::new(&self.client, symbol);
        if let Some(now) = self.now {
            builder = builder.now(now);
        }
        builder.fetch().await
    }

    /// Builds the structured document for `symbol` from an already fetched feed.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::MalformedData` per the configured malformed-score policy.
    pub fn structure(&self, feed: &NewsFeed, symbol: &str) -> Result<String, ReportError> {
        self.structurer.structure(feed, symbol)
    }

    /// Wraps a structured document into the two-message model request.
    pub fn build_request(document: impl Into<String>) -> ReportRequest {
        ReportRequest::new(document)
    }

    /// Generates a report for `symbol`.
    ///
    /// The completion request is only sent once the feed has been fetched and
    /// structured successfully.
    ///
    /// # Errors
    ///
    /// - `ReportError::InvalidSymbol` if `symbol` is empty.
    /// - `ReportError::DataFetch` if the news provider call fails.
    /// - `ReportError::MalformedData` if a relevant entry has a non-numeric score.
    /// - `ReportError::Generation` if the model call fails.
    /// - `ReportError::EmptyReport` if empty reports are rejected and the model returned one.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn generate(&self, symbol: &str) -> Result<Report, ReportError> {
        let symbol = validate_symbol(symbol)?;
        let feed = self.fetch_feed(symbol).await?;
        let document = self.structure(&feed, symbol)?;
        let request = Self::build_request(document);
        let text = llm::complete(&self.client, &request, symbol).await?;

        if self.reject_empty && text.trim().is_empty() {
            return Err(ReportError::EmptyReport);
        }

        Ok(Report {
            symbol: symbol.to_string(),
            text,
        })
    }
}

fn validate_symbol(symbol: &str) -> Result<&str, ReportError> {
    if symbol.trim().is_empty() {
        return Err(ReportError::InvalidSymbol);
    }
    Ok(symbol)
}
