mod api;
mod model;
mod wire;

pub use api::time_from;
pub use model::{MISSING, NewsFeed, NewsItem, TickerSentiment};

use chrono::{DateTime, Utc};

use crate::{ReportClient, ReportError};

/// Ordering requested from the provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Most relevant articles first. (Default)
    #[default]
    Relevance,
    /// Newest articles first.
    Latest,
    /// Oldest articles first.
    Earliest,
}

impl SortOrder {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Relevance => "RELEVANCE",
            Self::Latest => "LATEST",
            Self::Earliest => "EARLIEST",
        }
    }
}

/// A builder for fetching the news sentiment feed for a specific symbol.
pub struct NewsBuilder {
    client: ReportClient,
    symbol: String,
    now: Option<DateTime<Utc>>,
    lookback_days: u32,
    sort: SortOrder,
}

impl NewsBuilder {
    /// Creates a new `NewsBuilder` for a given symbol.
    pub fn new(client: &ReportClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            now: None,
            lookback_days: client.lookback_days(),
            sort: SortOrder::default(),
        }
    }

    /// Anchors the news window at `now` instead of the current time.
    #[must_use]
    pub const fn now(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    /// Overrides the client's lookback window for this call.
    #[must_use]
    pub const fn lookback_days(mut self, days: u32) -> Self {
        self.lookback_days = days;
        self
    }

    /// Sets the ordering requested from the provider.
    #[must_use]
    pub const fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Executes the request and returns the feed with both score definitions.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::DataFetch` if the request fails, the provider answers
    /// with a non-success status or an error message, or the body is not JSON.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn fetch(self) -> Result<NewsFeed, ReportError> {
        api::fetch_news_feed(
            &self.client,
            &self.symbol,
            self.now.unwrap_or_else(Utc::now),
            self.lookback_days,
            self.sort,
        )
        .await
    }
}
