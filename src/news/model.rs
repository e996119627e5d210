use serde::Serialize;

/// Placeholder rendered for any textual field the provider omitted.
pub const MISSING: &str = "N/A";

/// One article from the news sentiment feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsItem {
    /// The headline of the article.
    pub title: String,
    /// A direct link to the article.
    pub url: String,
    /// Publication time in the provider's format (`YYYYMMDDThhmmss`).
    pub time_published: String,
    /// Author names; often empty.
    pub authors: Vec<String>,
    /// The provider's summary of the article.
    pub summary: String,
    /// The publisher (e.g., "Benzinga", "Motley Fool").
    pub source: String,
    /// Overall sentiment score, as the provider's text.
    pub overall_sentiment_score: String,
    /// Overall sentiment label (e.g., "Somewhat-Bullish").
    pub overall_sentiment_label: String,
    /// Per-ticker sentiment, in provider order.
    pub ticker_sentiment: Vec<TickerSentiment>,
}

/// Sentiment attached to one ticker mentioned by a [`NewsItem`].
///
/// Scores are kept as text so they can be echoed verbatim; the relevance
/// score is parsed only when filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TickerSentiment {
    pub ticker: String,
    pub relevance_score: String,
    pub sentiment_score: String,
    pub sentiment_label: String,
}

/// The full provider response for one symbol.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewsFeed {
    /// How the provider defines its sentiment scale; empty if absent.
    pub sentiment_score_definition: String,
    /// How the provider defines its relevance scale; empty if absent.
    pub relevance_score_definition: String,
    /// Feed items in provider order.
    pub items: Vec<NewsItem>,
}
