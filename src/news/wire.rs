use serde::Deserialize;

use crate::core::wire::de_opt_text;

#[derive(Deserialize)]
pub(crate) struct NewsSentimentEnvelope {
    pub(crate) sentiment_score_definition: Option<String>,
    pub(crate) relevance_score_definition: Option<String>,
    pub(crate) feed: Option<Vec<FeedItem>>,

    // Alpha Vantage answers quota and key problems with HTTP 200 and one of these.
    #[serde(rename = "Information")]
    pub(crate) information: Option<String>,
    #[serde(rename = "Note")]
    pub(crate) note: Option<String>,
    #[serde(rename = "Error Message")]
    pub(crate) error_message: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct FeedItem {
    pub(crate) title: Option<String>,
    pub(crate) url: Option<String>,
    pub(crate) time_published: Option<String>,
    pub(crate) authors: Option<Vec<String>>,
    pub(crate) summary: Option<String>,
    pub(crate) source: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub(crate) overall_sentiment_score: Option<String>,
    pub(crate) overall_sentiment_label: Option<String>,
    pub(crate) ticker_sentiment: Option<Vec<RawTickerSentiment>>,
}

#[derive(Deserialize)]
pub(crate) struct RawTickerSentiment {
    pub(crate) ticker: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub(crate) relevance_score: Option<String>,
    #[serde(default, deserialize_with = "de_opt_text")]
    pub(crate) ticker_sentiment_score: Option<String>,
    pub(crate) ticker_sentiment_label: Option<String>,
}
