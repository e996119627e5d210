use chrono::{DateTime, Duration, Utc};

use crate::{
    core::{ReportClient, ReportError, net},
    news::{
        SortOrder,
        model::{MISSING, NewsFeed, NewsItem, TickerSentiment},
        wire,
    },
};

/// Provider timestamp layout for `time_from`: `YYYYMMDDThhmm`.
const TIME_FROM_FORMAT: &str = "%Y%m%dT%H%M";

/// Start of the news window, `lookback_days` before `now`, in provider format.
pub fn time_from(now: DateTime<Utc>, lookback_days: u32) -> String {
    (now - Duration::days(i64::from(lookback_days)))
        .format(TIME_FROM_FORMAT)
        .to_string()
}

pub(super) async fn fetch_news_feed(
    client: &ReportClient,
    symbol: &str,
    now: DateTime<Utc>,
    lookback_days: u32,
    sort: SortOrder,
) -> Result<NewsFeed, ReportError> {
    let mut url = client.base_news().clone();
    url.query_pairs_mut()
        .append_pair("function", "NEWS_SENTIMENT")
        .append_pair("tickers", symbol)
        .append_pair("time_from", &time_from(now, lookback_days))
        .append_pair("sort", sort.as_str())
        .append_pair("apikey", client.news_api_key());

    // Never echo the query string: it carries the API key.
    let endpoint = client.base_news().as_str().to_string();

    let resp = client
        .http()
        .get(url)
        .send()
        .await
        .map_err(|e| ReportError::DataFetch(format!("request to {endpoint} failed: {}", e.without_url())))?;

    if !resp.status().is_success() {
        return Err(ReportError::DataFetch(format!(
            "unexpected response status {} at {endpoint}",
            resp.status().as_u16()
        )));
    }

    let body = net::get_text(resp, "news_sentiment", symbol, "json")
        .await
        .map_err(|e| ReportError::DataFetch(format!("failed to read body: {}", e.without_url())))?;
    let envelope: wire::NewsSentimentEnvelope = serde_json::from_str(&body)
        .map_err(|e| ReportError::DataFetch(format!("response is not valid JSON: {e}")))?;

    if envelope.feed.is_none()
        && let Some(message) = envelope
            .error_message
            .or(envelope.information)
            .or(envelope.note)
    {
        return Err(ReportError::DataFetch(message));
    }

    let items: Vec<NewsItem> = envelope
        .feed
        .unwrap_or_default()
        .into_iter()
        .map(into_news_item)
        .collect();

    #[cfg(feature = "tracing")]
    tracing::debug!(symbol, items = items.len(), "fetched news sentiment feed");

    Ok(NewsFeed {
        sentiment_score_definition: envelope.sentiment_score_definition.unwrap_or_default(),
        relevance_score_definition: envelope.relevance_score_definition.unwrap_or_default(),
        items,
    })
}

fn or_missing(value: Option<String>) -> String {
    value.unwrap_or_else(|| MISSING.to_string())
}

fn into_news_item(raw: wire::FeedItem) -> NewsItem {
    NewsItem {
        title: or_missing(raw.title),
        url: or_missing(raw.url),
        time_published: or_missing(raw.time_published),
        authors: raw.authors.unwrap_or_default(),
        summary: or_missing(raw.summary),
        source: or_missing(raw.source),
        overall_sentiment_score: or_missing(raw.overall_sentiment_score),
        overall_sentiment_label: or_missing(raw.overall_sentiment_label),
        ticker_sentiment: raw
            .ticker_sentiment
            .unwrap_or_default()
            .into_iter()
            .map(|ts| TickerSentiment {
                ticker: ts.ticker.unwrap_or_default(),
                relevance_score: or_missing(ts.relevance_score),
                sentiment_score: or_missing(ts.ticker_sentiment_score),
                sentiment_label: or_missing(ts.ticker_sentiment_label),
            })
            .collect(),
    }
}
