//! Relevance filtering of per-ticker sentiment entries.

use crate::core::ReportError;
use crate::news::{NewsItem, TickerSentiment};

/// Entries must score strictly above this to be considered about the symbol.
pub const RELEVANCE_THRESHOLD: f64 = 0.4;

/// What to do with a matching entry whose relevance score is not a number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedScorePolicy {
    /// Fail the whole run with `ReportError::MalformedData`. (Default)
    #[default]
    Abort,
    /// Drop the entry and keep going.
    Skip,
}

/// Returns the entries of `item` that are about `symbol`, in source order.
///
/// An entry qualifies when its ticker equals `symbol` exactly (case-sensitive)
/// and its relevance score parses to a value strictly greater than
/// [`RELEVANCE_THRESHOLD`]. Scores on other tickers are never parsed.
///
/// # Errors
///
/// With [`MalformedScorePolicy::Abort`], returns `ReportError::MalformedData` for
/// the first matching entry whose relevance score is not a number.
pub fn relevant_sentiments<'a>(
    item: &'a NewsItem,
    symbol: &str,
    policy: MalformedScorePolicy,
) -> Result<Vec<&'a TickerSentiment>, ReportError> {
    let mut out = Vec::new();
    for ts in item.ticker_sentiment.iter().filter(|ts| ts.ticker == symbol) {
        match ts.relevance_score.trim().parse::<f64>() {
            Ok(relevance) if relevance > RELEVANCE_THRESHOLD => out.push(ts),
            Ok(_) => {}
            Err(_) if policy == MalformedScorePolicy::Skip => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    ticker = %ts.ticker,
                    relevance = %ts.relevance_score,
                    title = %item.title,
                    "skipping entry with non-numeric relevance score"
                );
            }
            Err(_) => {
                return Err(ReportError::MalformedData(format!(
                    "relevance score {:?} for {} in \"{}\" is not a number",
                    ts.relevance_score, ts.ticker, item.title
                )));
            }
        }
    }
    Ok(out)
}
