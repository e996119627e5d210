//! Assembly of the structured text document handed to the language model.
//!
//! The document is a preamble with the provider's score definitions followed by
//! one block per feed item that has at least one relevant entry for the symbol.
//! A batch separator line follows every fifth block position.

use crate::core::ReportError;
use crate::filter::{MalformedScorePolicy, relevant_sentiments};
use crate::news::{MISSING, NewsFeed, NewsItem, TickerSentiment};

/// Marker line inserted after every [`BATCH_SIZE`]th block position.
pub const BATCH_SEPARATOR: &str = "--- Batch Break ---";

/// Number of positions between batch separators.
pub const BATCH_SIZE: usize = 5;

/// How block ordinals (and therefore separator positions) are counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Numbering {
    /// Ordinal is the item's 1-based position in the original feed. Items without
    /// relevant entries still advance the count, so ordinals can have gaps. (Default)
    #[default]
    FeedPosition,
    /// Ordinal counts emitted blocks only, so ordinals are contiguous.
    Sequential,
}

/// Turns a [`NewsFeed`] into the structured document for one symbol.
///
/// Pure: the same feed, symbol and settings always produce the same bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Structurer {
    numbering: Numbering,
    malformed: MalformedScorePolicy,
}

#[derive(Default)]
struct Accumulator {
    document: String,
    /// Items visited so far.
    visited: usize,
    /// Blocks emitted so far.
    emitted: usize,
}

impl Structurer {
    /// Creates a structurer with positional numbering that aborts on malformed scores.
    pub const fn new() -> Self {
        Self {
            numbering: Numbering::FeedPosition,
            malformed: MalformedScorePolicy::Abort,
        }
    }

    /// Selects how block ordinals are counted.
    #[must_use]
    pub const fn numbering(mut self, numbering: Numbering) -> Self {
        self.numbering = numbering;
        self
    }

    /// Selects what happens to entries with a non-numeric relevance score.
    #[must_use]
    pub const fn malformed_scores(mut self, policy: MalformedScorePolicy) -> Self {
        self.malformed = policy;
        self
    }

    /// Builds the document for `symbol` from `feed`.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::MalformedData` if a relevant entry has a non-numeric
    /// relevance score and the policy is [`MalformedScorePolicy::Abort`].
    pub fn structure(&self, feed: &NewsFeed, symbol: &str) -> Result<String, ReportError> {
        let seed = Accumulator {
            document: preamble(
                &feed.sentiment_score_definition,
                &feed.relevance_score_definition,
            ),
            ..Accumulator::default()
        };

        let acc = feed
            .items
            .iter()
            .try_fold(seed, |acc, item| self.step(acc, item, symbol))?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            symbol,
            visited = acc.visited,
            emitted = acc.emitted,
            bytes = acc.document.len(),
            "structured news document"
        );

        Ok(acc.document)
    }

    fn step(
        &self,
        mut acc: Accumulator,
        item: &NewsItem,
        symbol: &str,
    ) -> Result<Accumulator, ReportError> {
        acc.visited += 1;

        let entries = relevant_sentiments(item, symbol, self.malformed)?;
        if entries.is_empty() {
            return Ok(acc);
        }
        acc.emitted += 1;

        let ordinal = match self.numbering {
            Numbering::FeedPosition => acc.visited,
            Numbering::Sequential => acc.emitted,
        };
        acc.document.push_str(&block(ordinal, item, &entries));
        if ordinal % BATCH_SIZE == 0 {
            acc.document.push('\n');
            acc.document.push_str(BATCH_SEPARATOR);
            acc.document.push('\n');
        }
        Ok(acc)
    }
}

/// The fixed document header carrying both definitions verbatim.
pub fn preamble(sentiment_score_definition: &str, relevance_score_definition: &str) -> String {
    format!(
        "Definitions:\n\
         - Sentiment Score: {sentiment_score_definition}\n\
         - Relevance Score: {relevance_score_definition}\n\
         News Data:\n"
    )
}

/// One line per relevant entry: `TICKER: Relevance r, Sentiment s (label)`.
pub fn sentiment_line(ts: &TickerSentiment) -> String {
    format!(
        "{}: Relevance {}, Sentiment {} ({})",
        ts.ticker, ts.relevance_score, ts.sentiment_score, ts.sentiment_label
    )
}

fn block(ordinal: usize, item: &NewsItem, entries: &[&TickerSentiment]) -> String {
    let authors = if item.authors.is_empty() {
        MISSING.to_string()
    } else {
        item.authors.join(", ")
    };

    let mut out = format!(
        "\n{ordinal}. Title: {title}\n\
         \x20  Time Published: {published}\n\
         \x20  Author: {authors}\n\
         \x20  Summary: {summary}\n\
         \x20  Sentiment Scores:\n\
         \x20  - Overall Sentiment: {score} ({label})\n\
         \x20  - Ticker Sentiments:\n",
        title = item.title,
        published = item.time_published,
        summary = item.summary,
        score = item.overall_sentiment_score,
        label = item.overall_sentiment_label,
    );
    for ts in entries {
        out.push_str("     - ");
        out.push_str(&sentiment_line(ts));
        out.push('\n');
    }
    out
}
