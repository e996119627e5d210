//! sentiment-report: plain-language news sentiment reports for a stock symbol.
//!
//! The pipeline fetches ~90 days of news sentiment from Alpha Vantage, keeps the
//! entries that are actually about the symbol, folds them into a compact text
//! document and asks a hosted language model to narrate it.
//!
//! ```no_run
//! # use sentiment_report::{ReportClientBuilder, Reporter};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ReportClientBuilder::from_env()?.build()?;
//! let report = Reporter::new(&client).generate("MSFT").await?;
//! println!("{}", report.text);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod document;
pub mod filter;
pub mod llm;
pub mod news;
pub mod prompt;
pub mod reporter;

pub use crate::core::{ReportClient, ReportClientBuilder, ReportError};
pub use document::{BATCH_SEPARATOR, Numbering, Structurer};
pub use filter::{MalformedScorePolicy, RELEVANCE_THRESHOLD, relevant_sentiments};
pub use news::{NewsBuilder, NewsFeed, NewsItem, SortOrder, TickerSentiment};
pub use prompt::{ChatMessage, ReportRequest, Role, SYSTEM_PROMPT};
pub use reporter::{Report, Reporter};
