//! Centralized constants for default endpoints, model parameters and UA.

use std::time::Duration;

/// Identifies this crate to both providers.
pub(crate) const USER_AGENT: &str = concat!("sentiment-report/", env!("CARGO_PKG_VERSION"));

/// Alpha Vantage query endpoint (all functions share it).
pub(crate) const DEFAULT_BASE_NEWS: &str = "https://www.alphavantage.co/query";

/// OpenAI-compatible base; `chat/completions` is joined onto it.
pub(crate) const DEFAULT_BASE_LLM: &str = "https://api.groq.com/openai/v1/";

/// Hosted model used for report generation.
pub(crate) const DEFAULT_MODEL: &str = "llama-3.1-70b-versatile";

pub(crate) const DEFAULT_TEMPERATURE: f32 = 0.5;

/// Nucleus-sampling cutoff.
pub(crate) const DEFAULT_TOP_P: f32 = 0.9;

/// How far back the news window reaches from "now".
pub(crate) const DEFAULT_LOOKBACK_DAYS: u32 = 90;

pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub(crate) const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/* -------- environment variables read by `ReportClientBuilder::from_env` -------- */

pub(crate) const ENV_NEWS_API_KEY: &str = "ALPHA_VANTAGE_API_KEY";
pub(crate) const ENV_LLM_API_KEY: &str = "GROQ_API_KEY";
pub(crate) const ENV_NEWS_BASE: &str = "SENTIMENT_REPORT_NEWS_BASE";
pub(crate) const ENV_LLM_BASE: &str = "SENTIMENT_REPORT_LLM_BASE";
pub(crate) const ENV_MODEL: &str = "SENTIMENT_REPORT_MODEL";
