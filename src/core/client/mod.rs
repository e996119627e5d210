//! Public client surface + builder.
//! Defaults (endpoints, model parameters, UA, env var names) live in `constants`.

mod constants;

use crate::core::ReportError;
use constants::{
    DEFAULT_BASE_LLM, DEFAULT_BASE_NEWS, DEFAULT_CONNECT_TIMEOUT, DEFAULT_LOOKBACK_DAYS,
    DEFAULT_MODEL, DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT, DEFAULT_TOP_P, ENV_LLM_API_KEY,
    ENV_LLM_BASE, ENV_MODEL, ENV_NEWS_API_KEY, ENV_NEWS_BASE, USER_AGENT,
};
use reqwest::Client;
use std::env;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Explicit configuration for both external providers plus the shared HTTP pool.
///
/// Built once at startup and passed by reference into every pipeline run.
/// Cloning is cheap: the underlying `reqwest::Client` is reference counted.
#[derive(Clone)]
pub struct ReportClient {
    http: Client,
    base_news: Url,
    news_api_key: String,
    base_llm: Url,
    llm_api_key: String,
    model: String,
    temperature: f32,
    top_p: f32,
    lookback_days: u32,
}

impl fmt::Debug for ReportClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReportClient")
            .field("base_news", &self.base_news.as_str())
            .field("base_llm", &self.base_llm.as_str())
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("top_p", &self.top_p)
            .field("lookback_days", &self.lookback_days)
            .finish_non_exhaustive()
    }
}

impl ReportClient {
    /// Create a new builder.
    pub fn builder() -> ReportClientBuilder {
        ReportClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_news(&self) -> &Url {
        &self.base_news
    }
    pub(crate) fn news_api_key(&self) -> &str {
        &self.news_api_key
    }
    pub(crate) fn base_llm(&self) -> &Url {
        &self.base_llm
    }
    pub(crate) fn llm_api_key(&self) -> &str {
        &self.llm_api_key
    }

    /// Model identifier sent with every completion request.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sampling temperature sent with every completion request.
    pub const fn temperature(&self) -> f32 {
        self.temperature
    }

    /// Nucleus-sampling (top-p) parameter sent with every completion request.
    pub const fn top_p(&self) -> f32 {
        self.top_p
    }

    /// Number of days the news window reaches back from "now".
    pub const fn lookback_days(&self) -> u32 {
        self.lookback_days
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct ReportClientBuilder {
    user_agent: Option<String>,
    base_news: Option<Url>,
    news_api_key: Option<String>,
    base_llm: Option<Url>,
    llm_api_key: Option<String>,
    model: Option<String>,
    temperature: Option<f32>,
    top_p: Option<f32>,
    lookback_days: Option<u32>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl ReportClientBuilder {
    /// Seed a builder from the process environment.
    ///
    /// Reads `ALPHA_VANTAGE_API_KEY` and `GROQ_API_KEY` (both required) and the optional
    /// overrides `SENTIMENT_REPORT_NEWS_BASE`, `SENTIMENT_REPORT_LLM_BASE` and
    /// `SENTIMENT_REPORT_MODEL`. Any setter called afterwards wins over the environment.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Config` if an API key is missing and `ReportError::Url`
    /// if a base override is not a valid URL.
    pub fn from_env() -> Result<Self, ReportError> {
        let required = |name: &str| {
            env::var(name)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| ReportError::Config(format!("environment variable {name} is not set")))
        };

        let mut builder = Self::default()
            .news_api_key(required(ENV_NEWS_API_KEY)?)
            .llm_api_key(required(ENV_LLM_API_KEY)?);

        if let Ok(raw) = env::var(ENV_NEWS_BASE) {
            builder = builder.base_news(Url::parse(&raw)?);
        }
        if let Ok(raw) = env::var(ENV_LLM_BASE) {
            builder = builder.base_llm(Url::parse(&raw)?);
        }
        if let Ok(model) = env::var(ENV_MODEL) {
            builder = builder.model(model);
        }
        Ok(builder)
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the news provider endpoint (e.g., `https://www.alphavantage.co/query`).
    pub fn base_news(mut self, url: Url) -> Self {
        self.base_news = Some(url);
        self
    }

    /// Alpha Vantage API key, sent as the `apikey` query parameter.
    pub fn news_api_key(mut self, key: impl Into<String>) -> Self {
        self.news_api_key = Some(key.into());
        self
    }

    /// Override the chat-completions base (e.g., `https://api.groq.com/openai/v1/`).
    ///
    /// `chat/completions` is joined onto this URL, so it should end with a slash.
    pub fn base_llm(mut self, url: Url) -> Self {
        self.base_llm = Some(url);
        self
    }

    /// Bearer token for the language-model provider.
    pub fn llm_api_key(mut self, key: impl Into<String>) -> Self {
        self.llm_api_key = Some(key.into());
        self
    }

    /// Model identifier. Default: `llama-3.1-70b-versatile`.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sampling temperature. Default: `0.5`.
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Nucleus-sampling parameter. Default: `0.9`.
    pub fn top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    /// How many days back the news window starts. Default: `90`.
    pub fn lookback_days(mut self, days: u32) -> Self {
        self.lookback_days = Some(days);
        self
    }

    /// Set a global request timeout (overall). Default: 30 seconds.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: 10 seconds.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Url` if a default endpoint fails to parse and
    /// `ReportError::Config` if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<ReportClient, ReportError> {
        let base_news = match self.base_news {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_NEWS)?,
        };
        let base_llm = match self.base_llm {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_LLM)?,
        };

        let http = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .connect_timeout(self.connect_timeout.unwrap_or(DEFAULT_CONNECT_TIMEOUT))
            .build()
            .map_err(|e| ReportError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(ReportClient {
            http,
            base_news,
            news_api_key: self.news_api_key.unwrap_or_default(),
            base_llm,
            llm_api_key: self.llm_api_key.unwrap_or_default(),
            model: self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature: self.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            top_p: self.top_p.unwrap_or(DEFAULT_TOP_P),
            lookback_days: self.lookback_days.unwrap_or(DEFAULT_LOOKBACK_DAYS),
        })
    }
}
