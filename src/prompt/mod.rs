//! The two-message prompt sent to the language model.

use serde::{Deserialize, Serialize};

/// Instruction given to the model as the system message of every request.
pub const SYSTEM_PROMPT: &str = "You are an expert financial analyst specializing in stock market reports. \
Your task is to create a concise, easy-to-understand stock report about the selected company. \
The report should focus on the news highlights, potential implications for investors, and sentiment analysis. \
Use plain language, and avoid technical jargon such as bearish, bullish, sentiment score, and relevance score. \
Ensure the tone is professional yet approachable, catering to an audience with basic investment knowledge.";

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// A single `{role, content}` chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// The system instruction paired with one structured document.
///
/// Built fresh for each run; nothing carries over between requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRequest {
    messages: [ChatMessage; 2],
}

impl ReportRequest {
    /// Pairs [`SYSTEM_PROMPT`] with `document` as the user message.
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            messages: [
                ChatMessage {
                    role: Role::System,
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: Role::User,
                    content: document.into(),
                },
            ],
        }
    }

    /// Both messages, system first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// The structured document carried as the user message.
    pub fn document(&self) -> &str {
        &self.messages[1].content
    }
}
