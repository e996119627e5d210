use serde::{Deserialize, Serialize};

use crate::prompt::ChatMessage;

#[derive(Serialize)]
pub(crate) struct ChatCompletionRequest<'a> {
    pub(crate) model: &'a str,
    pub(crate) messages: &'a [ChatMessage],
    pub(crate) temperature: f32,
    pub(crate) top_p: f32,
}

#[derive(Deserialize)]
pub(crate) struct ChatCompletionResponse {
    pub(crate) choices: Option<Vec<Choice>>,
}

#[derive(Deserialize)]
pub(crate) struct Choice {
    pub(crate) message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
pub(crate) struct ChoiceMessage {
    pub(crate) content: Option<String>,
}

/// OpenAI-style error body: `{"error": {"message": "..."}}`.
#[derive(Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub(crate) error: Option<ErrorBody>,
}

#[derive(Deserialize)]
pub(crate) struct ErrorBody {
    pub(crate) message: Option<String>,
}
