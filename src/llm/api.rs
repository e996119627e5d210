use crate::{
    core::{ReportClient, ReportError, net},
    llm::wire,
    prompt::ReportRequest,
};

pub(super) async fn fetch_completion(
    client: &ReportClient,
    request: &ReportRequest,
    symbol: &str,
) -> Result<String, ReportError> {
    let url = client.base_llm().join("chat/completions")?;

    let payload = wire::ChatCompletionRequest {
        model: client.model(),
        messages: request.messages(),
        temperature: client.temperature(),
        top_p: client.top_p(),
    };

    let resp = client
        .http()
        .post(url)
        .bearer_auth(client.llm_api_key())
        .json(&payload)
        .send()
        .await
        .map_err(|e| ReportError::Generation(format!("completion request failed: {e}")))?;

    let status = resp.status();
    let endpoint = resp.url().to_string();
    let body = net::get_text(resp, "chat_completion", symbol, "json")
        .await
        .map_err(|e| ReportError::Generation(format!("failed to read completion body: {e}")))?;

    if !status.is_success() {
        let detail = serde_json::from_str::<wire::ErrorEnvelope>(&body)
            .ok()
            .and_then(|env| env.error)
            .and_then(|err| err.message)
            .map(|msg| format!(": {msg}"))
            .unwrap_or_default();
        return Err(ReportError::Generation(format!(
            "unexpected response status {} at {endpoint}{detail}",
            status.as_u16()
        )));
    }

    let parsed: wire::ChatCompletionResponse = serde_json::from_str(&body)
        .map_err(|e| ReportError::Generation(format!("completion is not valid JSON: {e}")))?;

    let content = parsed
        .choices
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or_else(|| ReportError::Generation("completion contained no choices".into()))?
        .message
        .and_then(|m| m.content)
        .ok_or_else(|| ReportError::Generation("first choice has no message content".into()))?;

    #[cfg(feature = "tracing")]
    tracing::debug!(symbol, chars = content.len(), "received completion");

    Ok(content)
}
