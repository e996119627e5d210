//! Chat-completion calls against an OpenAI-compatible provider.

mod api;
mod wire;

use crate::{ReportClient, ReportError, prompt::ReportRequest};

/// Sends `request` to the configured model and returns the first choice's text.
///
/// Model, temperature and top-p come from the client. `symbol` only labels
/// logs and recorded fixtures. One attempt is made; there is no fallback model.
///
/// # Errors
///
/// Returns `ReportError::Generation` if the request fails, the provider answers
/// with a non-success status, the body cannot be parsed, or no completion
/// content is present.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client, request), err, fields(model = %client.model())))]
pub async fn complete(
    client: &ReportClient,
    request: &ReportRequest,
    symbol: &str,
) -> Result<String, ReportError> {
    api::fetch_completion(client, request, symbol).await
}
