use httpmock::{Method::POST, MockServer};
use serde_json::json;
use sentiment_report::{ReportError, ReportRequest, Role, SYSTEM_PROMPT, llm};

use crate::common::{self, LLM_KEY};

#[test]
fn request_pairs_system_prompt_with_document() {
    let request = ReportRequest::new("Definitions:\n");
    let messages = request.messages();

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].role, Role::System);
    assert_eq!(messages[0].content, SYSTEM_PROMPT);
    assert_eq!(messages[1].role, Role::User);
    assert_eq!(messages[1].content, "Definitions:\n");
    assert_eq!(request.document(), "Definitions:\n");
}

#[test]
fn system_prompt_forbids_jargon() {
    for word in ["bearish", "bullish", "sentiment score", "relevance score"] {
        assert!(SYSTEM_PROMPT.contains(word), "missing {word}");
    }
    assert!(SYSTEM_PROMPT.contains("professional yet approachable"));
}

#[tokio::test]
async fn completion_sends_model_parameters_and_both_messages() {
    let server = MockServer::start();
    let document = "Definitions:\n- Sentiment Score: a\n- Relevance Score: b\nNews Data:\n";

    let expected_payload = json!({
        "model": "llama-3.1-70b-versatile",
        "messages": [
            {"role": "system", "content": SYSTEM_PROMPT},
            {"role": "user", "content": document}
        ],
        "temperature": 0.5,
        "top_p": 0.9
    });

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/openai/v1/chat/completions")
            .header("authorization", format!("Bearer {LLM_KEY}"))
            .json_body(expected_payload);
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("chat_completion", "AAPL", "json"));
    });

    let client = common::client_for(&server);
    let text = llm::complete(&client, &ReportRequest::new(document), "AAPL")
        .await
        .unwrap();

    mock.assert();
    assert!(text.starts_with("**Apple Stock Report**"));
}

#[tokio::test]
async fn model_parameters_can_be_overridden() {
    let server = MockServer::start();
    let expected_payload = json!({
        "model": "llama-3.3-70b-versatile",
        "messages": [
            {"role": "system", "content": SYSTEM_PROMPT},
            {"role": "user", "content": "doc"}
        ],
        "temperature": 0.2,
        "top_p": 0.5
    });
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/openai/v1/chat/completions")
            .json_body(expected_payload);
        then.status(200)
            .header("content-type", "application/json")
            .body(common::completion_body("ok"));
    });

    let client = sentiment_report::ReportClient::builder()
        .base_llm(url::Url::parse(&server.url("/openai/v1/")).unwrap())
        .llm_api_key(LLM_KEY)
        .model("llama-3.3-70b-versatile")
        .temperature(0.2)
        .top_p(0.5)
        .build()
        .unwrap();

    let text = llm::complete(&client, &ReportRequest::new("doc"), "AAPL")
        .await
        .unwrap();
    mock.assert();
    assert_eq!(text, "ok");
}

#[tokio::test]
async fn provider_error_status_maps_to_generation() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/openai/v1/chat/completions");
        then.status(401)
            .header("content-type", "application/json")
            .body(r#"{"error": {"message": "Invalid API Key", "type": "invalid_request_error"}}"#);
    });
    let client = common::client_for(&server);

    let err = llm::complete(&client, &ReportRequest::new("doc"), "AAPL")
        .await
        .unwrap_err();
    mock.assert();

    match err {
        ReportError::Generation(msg) => {
            assert!(msg.contains("401"), "message was {msg}");
            assert!(msg.contains("Invalid API Key"), "message was {msg}");
        }
        other => panic!("expected Generation, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_choices_map_to_generation() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/openai/v1/chat/completions");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"id": "x", "choices": []}"#);
    });
    let client = common::client_for(&server);

    let err = llm::complete(&client, &ReportRequest::new("doc"), "AAPL")
        .await
        .unwrap_err();
    mock.assert();
    assert!(matches!(err, ReportError::Generation(_)), "got {err:?}");
}

#[tokio::test]
async fn non_json_completion_maps_to_generation() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path("/openai/v1/chat/completions");
        then.status(200).body("not json");
    });
    let client = common::client_for(&server);

    let err = llm::complete(&client, &ReportRequest::new("doc"), "AAPL")
        .await
        .unwrap_err();
    mock.assert();
    assert!(matches!(err, ReportError::Generation(_)), "got {err:?}");
}

#[tokio::test]
async fn first_choice_wins() {
    let server = MockServer::start();
    let body = json!({
        "choices": [
            {"index": 0, "message": {"role": "assistant", "content": "first"}},
            {"index": 1, "message": {"role": "assistant", "content": "second"}}
        ]
    })
    .to_string();
    let mock = common::mock_completion(&server, body);
    let client = common::client_for(&server);

    let text = llm::complete(&client, &ReportRequest::new("doc"), "AAPL")
        .await
        .unwrap();
    mock.assert();
    assert_eq!(text, "first");
}
