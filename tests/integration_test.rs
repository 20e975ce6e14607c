//! Integration tests for promptwire
//!
//! Exercises the dispatcher against a mock HTTP server: per-provider
//! request shapes and response extraction, endpoint overrides, error
//! statuses, and the raw URL fetch path.

use promptwire::{ClientConfig, Dispatcher, PromptwireError};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn dispatcher_for(provider: &str, base_url: &str) -> Dispatcher {
    let config = ClientConfig::new(provider)
        .with_api_key("test-key")
        .with_base_url(base_url);
    Dispatcher::new(config).unwrap()
}

fn openai_style_body(content: &str) -> serde_json::Value {
    json!({
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

#[tokio::test]
async fn test_openai_ask_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("Authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "gpt-3.5-turbo",
            "messages": [{"role": "user", "content": "hello"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(openai_style_body("hi there")))
        .mount(&mock_server)
        .await;

    let dispatcher = dispatcher_for("openai", &mock_server.uri());
    let answer = dispatcher.ask("hello").await.unwrap();
    assert_eq!(answer, "hi there");
}

#[tokio::test]
async fn test_gemini_ask_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(query_param("key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{"parts": [{"text": "hello"}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"parts": [{"text": "gemini says hi"}]}}]
        })))
        .mount(&mock_server)
        .await;

    let dispatcher = dispatcher_for("gemini", &mock_server.uri());
    let answer = dispatcher.ask("hello").await.unwrap();
    assert_eq!(answer, "gemini says hi");
}

#[tokio::test]
async fn test_deepseek_ask_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("Authorization", "Bearer test-key"))
        .and(body_partial_json(json!({
            "model": "deepseek-chat",
            "messages": [{"role": "user", "content": "hello"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(openai_style_body("deepseek here")))
        .mount(&mock_server)
        .await;

    let dispatcher = dispatcher_for("deepseek", &mock_server.uri());
    let answer = dispatcher.ask("hello").await.unwrap();
    assert_eq!(answer, "deepseek here");
}

#[tokio::test]
async fn test_base_url_override_is_used_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/custom/endpoint"))
        .respond_with(ResponseTemplate::new(200).set_body_json(openai_style_body("custom")))
        .mount(&mock_server)
        .await;

    let base_url = format!("{}/custom/endpoint", mock_server.uri());
    let dispatcher = dispatcher_for("openai", &base_url);
    assert_eq!(dispatcher.ask("hello").await.unwrap(), "custom");

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.path(), "/custom/endpoint");
}

#[tokio::test]
async fn test_ask_server_error_carries_status() {
    for provider in ["openai", "gemini", "deepseek"] {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
            .mount(&mock_server)
            .await;

        let dispatcher = dispatcher_for(provider, &mock_server.uri());
        let err = dispatcher.ask("hello").await.unwrap_err();
        match err {
            PromptwireError::HttpStatus { status, message } => {
                assert_eq!(status, 500, "provider {provider}");
                assert_eq!(message, "upstream exploded");
            }
            other => panic!("unexpected error for {provider}: {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_ask_malformed_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
        .mount(&mock_server)
        .await;

    let dispatcher = dispatcher_for("openai", &mock_server.uri());
    let err = dispatcher.ask("hello").await.unwrap_err();
    assert!(matches!(err, PromptwireError::MalformedResponse { .. }));
}

#[tokio::test]
async fn test_missing_api_key_makes_no_http_call() {
    let mock_server = MockServer::start().await;

    let config = ClientConfig::new("openai").with_base_url(mock_server.uri());
    let dispatcher = Dispatcher::new(config).unwrap();

    let err = dispatcher.ask("hello").await.unwrap_err();
    match err {
        PromptwireError::MissingApiKey(provider) => assert_eq!(provider, "openai"),
        other => panic!("unexpected error: {other:?}"),
    }

    let requests = mock_server.received_requests().await.unwrap();
    assert!(requests.is_empty(), "credential check must precede any request");
}

#[tokio::test]
async fn test_unknown_provider() {
    let config = ClientConfig::new("llama-farm").with_api_key("test-key");
    let dispatcher = Dispatcher::new(config).unwrap();

    let err = dispatcher.ask("hello").await.unwrap_err();
    match err {
        PromptwireError::UnknownProvider(name) => assert_eq!(name, "llama-farm"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_url_returns_body_unchanged() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/page.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("plain text body\n"))
        .mount(&mock_server)
        .await;

    let dispatcher = Dispatcher::new(ClientConfig::new("openai")).unwrap();
    let url = format!("{}/page.txt", mock_server.uri());
    assert_eq!(dispatcher.fetch_url(&url).await.unwrap(), "plain text body\n");
}

#[tokio::test]
async fn test_fetch_url_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("not here"))
        .mount(&mock_server)
        .await;

    let dispatcher = Dispatcher::new(ClientConfig::new("openai")).unwrap();
    let url = format!("{}/missing", mock_server.uri());
    let err = dispatcher.fetch_url(&url).await.unwrap_err();
    match err {
        PromptwireError::HttpStatus { status, .. } => assert_eq!(status, 404),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_model_override_is_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({"model": "gpt-4o-mini"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(openai_style_body("ok")))
        .mount(&mock_server)
        .await;

    let config = ClientConfig::new("openai")
        .with_api_key("test-key")
        .with_base_url(mock_server.uri())
        .with_model("gpt-4o-mini");
    let dispatcher = Dispatcher::new(config).unwrap();

    assert_eq!(dispatcher.ask("hello").await.unwrap(), "ok");
}
