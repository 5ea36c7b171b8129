// Gemini provider against a mock HTTP server

use brainstorm::providers::{GeminiProvider, TextGenerator};
use mockito::Matcher;

const PATH: &str = "/models/gemini-1.5-flash:generateContent";

fn provider(base_url: &str) -> GeminiProvider {
    GeminiProvider::new("test-key".to_string(), None)
        .expect("client")
        .with_base_url(base_url)
}

#[tokio::test]
async fn test_generate_returns_candidate_text() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .match_header("x-goog-api-key", "test-key")
        .match_query(Matcher::Any)
        .match_body(Matcher::PartialJson(serde_json::json!({
            "contents": [{"parts": [{"text": "Think about rivers"}]}]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"candidates":[{"content":{"parts":[{"text":"1. Floating "},{"text":"gardens"}]},"finishReason":"STOP"}]}"#,
        )
        .create_async()
        .await;

    let text = provider(&server.url())
        .generate("Think about rivers")
        .await
        .unwrap();

    assert_eq!(text, "1. Floating gardens");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_generate_surfaces_http_errors() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", PATH)
        .match_query(Matcher::Any)
        .with_status(429)
        .with_body(r#"{"error":{"message":"Resource has been exhausted"}}"#)
        .expect(1)
        .create_async()
        .await;

    let err = provider(&server.url()).generate("hi").await.unwrap_err();
    assert!(err.to_string().contains("429"));
    // Exactly one call: failures are not retried
    mock.assert_async().await;
}

#[tokio::test]
async fn test_generate_rejects_empty_candidates() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"candidates":[]}"#)
        .create_async()
        .await;

    assert!(provider(&server.url()).generate("hi").await.is_err());
}

#[tokio::test]
async fn test_custom_model_changes_path() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/models/gemini-1.5-pro:generateContent")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"candidates":[{"content":{"parts":[{"text":"ok"}]}}]}"#)
        .create_async()
        .await;

    let text = provider(&server.url())
        .with_model("gemini-1.5-pro")
        .generate("hi")
        .await
        .unwrap();
    assert_eq!(text, "ok");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_transport_error_does_not_leak_api_key() {
    // Nothing listens on port 1, so the request fails before any response
    let provider = GeminiProvider::new("AIza-SECRET-KEY".to_string(), None)
        .expect("client")
        .with_base_url("http://127.0.0.1:1");

    let err = provider.generate("hi").await.unwrap_err();
    let logged = format!("{:#}", err);
    assert!(logged.contains("Failed to send request to Gemini API"));
    assert!(!logged.contains("AIza-SECRET-KEY"), "key leaked: {logged}");
}
