use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{
    ANTHROPIC_PATH, ANTHROPIC_TEST_KEY, post_json, post_raw, settings_with_keys, spawn_app,
    spawn_app_with_mocks, spawn_app_with_mocks_and_settings,
    spawn_app_with_unreachable_upstreams,
};

fn mock_messages_response(text: &str) -> ResponseTemplate {
    let body = json!({
        "id": "msg_test",
        "type": "message",
        "role": "assistant",
        "model": "claude-sonnet-4-20250514",
        "content": [{ "type": "text", "text": text }],
        "stop_reason": "end_turn",
        "usage": { "input_tokens": 120, "output_tokens": 40 }
    });
    ResponseTemplate::new(200).set_body_json(body)
}

async fn suggestions(response: reqwest::Response) -> serde_json::Value {
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    body["suggestions"].clone()
}

#[tokio::test]
async fn suggest_returns_model_array_unchanged() {
    let app = spawn_app_with_mocks().await;

    Mock::given(method("POST"))
        .and(path(ANTHROPIC_PATH))
        .and(header("x-api-key", ANTHROPIC_TEST_KEY))
        .and(header("anthropic-version", "2023-06-01"))
        .and(body_partial_json(json!({ "max_tokens": 300 })))
        .respond_with(mock_messages_response(r#"["a","b","c","d","e"]"#))
        .expect(1)
        .mount(app.mock_server())
        .await;

    let response = post_json(&app, "/suggest-image", &json!({ "location": "Toronto, ON" })).await;

    assert_eq!(suggestions(response).await, json!(["a", "b", "c", "d", "e"]));
}

#[tokio::test]
async fn suggest_sends_location_in_prompt() {
    let app = spawn_app_with_mocks().await;

    Mock::given(method("POST"))
        .and(path(ANTHROPIC_PATH))
        .respond_with(mock_messages_response(r#"["Lisbon tram"]"#))
        .expect(1)
        .mount(app.mock_server())
        .await;

    let response = post_json(&app, "/suggest-image", &json!({ "location": "  Lisbon  " })).await;
    assert_eq!(suggestions(response).await, json!(["Lisbon tram"]));

    let requests = app
        .mock_server()
        .received_requests()
        .await
        .expect("request recording is enabled");
    let sent: serde_json::Value = requests[0].body_json().expect("request body is JSON");
    assert_eq!(sent["messages"][0]["role"], "user");
    let prompt = sent["messages"][0]["content"].as_str().unwrap_or_default();
    assert!(prompt.contains("at this location: Lisbon."), "prompt: {prompt}");
}

#[tokio::test]
async fn suggest_falls_back_on_invalid_json_reply() {
    let app = spawn_app_with_mocks().await;

    Mock::given(method("POST"))
        .and(path(ANTHROPIC_PATH))
        .respond_with(mock_messages_response("Here are some great search terms!"))
        .mount(app.mock_server())
        .await;

    let response = post_json(&app, "/suggest-image", &json!({ "location": "X" })).await;

    assert_eq!(
        suggestions(response).await,
        json!(["X skyline", "X cityscape", "X landmark"])
    );
}

#[tokio::test]
async fn suggest_falls_back_on_empty_content() {
    let app = spawn_app_with_mocks().await;

    Mock::given(method("POST"))
        .and(path(ANTHROPIC_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "content": [] })))
        .mount(app.mock_server())
        .await;

    let response = post_json(&app, "/suggest-image", &json!({ "location": "Austin" })).await;

    assert_eq!(
        suggestions(response).await,
        json!(["Austin skyline", "Austin cityscape", "Austin landmark"])
    );
}

#[tokio::test]
async fn suggest_falls_back_on_unexpected_response_shape() {
    let app = spawn_app_with_mocks().await;

    Mock::given(method("POST"))
        .and(path(ANTHROPIC_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(app.mock_server())
        .await;

    let response = post_json(&app, "/suggest-image", &json!({ "location": "Oslo" })).await;

    assert_eq!(
        suggestions(response).await,
        json!(["Oslo skyline", "Oslo cityscape", "Oslo landmark"])
    );
}

#[tokio::test]
async fn suggest_with_blank_location_skips_external_call() {
    let app = spawn_app_with_mocks().await;

    Mock::given(method("POST"))
        .and(path(ANTHROPIC_PATH))
        .respond_with(mock_messages_response("[]"))
        .expect(0)
        .mount(app.mock_server())
        .await;

    for location in ["", "   "] {
        let response = post_json(&app, "/suggest-image", &json!({ "location": location })).await;
        assert_eq!(suggestions(response).await, json!([]));
    }

    let response = post_raw(&app, "/suggest-image", "not json").await;
    assert_eq!(suggestions(response).await, json!([]));

    app.mock_server().verify().await;
}

#[tokio::test]
async fn suggest_without_api_key_returns_configuration_error() {
    let app = spawn_app_with_mocks_and_settings(settings_with_keys(None, Some("pexels"))).await;

    Mock::given(method("POST"))
        .and(path(ANTHROPIC_PATH))
        .respond_with(mock_messages_response("[]"))
        .expect(0)
        .mount(app.mock_server())
        .await;

    let response = post_json(&app, "/suggest-image", &json!({ "location": "Toronto" })).await;

    assert_eq!(response.status(), 500);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "ANTHROPIC_API_KEY not configured");

    app.mock_server().verify().await;
}

#[tokio::test]
async fn suggest_without_api_key_and_blank_location_returns_empty() {
    let app = spawn_app().await;

    let response = post_json(&app, "/suggest-image", &json!({ "location": " " })).await;
    assert_eq!(suggestions(response).await, json!([]));
}

#[tokio::test]
async fn suggest_upstream_error_is_generic() {
    let app = spawn_app_with_mocks().await;

    Mock::given(method("POST"))
        .and(path(ANTHROPIC_PATH))
        .respond_with(
            ResponseTemplate::new(529)
                .set_body_json(json!({ "type": "error", "error": { "type": "overloaded_error" } })),
        )
        .expect(1)
        .mount(app.mock_server())
        .await;

    let response = post_json(&app, "/suggest-image", &json!({ "location": "Toronto" })).await;

    assert_eq!(response.status(), 500);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let message = body["error"].as_str().expect("error should be a string");
    assert!(!message.contains("overloaded"));
    assert!(!message.contains("529"));
}

#[tokio::test]
async fn suggest_connection_failure_is_generic_error() {
    let app = spawn_app_with_unreachable_upstreams().await;

    let response = post_json(&app, "/suggest-image", &json!({ "location": "Toronto" })).await;

    assert_eq!(response.status(), 500);
    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "Failed to get suggestions. Please try again.");
}
