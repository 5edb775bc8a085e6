use std::time::Duration;

use bannerforge::application::Settings;
use bannerforge::application::routes::app_router;
use bannerforge::application::state::{AppState, AppStateConfig};
use tokio::net::TcpListener;
use tokio::task::AbortHandle;

pub const ANTHROPIC_TEST_KEY: &str = "sk-ant-test-key";
pub const PEXELS_TEST_KEY: &str = "pexels-test-key";
pub const ANTHROPIC_PATH: &str = "/v1/messages";
pub const PEXELS_PATH: &str = "/v1/search";

pub struct TestApp {
    pub address: String,
    #[allow(dead_code)]
    pub mock_server: Option<wiremock::MockServer>,
    server_handle: AbortHandle,
}

impl TestApp {
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/api{}", self.address, path)
    }

    pub fn page_url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }

    #[allow(dead_code)]
    pub fn mock_server(&self) -> &wiremock::MockServer {
        self.mock_server
            .as_ref()
            .expect("app was spawned without a mock server")
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        self.server_handle.abort();
    }
}

pub fn settings_with_keys(anthropic: Option<&str>, pexels: Option<&str>) -> Settings {
    Settings::new(
        "test-secret".to_string(),
        anthropic.map(str::to_string),
        pexels.map(str::to_string),
        Duration::ZERO,
    )
}

/// App with no API keys, pointed at the real endpoints (which it never calls).
pub async fn spawn_app() -> TestApp {
    spawn_app_with_settings(Settings::default()).await
}

pub async fn spawn_app_with_settings(settings: Settings) -> TestApp {
    spawn_app_inner(AppStateConfig::with_settings(settings), None).await
}

/// App with both API keys set and both endpoints served by one mock server.
pub async fn spawn_app_with_mocks() -> TestApp {
    spawn_app_with_mocks_and_settings(settings_with_keys(
        Some(ANTHROPIC_TEST_KEY),
        Some(PEXELS_TEST_KEY),
    ))
    .await
}

pub async fn spawn_app_with_mocks_and_settings(settings: Settings) -> TestApp {
    let mock_server = wiremock::MockServer::start().await;

    let config = AppStateConfig {
        anthropic_url: format!("{}{ANTHROPIC_PATH}", mock_server.uri()),
        pexels_url: format!("{}{PEXELS_PATH}", mock_server.uri()),
        ..AppStateConfig::with_settings(settings)
    };

    spawn_app_inner(config, Some(mock_server)).await
}

/// App with both API keys set and both endpoints pointed at a port nothing
/// listens on, so every outbound call fails at the transport level.
#[allow(dead_code)]
pub async fn spawn_app_with_unreachable_upstreams() -> TestApp {
    let closed =
        std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind to random port");
    let base = format!(
        "http://{}",
        closed.local_addr().expect("Failed to get local address")
    );
    drop(closed);

    let config = AppStateConfig {
        anthropic_url: format!("{base}{ANTHROPIC_PATH}"),
        pexels_url: format!("{base}{PEXELS_PATH}"),
        ..AppStateConfig::with_settings(settings_with_keys(
            Some(ANTHROPIC_TEST_KEY),
            Some(PEXELS_TEST_KEY),
        ))
    };

    spawn_app_inner(config, None).await
}

async fn spawn_app_inner(
    config: AppStateConfig,
    mock_server: Option<wiremock::MockServer>,
) -> TestApp {
    let app = app_router(AppState::new(config));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");

    let local_addr = listener.local_addr().expect("Failed to get local address");
    let address = format!("http://{local_addr}");

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Server failed to start");
    })
    .abort_handle();

    TestApp {
        address,
        mock_server,
        server_handle,
    }
}

/// POST a JSON payload and return the raw response.
pub async fn post_json(
    app: &TestApp,
    path: &str,
    payload: &serde_json::Value,
) -> reqwest::Response {
    reqwest::Client::new()
        .post(app.api_url(path))
        .json(payload)
        .send()
        .await
        .unwrap_or_else(|e| panic!("failed to POST {path}: {e}"))
}

/// POST a raw body labelled as JSON, for malformed-payload tests.
pub async fn post_raw(app: &TestApp, path: &str, body: &'static str) -> reqwest::Response {
    reqwest::Client::new()
        .post(app.api_url(path))
        .header("content-type", "application/json")
        .body(body)
        .send()
        .await
        .unwrap_or_else(|e| panic!("failed to POST {path}: {e}"))
}

/// Asserts that the response carries every cache-suppression header.
pub fn assert_no_store(response: &reqwest::Response) {
    let header = |name: &str| {
        response
            .headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    assert_eq!(
        header("cache-control").as_deref(),
        Some("no-cache, no-store, must-revalidate"),
        "unexpected cache-control on {}",
        response.url()
    );
    assert_eq!(header("pragma").as_deref(), Some("no-cache"));
    assert_eq!(header("expires").as_deref(), Some("0"));
}

/// Asserts that the body contains full HTML page structure
pub fn assert_full_page(body: &str) {
    assert!(
        body.contains("<!DOCTYPE") || body.contains("<html"),
        "Expected full HTML page with DOCTYPE or <html> tag"
    );
}
