use std::sync::Arc;
use std::time::Duration;

use crate::application::settings::Settings;
use crate::infrastructure::{ai, pexels};

/// Client-wide timeout for outbound calls that do not set their own.
const HTTP_CLIENT_TIMEOUT: Duration = Duration::from_secs(60);

/// Settings plus the external endpoints, which tests point at mock servers.
pub struct AppStateConfig {
    pub settings: Settings,
    pub anthropic_url: String,
    pub anthropic_model: String,
    pub pexels_url: String,
}

impl AppStateConfig {
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            anthropic_url: ai::ANTHROPIC_URL.to_string(),
            anthropic_model: ai::DEFAULT_MODEL.to_string(),
            pexels_url: pexels::PEXELS_SEARCH_URL.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub http_client: reqwest::Client,
    pub anthropic_url: Arc<str>,
    pub anthropic_model: Arc<str>,
    pub pexels_url: Arc<str>,
}

impl AppState {
    pub fn new(config: AppStateConfig) -> Self {
        Self {
            settings: Arc::new(config.settings),
            #[allow(clippy::expect_used)]
            http_client: reqwest::ClientBuilder::new()
                .timeout(HTTP_CLIENT_TIMEOUT)
                .build()
                .expect("failed to build HTTP client"),
            anthropic_url: config.anthropic_url.into(),
            anthropic_model: config.anthropic_model.into(),
            pexels_url: config.pexels_url.into(),
        }
    }
}
