use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::application::errors::{AppError, Upstream};
use crate::domain::suggestions::{Suggestions, fallback_suggestions};

pub const ANTHROPIC_URL: &str = "https://api.anthropic.com/v1/messages";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const USER_AGENT: &str = "Bannerforge/1.0";
const MAX_TOKENS: u32 = 300;

fn suggestion_prompt(location: &str) -> String {
    format!(
        "I need to find a stock photo for an email banner about a conference/trade show \
         at this location: {location}. \
         Give me 5 specific search terms I can use on stock photo sites like Unsplash, \
         Pexels, or Shutterstock to find a great background image. \
         Focus on the city skyline, landmarks, or venue. \
         Return ONLY a JSON array of strings, nothing else. \
         Example: [\"Toronto skyline sunset\", \"CN Tower cityscape\"]"
    )
}

// --- Public functions ---

/// Ask the model for stock-photo search terms for `location`.
///
/// Transport failures and error statuses are returned as errors. A reply
/// that is not a JSON array yields the location-based fallback instead.
pub async fn suggest_search_terms(
    client: &reqwest::Client,
    url: &str,
    api_key: &str,
    model: &str,
    location: &str,
) -> Result<Suggestions, AppError> {
    let prompt = suggestion_prompt(location);
    let reply = call_anthropic(client, url, api_key, model, &prompt).await?;
    Ok(parse_suggestions(reply.as_deref(), location))
}

/// Interpret the model's reply, falling back when it is missing or not a
/// JSON array.
pub fn parse_suggestions(reply: Option<&str>, location: &str) -> Suggestions {
    let Some(reply) = reply else {
        return fallback_suggestions(location);
    };

    match serde_json::from_str::<Value>(strip_code_fence(reply)) {
        Ok(Value::Array(items)) => items,
        Ok(other) => {
            warn!(kind = json_kind(&other), "model reply was not a JSON array");
            fallback_suggestions(location)
        }
        Err(err) => {
            warn!(error = %err, "model reply was not valid JSON");
            fallback_suggestions(location)
        }
    }
}

// --- Internal helpers ---

/// Returns the text of the first content block, or `None` when the body
/// does not look like a Messages API response.
async fn call_anthropic(
    client: &reqwest::Client,
    url: &str,
    api_key: &str,
    model: &str,
    prompt: &str,
) -> Result<Option<String>, AppError> {
    let request_body = MessagesRequest {
        model,
        max_tokens: MAX_TOKENS,
        messages: vec![Message {
            role: "user",
            content: prompt,
        }],
    };

    let response = client
        .post(url)
        .header("User-Agent", USER_AGENT)
        .header("x-api-key", api_key)
        .header("anthropic-version", ANTHROPIC_VERSION)
        .json(&request_body)
        .send()
        .await
        .map_err(|e| AppError::external(Upstream::TextGeneration, e.to_string()))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "(unreadable body)".to_string());
        return Err(AppError::external(
            Upstream::TextGeneration,
            format!("returned status {status}: {body}"),
        ));
    }

    let body = response.text().await.map_err(|e| {
        AppError::external(
            Upstream::TextGeneration,
            format!("failed to read response body: {e}"),
        )
    })?;

    let parsed: MessagesResponse = match serde_json::from_str(&body) {
        Ok(parsed) => parsed,
        Err(err) => {
            warn!(error = %err, "unexpected Messages API response shape");
            return Ok(None);
        }
    };

    let text = parsed
        .content
        .into_iter()
        .find_map(|block| match block {
            ContentBlock::Text { text } => Some(text),
            ContentBlock::Other => None,
        })
        .filter(|text| !text.trim().is_empty());

    Ok(text)
}

/// Models sometimes wrap JSON in a markdown fence despite being told not to.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();

    if let Some(after) = trimmed.strip_prefix("```json")
        && let Some(inner) = after.strip_suffix("```")
    {
        return inner.trim();
    }
    if let Some(after) = trimmed.strip_prefix("```")
        && let Some(inner) = after.strip_suffix("```")
    {
        return inner.trim();
    }

    trimmed
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// --- Messages API types ---

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum ContentBlock {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(other)]
    Other,
}
