use serde_json::Value;

/// Search terms as returned by the model. Elements are passed through
/// untouched, so they are kept as raw JSON values.
pub type Suggestions = Vec<Value>;

/// Deterministic search terms used when the model reply cannot be parsed.
pub fn fallback_suggestions(location: &str) -> Suggestions {
    ["skyline", "cityscape", "landmark"]
        .into_iter()
        .map(|suffix| Value::String(format!("{location} {suffix}")))
        .collect()
}
