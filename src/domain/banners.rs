use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const DEFAULT_COLOR_TEXT: &str = "#FFFFFF";
pub const DEFAULT_COLOR_ICON: &str = "#FFFFFF";
pub const DEFAULT_COLOR_CTA_BG: &str = "#FCBA30";
pub const DEFAULT_COLOR_CTA_TEXT: &str = "#00274C";
pub const DEFAULT_FS_TITLE: &str = "28";
pub const DEFAULT_FS_SUBHEADING: &str = "15";
pub const DEFAULT_FS_DETAILS: &str = "16";
pub const DEFAULT_FS_CTA: &str = "15";

/// Banner parameters as submitted by the editor. Every field is optional;
/// [`BannerFields::resolve`] fills the gaps with the documented defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BannerFields {
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub subheading: Option<String>,
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub dates: Option<String>,
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub color_text: Option<String>,
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub color_icon: Option<String>,
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub color_cta_bg: Option<String>,
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub color_cta_text: Option<String>,
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub fs_title: Option<String>,
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub fs_subheading: Option<String>,
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub fs_details: Option<String>,
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub fs_cta: Option<String>,
}

/// A banner with every field resolved to a concrete value, ready for
/// template substitution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub event_name: String,
    pub subheading: String,
    pub location: String,
    pub dates: String,
    pub cta_text: String,
    pub image_url: String,
    pub logo_url: String,
    pub color_text: String,
    pub color_icon: String,
    pub color_cta_bg: String,
    pub color_cta_text: String,
    pub fs_title: String,
    pub fs_subheading: String,
    pub fs_details: String,
    pub fs_cta: String,
}

impl BannerFields {
    /// Substitute the default for every absent field. Provided values are
    /// kept verbatim, including empty strings.
    pub fn resolve(self) -> Banner {
        let or = |value: Option<String>, default: &str| value.unwrap_or_else(|| default.to_string());

        Banner {
            event_name: self.event_name.unwrap_or_default(),
            subheading: self.subheading.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            dates: self.dates.unwrap_or_default(),
            cta_text: self.cta_text.unwrap_or_default(),
            image_url: self.image_url.unwrap_or_default(),
            logo_url: self.logo_url.unwrap_or_default(),
            color_text: or(self.color_text, DEFAULT_COLOR_TEXT),
            color_icon: or(self.color_icon, DEFAULT_COLOR_ICON),
            color_cta_bg: or(self.color_cta_bg, DEFAULT_COLOR_CTA_BG),
            color_cta_text: or(self.color_cta_text, DEFAULT_COLOR_CTA_TEXT),
            fs_title: or(self.fs_title, DEFAULT_FS_TITLE),
            fs_subheading: or(self.fs_subheading, DEFAULT_FS_SUBHEADING),
            fs_details: or(self.fs_details, DEFAULT_FS_DETAILS),
            fs_cta: or(self.fs_cta, DEFAULT_FS_CTA),
        }
    }
}

impl Default for Banner {
    fn default() -> Self {
        BannerFields::default().resolve()
    }
}

/// Accept any JSON scalar as a field value.
///
/// The editor sends strings, but font sizes posted by hand are often bare
/// numbers. Numbers and booleans keep their JSON text; `null`, arrays and
/// objects are treated as if the field was missing.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}
