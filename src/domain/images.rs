use serde::{Deserialize, Serialize};

/// A stock photo reduced to what the editor needs to preview and use it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageResult {
    pub id: u64,
    /// Medium-sized rendition shown in the search grid.
    pub thumb: String,
    /// Landscape rendition used as the banner background.
    pub full: String,
    pub photographer: String,
    pub alt: String,
}
