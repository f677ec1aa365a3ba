use serde::{Deserialize, Serialize};

/// A single quote as served by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub content: String,
    pub author: String,
    /// ISO date (`YYYY-MM-DD`) the quote belongs to
    pub date: String,
    /// Set by the service when the quote was picked from history instead of generated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_fallback: Option<bool>,
}

impl Quote {
    pub fn new(content: impl Into<String>, author: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            author: author.into(),
            date: date.into(),
            is_fallback: None,
        }
    }

    /// Author line as displayed under the quote
    pub fn attribution(&self) -> String {
        format!("—— {}", self.author)
    }

    /// Text placed on the clipboard by the copy action
    pub fn clipboard_text(&self) -> String {
        format!("{}\n{}", self.content, self.attribution())
    }
}

/// Response wrapper shared by every endpoint
///
/// Missing fields deserialize to their empty values, so an error body such as
/// `{"detail": "..."}` reads as an unsuccessful envelope without a message.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of the service health endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub version: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
