//! Request and response payloads for summarization.

use serde::{Deserialize, Deserializer, Serialize};

/// Minimum number of characters accepted for summarization.
pub const MIN_TEXT_LENGTH: usize = 50;

/// Default `max_length` when the caller omits it.
pub const DEFAULT_MAX_LENGTH: usize = 150;

fn default_max_length() -> usize {
    DEFAULT_MAX_LENGTH
}

/// Treat an explicit `null` the same as an absent field.
fn max_length_or_default<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<usize>::deserialize(deserializer)?.unwrap_or(DEFAULT_MAX_LENGTH))
}

/// A summarization request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizeRequest {
    /// Text to summarize; at least [`MIN_TEXT_LENGTH`] characters.
    pub text: String,

    /// Maximum summary length passed to the generation model.
    #[serde(
        default = "default_max_length",
        deserialize_with = "max_length_or_default"
    )]
    pub max_length: usize,

    /// Emotion to use instead of classifying the text.
    ///
    /// Only honoured when it exactly matches a canonical label.
    #[serde(default)]
    pub emotion_override: Option<String>,
}

impl SummarizeRequest {
    /// Create a request with the default `max_length` and no override.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            max_length: DEFAULT_MAX_LENGTH,
            emotion_override: None,
        }
    }

    /// Set max length.
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Set the emotion override.
    pub fn emotion_override(mut self, emotion: impl Into<String>) -> Self {
        self.emotion_override = Some(emotion.into());
        self
    }
}

/// Result of a summarization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
    pub detected_emotion: String,
    pub emotion_confidence: f64,
    /// Wall-clock seconds, rounded to 2 decimals.
    pub processing_time: f64,
    /// Input length in characters.
    pub input_length: usize,
    /// Summary length in characters.
    pub summary_length: usize,
}
