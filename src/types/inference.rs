//! Types exchanged with the classification and generation models.

use serde::{Deserialize, Serialize};

/// Raw classifier output, before label resolution.
///
/// `label` is whatever the model emits: either a named label or a positional
/// `LABEL_<n>` token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawClassification {
    pub label: String,
    pub score: f64,
}

impl RawClassification {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// Resolved emotion with its confidence in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub label: String,
    pub confidence: f64,
}

/// Options for a single generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Maximum length of the generated sequence, in model tokens.
    pub max_length: usize,

    /// Sample instead of decoding greedily.
    pub do_sample: bool,

    /// Truncate inputs that exceed the model's context window.
    pub truncation: bool,
}

impl GenerateOptions {
    /// Greedy decoding with truncation enabled.
    pub fn greedy(max_length: usize) -> Self {
        Self {
            max_length,
            do_sample: false,
            truncation: true,
        }
    }
}

/// Response from text generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Generated text.
    pub text: String,

    /// Model used for generation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}
