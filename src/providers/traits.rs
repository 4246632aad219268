//! Provider traits for the two model capabilities.
//!
//! Each provider is bound to a single model when it is created, so callers
//! only pass the input text. The [`ModelManager`](crate::model::ModelManager)
//! hands out providers as `Arc<dyn ...>` handles shared across requests.

use async_trait::async_trait;

use crate::Result;
use crate::types::{GenerateOptions, GenerateResponse, RawClassification};

// ============================================================================
// Classification Provider
// ============================================================================

/// Provider for single-label text classification.
#[async_trait]
pub trait ClassifyProvider: Send + Sync {
    /// Provider name for logging/debugging.
    fn name(&self) -> &str;

    /// Model this provider is bound to.
    fn model(&self) -> &str;

    /// Classify `text`, returning the top label and its score.
    ///
    /// The label is returned exactly as the model emits it.
    async fn classify(&self, text: &str) -> Result<RawClassification>;
}

// ============================================================================
// Generate Provider
// ============================================================================

/// Provider for single-turn text-to-text generation.
#[async_trait]
pub trait GenerateProvider: Send + Sync {
    /// Provider name for logging/debugging.
    fn name(&self) -> &str;

    /// Model this provider is bound to.
    fn model(&self) -> &str;

    /// Non-streaming text generation.
    async fn generate(&self, prompt: &str, options: &GenerateOptions) -> Result<GenerateResponse>;
}
