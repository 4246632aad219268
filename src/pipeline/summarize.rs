//! Summarization orchestration.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{info, instrument};

use crate::model::ModelManager;
use crate::types::{GenerateOptions, MIN_TEXT_LENGTH, SummarizeRequest, SummarizeResponse};
use crate::{EmosumError, Result};

use super::{LabelResolver, record_request};

/// Prefix `text` with the emotion tag the summarization model is trained on.
pub fn tagged_prompt(emotion: &str, text: &str) -> String {
    format!("<{emotion}>: {text}")
}

/// Seconds rounded to two decimal places.
pub fn round_seconds(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 100.0).round() / 100.0
}

/// Resolves an emotion, generates a tagged summary, and reports metrics.
#[derive(Clone)]
pub struct Summarizer {
    models: Arc<ModelManager>,
    resolver: LabelResolver,
}

impl Summarizer {
    pub fn new(models: Arc<ModelManager>) -> Self {
        Self {
            resolver: LabelResolver::new(Arc::clone(&models)),
            models,
        }
    }

    pub fn models(&self) -> &ModelManager {
        &self.models
    }

    /// Summarize `request.text` conditioned on its emotion.
    ///
    /// Fails with [`EmosumError::TextTooShort`] before any model call when the
    /// text has fewer than [`MIN_TEXT_LENGTH`] characters.
    #[instrument(skip(self, request), fields(operation = "summarize", max_length = request.max_length))]
    pub async fn summarize(&self, request: &SummarizeRequest) -> Result<SummarizeResponse> {
        let start = Instant::now();
        let result = self.run(request, start).await;
        record_request("summarize", start, result.is_ok());
        result
    }

    async fn run(&self, request: &SummarizeRequest, start: Instant) -> Result<SummarizeResponse> {
        let input_length = request.text.chars().count();
        if input_length < MIN_TEXT_LENGTH {
            return Err(EmosumError::TextTooShort);
        }

        let emotion = self
            .resolver
            .resolve(&request.text, request.emotion_override.as_deref())
            .await?;

        let prompt = tagged_prompt(&emotion.label, &request.text);
        let generator = self.models.generator().await?;

        let generate_start = Instant::now();
        let generated = generator
            .generate(&prompt, &GenerateOptions::greedy(request.max_length))
            .await;
        record_request("generate", generate_start, generated.is_ok());
        let summary = generated?.text;

        let processing_time = round_seconds(start.elapsed());
        let summary_length = summary.chars().count();

        info!(
            emotion = %emotion.label,
            confidence = emotion.confidence,
            processing_time,
            input_length,
            summary_length,
            "summary generated"
        );

        Ok(SummarizeResponse {
            summary,
            detected_emotion: emotion.label,
            emotion_confidence: emotion.confidence,
            processing_time,
            input_length,
            summary_length,
        })
    }
}
