//! Emotion label resolution.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, instrument, warn};

use crate::{EmosumError, Result};
use crate::model::ModelManager;
use crate::telemetry;
use crate::types::{ClassificationResult, NEUTRAL, emotion_at, is_known_emotion};

use super::record_request;

/// Prefix of positional classifier labels (`LABEL_<n>`).
const POSITIONAL_PREFIX: &str = "LABEL_";

/// Map a raw classifier label onto the emotion table.
///
/// `LABEL_<n>` resolves to table entry `n`, or `"neutral"` when `n` is out of
/// range. A suffix that is not an integer fails with
/// [`EmosumError::UnexpectedLabel`]. Any other label is returned unchanged.
pub fn normalize_label(raw: &str) -> Result<String> {
    if !raw.starts_with(POSITIONAL_PREFIX) {
        return Ok(raw.to_string());
    }

    let suffix = raw.rsplit('_').next().unwrap_or_default();
    let index: i64 = suffix
        .parse()
        .map_err(|_| EmosumError::UnexpectedLabel(raw.to_string()))?;

    let label = usize::try_from(index)
        .ok()
        .and_then(emotion_at)
        .unwrap_or(NEUTRAL);
    Ok(label.to_string())
}

/// Turns an override or classifier output into a [`ClassificationResult`].
#[derive(Clone)]
pub struct LabelResolver {
    models: Arc<ModelManager>,
}

impl LabelResolver {
    pub fn new(models: Arc<ModelManager>) -> Self {
        Self { models }
    }

    /// Resolve the emotion for `text`.
    ///
    /// An override that exactly matches a canonical label wins with
    /// confidence 1.0 and the classifier is not called. Unknown overrides
    /// are ignored.
    #[instrument(skip(self, text, emotion_override), fields(operation = "resolve"))]
    pub async fn resolve(
        &self,
        text: &str,
        emotion_override: Option<&str>,
    ) -> Result<ClassificationResult> {
        if let Some(emotion) = emotion_override {
            if is_known_emotion(emotion) {
                metrics::counter!(telemetry::EMOTION_RESOLVED_TOTAL, "source" => "override")
                    .increment(1);
                return Ok(ClassificationResult {
                    label: emotion.to_string(),
                    confidence: 1.0,
                });
            }
            if !emotion.is_empty() {
                warn!(emotion_override = emotion, "unknown emotion override, classifying instead");
            }
        }

        let classifier = self.models.classifier().await?;

        let start = Instant::now();
        let raw = classifier.classify(text).await;
        record_request("classify", start, raw.is_ok());
        let raw = raw?;

        let label = normalize_label(&raw.label)?;
        debug!(raw_label = %raw.label, %label, score = raw.score, "classified");
        metrics::counter!(telemetry::EMOTION_RESOLVED_TOTAL, "source" => "classifier")
            .increment(1);

        Ok(ClassificationResult {
            label,
            confidence: raw.score,
        })
    }
}
