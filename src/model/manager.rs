//! Model manager for lazy, once-only handle creation.
//!
//! Each handle lives in a `tokio::sync::OnceCell`: the first request runs the
//! loader, concurrent first requests wait for that same load, and every later
//! request reuses the handle for the life of the process.

use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::debug;

use crate::Result;
use crate::providers::{ClassifyProvider, GenerateProvider};
use crate::telemetry;

use super::ModelLoader;

/// Default emotion classification model.
pub const DEFAULT_EMOTION_MODEL: &str = "ymeka2000/emotion-classifier";

/// Default emotion-conditioned summarization model.
pub const DEFAULT_SUMMARIZER_MODEL: &str = "ymeka2000/emotion-bart";

/// Configuration for the model manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelManagerConfig {
    /// Model ID for emotion classification.
    pub emotion_model: String,

    /// Model ID for tagged-prompt summarization.
    pub summarizer_model: String,
}

impl Default for ModelManagerConfig {
    fn default() -> Self {
        Self {
            emotion_model: DEFAULT_EMOTION_MODEL.to_string(),
            summarizer_model: DEFAULT_SUMMARIZER_MODEL.to_string(),
        }
    }
}

/// Information about currently loaded models.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedModels {
    /// Loaded classifier model, if any.
    pub classifier: Option<String>,

    /// Loaded generator model, if any.
    pub generator: Option<String>,
}

/// Holds the process-wide classifier and generator handles.
pub struct ModelManager {
    loader: Arc<dyn ModelLoader>,
    config: ModelManagerConfig,
    classifier: OnceCell<Arc<dyn ClassifyProvider>>,
    generator: OnceCell<Arc<dyn GenerateProvider>>,
}

impl ModelManager {
    /// Create a new model manager with the given loader and configuration.
    pub fn new(loader: Arc<dyn ModelLoader>, config: ModelManagerConfig) -> Self {
        Self {
            loader,
            config,
            classifier: OnceCell::new(),
            generator: OnceCell::new(),
        }
    }

    /// Create a model manager with default model IDs.
    pub fn with_defaults(loader: Arc<dyn ModelLoader>) -> Self {
        Self::new(loader, ModelManagerConfig::default())
    }

    pub fn config(&self) -> &ModelManagerConfig {
        &self.config
    }

    /// Get or lazily load the emotion classifier.
    pub async fn classifier(&self) -> Result<Arc<dyn ClassifyProvider>> {
        let loader = &self.loader;
        let model = self.config.emotion_model.as_str();
        let handle = self
            .classifier
            .get_or_try_init(|| async move {
                debug!(loader = loader.name(), %model, "loading classifier");
                metrics::counter!(telemetry::MODEL_LOADS_TOTAL, "model_kind" => "classifier")
                    .increment(1);
                loader.load_classifier(model).await
            })
            .await?;
        Ok(Arc::clone(handle))
    }

    /// Get or lazily load the summarization generator.
    pub async fn generator(&self) -> Result<Arc<dyn GenerateProvider>> {
        let loader = &self.loader;
        let model = self.config.summarizer_model.as_str();
        let handle = self
            .generator
            .get_or_try_init(|| async move {
                debug!(loader = loader.name(), %model, "loading generator");
                metrics::counter!(telemetry::MODEL_LOADS_TOTAL, "model_kind" => "generator")
                    .increment(1);
                loader.load_generator(model).await
            })
            .await?;
        Ok(Arc::clone(handle))
    }

    /// Models loaded so far.
    pub fn loaded_models(&self) -> LoadedModels {
        LoadedModels {
            classifier: self.classifier.get().map(|c| c.model().to_string()),
            generator: self.generator.get().map(|g| g.model().to_string()),
        }
    }
}
