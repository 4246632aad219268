//! Mock providers and loaders shared by integration tests.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use emosum::model::{ModelLoader, ModelManager, ModelManagerConfig};
use emosum::providers::{ClassifyProvider, GenerateProvider};
use emosum::{
    EmosumError, GenerateOptions, GenerateResponse, RawClassification, Result, Summarizer,
};

/// Text of exactly `len` characters.
pub fn text_of_len(len: usize) -> String {
    "a".repeat(len)
}

// ============================================================================
// Mock classifier
// ============================================================================

pub struct MockClassifier {
    result: Option<RawClassification>,
    calls: AtomicUsize,
}

impl MockClassifier {
    pub fn returning(label: &str, score: f64) -> Self {
        Self {
            result: Some(RawClassification::new(label, score)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            result: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ClassifyProvider for MockClassifier {
    fn name(&self) -> &str {
        "mock-classify"
    }

    fn model(&self) -> &str {
        "mock/classifier"
    }

    async fn classify(&self, _text: &str) -> Result<RawClassification> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone().ok_or(EmosumError::Api {
            status: 500,
            message: "classifier exploded".to_string(),
        })
    }
}

// ============================================================================
// Mock generator
// ============================================================================

pub struct MockGenerator {
    reply: Option<String>,
    requests: Mutex<Vec<(String, GenerateOptions)>>,
}

impl MockGenerator {
    pub fn returning(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Prompts and options received so far.
    pub fn requests(&self) -> Vec<(String, GenerateOptions)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerateProvider for MockGenerator {
    fn name(&self) -> &str {
        "mock-generate"
    }

    fn model(&self) -> &str {
        "mock/generator"
    }

    async fn generate(&self, prompt: &str, options: &GenerateOptions) -> Result<GenerateResponse> {
        self.requests
            .lock()
            .unwrap()
            .push((prompt.to_string(), options.clone()));
        match &self.reply {
            Some(text) => Ok(GenerateResponse {
                text: text.clone(),
                model: Some("mock/generator".to_string()),
            }),
            None => Err(EmosumError::ModelNotFound("mock/generator".to_string())),
        }
    }
}

// ============================================================================
// Mock loader
// ============================================================================

pub struct MockLoader {
    pub classifier: Arc<MockClassifier>,
    pub generator: Arc<MockGenerator>,
    classifier_loads: AtomicUsize,
    generator_loads: AtomicUsize,
}

impl MockLoader {
    pub fn new(classifier: MockClassifier, generator: MockGenerator) -> Self {
        Self {
            classifier: Arc::new(classifier),
            generator: Arc::new(generator),
            classifier_loads: AtomicUsize::new(0),
            generator_loads: AtomicUsize::new(0),
        }
    }

    pub fn classifier_loads(&self) -> usize {
        self.classifier_loads.load(Ordering::SeqCst)
    }

    pub fn generator_loads(&self) -> usize {
        self.generator_loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ModelLoader for MockLoader {
    fn name(&self) -> &str {
        "mock"
    }

    async fn load_classifier(&self, _model: &str) -> Result<Arc<dyn ClassifyProvider>> {
        self.classifier_loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.classifier.clone())
    }

    async fn load_generator(&self, _model: &str) -> Result<Arc<dyn GenerateProvider>> {
        self.generator_loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.generator.clone())
    }
}

/// Model manager over `loader` with default model IDs.
pub fn manager(loader: &Arc<MockLoader>) -> Arc<ModelManager> {
    Arc::new(ModelManager::new(
        loader.clone(),
        ModelManagerConfig::default(),
    ))
}

/// Summarizer over `loader`.
pub fn summarizer(loader: &Arc<MockLoader>) -> Summarizer {
    Summarizer::new(manager(loader))
}
