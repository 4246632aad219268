//! emosum - Emotion-conditioned summarization
//!
//! This crate classifies the emotion of a text (or takes a caller-supplied
//! emotion), prefixes the text with an `<emotion>: ` tag, and asks a
//! summarization model trained on that convention for a summary.
//!
//! Both models sit behind the [`ClassifyProvider`](providers::ClassifyProvider)
//! and [`GenerateProvider`](providers::GenerateProvider) traits; the shipped
//! implementations call the HuggingFace Inference API.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use emosum::model::{HuggingFaceLoader, ModelManager};
//! use emosum::providers::HuggingFaceClient;
//! use emosum::{Summarizer, SummarizeRequest};
//!
//! #[tokio::main]
//! async fn main() -> emosum::Result<()> {
//!     let client = HuggingFaceClient::new(std::env::var("HF_API_KEY").ok());
//!     let models = ModelManager::with_defaults(Arc::new(HuggingFaceLoader::new(client)));
//!     let summarizer = Summarizer::new(Arc::new(models));
//!
//!     let response = summarizer
//!         .summarize(&SummarizeRequest::new(
//!             "I finally got the job offer after months of interviews and I can't stop smiling.",
//!         ))
//!         .await?;
//!
//!     println!("[{}] {}", response.detected_emotion, response.summary);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod model;
pub mod pipeline;
pub mod providers;
#[cfg(feature = "server")]
pub mod server;
pub mod telemetry;
pub mod types;
mod version;

// Re-export main types at crate root
pub use error::{EmosumError, Result};
pub use pipeline::{LabelResolver, Summarizer};
pub use version::{PKG_VERSION, version_string};

// Re-export all types
pub use types::{
    ClassificationResult, EMOTION_LABELS, GenerateOptions, GenerateResponse, RawClassification,
    SummarizeRequest, SummarizeResponse,
};
