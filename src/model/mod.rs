//! Lazily-initialized model handles.

mod loader;
mod manager;

#[cfg(feature = "huggingface")]
pub use loader::HuggingFaceLoader;
pub use loader::ModelLoader;
pub use manager::{
    DEFAULT_EMOTION_MODEL, DEFAULT_SUMMARIZER_MODEL, LoadedModels, ModelManager,
    ModelManagerConfig,
};
