//! Model handle construction.

use std::sync::Arc;

use async_trait::async_trait;

use crate::Result;
use crate::providers::{ClassifyProvider, GenerateProvider};

/// Creates model handles for the [`ModelManager`](super::ModelManager).
///
/// Called at most once per successful handle; a failed load is retried on the
/// next request.
#[async_trait]
pub trait ModelLoader: Send + Sync {
    /// Loader name for logging/debugging.
    fn name(&self) -> &str;

    /// Create a classifier bound to `model`.
    async fn load_classifier(&self, model: &str) -> Result<Arc<dyn ClassifyProvider>>;

    /// Create a generator bound to `model`.
    async fn load_generator(&self, model: &str) -> Result<Arc<dyn GenerateProvider>>;
}

#[cfg(feature = "huggingface")]
pub use self::huggingface::HuggingFaceLoader;

#[cfg(feature = "huggingface")]
mod huggingface {
    use super::*;
    use crate::providers::{HuggingFaceClassifier, HuggingFaceClient, HuggingFaceGenerator};

    /// Loads handles that call the HuggingFace Inference API.
    ///
    /// All handles share one HTTP client (and its connection pool).
    #[derive(Clone)]
    pub struct HuggingFaceLoader {
        client: HuggingFaceClient,
    }

    impl HuggingFaceLoader {
        pub fn new(client: HuggingFaceClient) -> Self {
            Self { client }
        }
    }

    #[async_trait]
    impl ModelLoader for HuggingFaceLoader {
        fn name(&self) -> &str {
            "huggingface"
        }

        async fn load_classifier(&self, model: &str) -> Result<Arc<dyn ClassifyProvider>> {
            Ok(Arc::new(HuggingFaceClassifier::new(
                self.client.clone(),
                model,
            )))
        }

        async fn load_generator(&self, model: &str) -> Result<Arc<dyn GenerateProvider>> {
            Ok(Arc::new(HuggingFaceGenerator::new(
                self.client.clone(),
                model,
            )))
        }
    }
}
