//! Model capability providers.
//!
//! - [`traits`]: the `ClassifyProvider` and `GenerateProvider` seams
//! - [`huggingface`]: HuggingFace Inference API implementations

#[cfg(feature = "huggingface")]
pub mod huggingface;
pub mod traits;

#[cfg(feature = "huggingface")]
pub use huggingface::{HuggingFaceClassifier, HuggingFaceClient, HuggingFaceGenerator};
pub use traits::{ClassifyProvider, GenerateProvider};
