//! Public types for the emosum API.

mod emotion;
mod inference;
mod summarize;

pub use emotion::{EMOTION_LABELS, NEUTRAL, emotion_at, is_known_emotion};
pub use inference::{ClassificationResult, GenerateOptions, GenerateResponse, RawClassification};
pub use summarize::{DEFAULT_MAX_LENGTH, MIN_TEXT_LENGTH, SummarizeRequest, SummarizeResponse};
