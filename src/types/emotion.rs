//! Canonical emotion label table.

/// The 28 emotion labels the classifier is trained on, in model output order.
///
/// Positional classifier outputs (`LABEL_<n>`) index into this table, so the
/// order must never change.
pub const EMOTION_LABELS: [&str; 28] = [
    "admiration",
    "amusement",
    "anger",
    "annoyance",
    "approval",
    "caring",
    "confusion",
    "curiosity",
    "desire",
    "disappointment",
    "disapproval",
    "disgust",
    "embarrassment",
    "excitement",
    "fear",
    "gratitude",
    "grief",
    "joy",
    "love",
    "nervousness",
    "optimism",
    "pride",
    "realization",
    "relief",
    "remorse",
    "sadness",
    "surprise",
    "neutral",
];

/// Fallback label for positional outputs outside the table.
pub const NEUTRAL: &str = "neutral";

/// Whether `label` is one of the canonical labels (exact, case-sensitive).
pub fn is_known_emotion(label: &str) -> bool {
    EMOTION_LABELS.contains(&label)
}

/// Label at a positional index, if the index is within the table.
pub fn emotion_at(index: usize) -> Option<&'static str> {
    EMOTION_LABELS.get(index).copied()
}
