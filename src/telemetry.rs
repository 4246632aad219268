//! Telemetry metric name constants.
//!
//! Centralised metric names for emosum operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `emosum_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `operation` — capability invoked ("classify", "generate", "summarize")
//! - `status` — outcome: "ok" or "error"
//! - `source` — where a resolved emotion came from: "override" or "classifier"
//! - `model_kind` — "classifier" or "generator"

/// Total model and summarization requests.
///
/// Labels: `operation`, `status` ("ok" | "error").
pub const REQUESTS_TOTAL: &str = "emosum_requests_total";

/// Request duration in seconds.
///
/// Labels: `operation`.
pub const REQUEST_DURATION_SECONDS: &str = "emosum_request_duration_seconds";

/// Total resolved emotions.
///
/// Labels: `source` ("override" | "classifier").
pub const EMOTION_RESOLVED_TOTAL: &str = "emosum_emotion_resolved_total";

/// Total model handle initializations.
///
/// Labels: `model_kind`.
pub const MODEL_LOADS_TOTAL: &str = "emosum_model_loads_total";
