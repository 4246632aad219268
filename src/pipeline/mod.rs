//! Emotion resolution and summarization pipeline.
//!
//! ```text
//! SummarizeRequest
//!        │ validate length
//!        ▼
//!   LabelResolver ──► override? ──► (label, 1.0)
//!        │ no / unknown
//!        ▼
//!   ClassifyProvider ──► normalize_label ──► (label, score)
//!        │
//!        ▼
//!   "<label>: text" ──► GenerateProvider ──► SummarizeResponse
//! ```

mod resolver;
mod summarize;

use std::time::Instant;

use crate::telemetry;

pub use resolver::{LabelResolver, normalize_label};
pub use summarize::{Summarizer, round_seconds, tagged_prompt};

/// Record request outcome metrics (counter + histogram).
fn record_request(operation: &'static str, start: Instant, ok: bool) {
    let status = if ok { "ok" } else { "error" };
    metrics::counter!(telemetry::REQUESTS_TOTAL,
        "operation" => operation,
        "status" => status,
    )
    .increment(1);
    metrics::histogram!(telemetry::REQUEST_DURATION_SECONDS,
        "operation" => operation,
    )
    .record(start.elapsed().as_secs_f64());
}
