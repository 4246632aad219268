//! HuggingFace Inference API client for text classification and
//! text-to-text generation.
//!
//! This client uses HuggingFace's serverless inference endpoints.
//! See: <https://huggingface.co/docs/api-inference/index>

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::traits::{ClassifyProvider, GenerateProvider};
use crate::types::{GenerateOptions, GenerateResponse, RawClassification};
use crate::{EmosumError, Result};

/// Default base URL for HuggingFace Inference API
pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for HuggingFace Inference API.
///
/// Supports:
/// - Text classification (`text-classification` pipeline)
/// - Text-to-text generation (`text2text-generation` / summarization pipelines)
///
/// Requests are sent without an `Authorization` header when no API key is set.
#[derive(Clone)]
pub struct HuggingFaceClient {
    api_key: Option<String>,
    http: Client,
    base_url: String,
}

impl HuggingFaceClient {
    /// Create a new HuggingFace client with an optional API key.
    pub fn new(api_key: Option<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a client with a custom base URL (for testing with wiremock).
    pub fn with_base_url(api_key: Option<String>, base_url: impl Into<String>) -> Self {
        Self::with_options(api_key, base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom base URL and request timeout.
    pub fn with_options(
        api_key: Option<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");

        Self {
            api_key: api_key.filter(|key| !key.is_empty()),
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Classify text and return the highest-scoring label.
    ///
    /// # Arguments
    /// * `text` - Text to classify
    /// * `model` - Full HuggingFace model ID (e.g., `ymeka2000/emotion-classifier`)
    #[instrument(skip(self, text), fields(operation = "classify"))]
    pub async fn classify(&self, text: &str, model: &str) -> Result<RawClassification> {
        let response = self
            .post(model)
            .json(&ClassifyRequest { inputs: text })
            .send()
            .await?;

        let response = Self::check_response(response, model).await?;

        let result: ClassifyResponse = response.json().await?;

        result
            .into_labels()
            .into_iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
            .ok_or(EmosumError::EmptyResponse)
    }

    /// Generate text from a prompt.
    ///
    /// # Arguments
    /// * `prompt` - Model input
    /// * `options` - Decoding options
    /// * `model` - Full HuggingFace model ID (e.g., `ymeka2000/emotion-bart`)
    #[instrument(skip(self, prompt, options), fields(operation = "generate", max_length = options.max_length))]
    pub async fn generate(
        &self,
        prompt: &str,
        options: &GenerateOptions,
        model: &str,
    ) -> Result<GenerateResponse> {
        let response = self
            .post(model)
            .json(&GenerateRequest {
                inputs: prompt,
                parameters: GenerateParameters {
                    max_length: options.max_length,
                    do_sample: options.do_sample,
                    truncation: if options.truncation {
                        "longest_first"
                    } else {
                        "do_not_truncate"
                    },
                },
            })
            .send()
            .await?;

        let response = Self::check_response(response, model).await?;

        // Response is [{"generated_text": ...}] for a single input
        let outputs: Vec<GeneratedText> = response.json().await?;

        let text = outputs
            .into_iter()
            .next()
            .map(GeneratedText::into_text)
            .ok_or(EmosumError::EmptyResponse)?;

        Ok(GenerateResponse {
            text,
            model: Some(model.to_string()),
        })
    }

    fn post(&self, model: &str) -> RequestBuilder {
        let url = format!("{}/models/{}", self.base_url, model);
        let request = self.http.post(url);
        match &self.api_key {
            Some(key) => request.header("Authorization", format!("Bearer {key}")),
            None => request,
        }
    }

    /// Check response status and map to appropriate error.
    async fn check_response(response: Response, model: &str) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        match status.as_u16() {
            401 => Err(EmosumError::AuthenticationFailed),
            404 => Err(EmosumError::ModelNotFound(model.to_string())),
            429 => {
                // Try to parse retry-after header
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.parse::<u64>().ok())
                    .map(Duration::from_secs);
                Err(EmosumError::RateLimited { retry_after })
            }
            503 => Err(EmosumError::Api {
                status: 503,
                message: "Model is loading, please retry".to_string(),
            }),
            code => {
                let detail = response
                    .json::<ApiErrorBody>()
                    .await
                    .ok()
                    .map(|body| body.error)
                    .filter(|error| !error.is_empty());
                let message = match detail {
                    Some(error) => format!("HuggingFace API error: {error}"),
                    None => format!("HuggingFace API error: {status}"),
                };
                Err(EmosumError::Api {
                    status: code,
                    message,
                })
            }
        }
    }
}

#[derive(Serialize)]
struct ClassifyRequest<'a> {
    inputs: &'a str,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    inputs: &'a str,
    parameters: GenerateParameters,
}

#[derive(Serialize)]
struct GenerateParameters {
    max_length: usize,
    do_sample: bool,
    truncation: &'static str,
}

/// Classification responses come back either flat (`[{label, score}]`) or
/// nested per input (`[[{label, score}, ...]]`).
#[derive(Deserialize)]
#[serde(untagged)]
enum ClassifyResponse {
    Nested(Vec<Vec<RawClassification>>),
    Flat(Vec<RawClassification>),
}

impl ClassifyResponse {
    fn into_labels(self) -> Vec<RawClassification> {
        match self {
            Self::Nested(batches) => batches.into_iter().next().unwrap_or_default(),
            Self::Flat(labels) => labels,
        }
    }
}

/// Summarization models answer with `summary_text`, text2text models with
/// `generated_text`.
#[derive(Deserialize)]
struct GeneratedText {
    #[serde(default, alias = "summary_text")]
    generated_text: String,
}

impl GeneratedText {
    fn into_text(self) -> String {
        self.generated_text
    }
}

#[derive(Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    error: String,
}

// ============================================================================
// Model-bound providers
// ============================================================================

/// A [`ClassifyProvider`] bound to one HuggingFace classification model.
#[derive(Clone)]
pub struct HuggingFaceClassifier {
    client: HuggingFaceClient,
    model: String,
}

impl HuggingFaceClassifier {
    pub fn new(client: HuggingFaceClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl ClassifyProvider for HuggingFaceClassifier {
    fn name(&self) -> &str {
        "huggingface"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn classify(&self, text: &str) -> Result<RawClassification> {
        self.client.classify(text, &self.model).await
    }
}

/// A [`GenerateProvider`] bound to one HuggingFace text-to-text model.
#[derive(Clone)]
pub struct HuggingFaceGenerator {
    client: HuggingFaceClient,
    model: String,
}

impl HuggingFaceGenerator {
    pub fn new(client: HuggingFaceClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl GenerateProvider for HuggingFaceGenerator {
    fn name(&self) -> &str {
        "huggingface"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str, options: &GenerateOptions) -> Result<GenerateResponse> {
        self.client.generate(prompt, options, &self.model).await
    }
}
