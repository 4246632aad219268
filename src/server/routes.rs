//! HTTP handlers and error mapping.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::EmosumError;
use crate::pipeline::Summarizer;
use crate::types::{EMOTION_LABELS, SummarizeRequest, SummarizeResponse};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub summarizer: Summarizer,
}

impl AppState {
    pub fn new(summarizer: Summarizer) -> Self {
        Self { summarizer }
    }
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub models_loaded: bool,
}

/// Body of `GET /api/emotions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionsResponse {
    pub emotions: Vec<String>,
}

/// Error body: `{"detail": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// An error rendered as a status code and `{"detail": ...}` body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl From<EmosumError> for ApiError {
    fn from(err: EmosumError) -> Self {
        let status = if err.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            error!(error = %err, "summarization failed");
            StatusCode::INTERNAL_SERVER_ERROR
        };
        Self {
            status,
            detail: err.to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                detail: self.detail,
            }),
        )
            .into_response()
    }
}

/// `POST /api/summarize`
pub async fn summarize(
    State(state): State<AppState>,
    payload: Result<Json<SummarizeRequest>, JsonRejection>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    let Json(request) = payload?;
    let response = state.summarizer.summarize(&request).await?;
    Ok(Json(response))
}

/// `GET /api/health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        models_loaded: true,
    })
}

/// `GET /api/emotions`
pub async fn emotions() -> Json<EmotionsResponse> {
    Json(EmotionsResponse {
        emotions: EMOTION_LABELS.iter().map(|label| label.to_string()).collect(),
    })
}
