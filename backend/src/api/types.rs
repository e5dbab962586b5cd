//! REST API response types.
//!
//! Success is the `{ data, summary }` payload with a shared-cache directive.
//! Failures are a single fixed `{ error }` message; causes are only logged.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};

use crate::config::cache_control_value;
use crate::error::LoadError;
use crate::models::AnalysisPayload;

/// Successful analysis response.
#[derive(Debug, Clone)]
pub struct AnalysisResponse(pub AnalysisPayload);

impl IntoResponse for AnalysisResponse {
    fn into_response(self) -> Response {
        let mut response = Json(self.0).into_response();
        if let Ok(value) = HeaderValue::from_str(&cache_control_value()) {
            response.headers_mut().insert(header::CACHE_CONTROL, value);
        }
        response
    }
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Create an error response body.
pub fn error_response(error: &str) -> ErrorBody {
    ErrorBody {
        error: error.to_string(),
    }
}

impl LoadError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            LoadError::SourceUnavailable(_) => StatusCode::NOT_FOUND,
            LoadError::ProcessingFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for LoadError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(error_response(self.public_message()))).into_response()
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub data_file: String,
}
