use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use business_case::ExtractError;
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Anything that aborts a generation. Both kinds surface as a 500 with a `detail` message.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Completion(#[from] LlmError),
    #[error("Failed to parse structured data from response: {0}")]
    Extraction(#[from] ExtractError),
}

impl ServiceError {
    pub fn status(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({"detail": self.to_string()}))).into_response()
    }
}
