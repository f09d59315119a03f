use crate::services::providers::ProviderError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Fallback sentence used when a failure carries no message of its own.
pub const GENERIC_FAILURE_MESSAGE: &str = "Could not generate the mock test. Please try again.";

/// Error type for the relay.
///
/// The variants keep failure kinds distinguishable internally (request
/// decode vs provider vs payload decode), but every request-path variant
/// renders as 500 with a `{"message": ...}` body — callers cannot tell
/// them apart, matching the endpoint's external contract.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("API key is not configured.")]
    ApiKeyMissing,

    #[error("Invalid request body: {0}")]
    MalformedRequest(serde_json::Error),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Provider returned a non-JSON payload: {0}")]
    MalformedProviderPayload(serde_json::Error),

    #[error("Provider returned no text content")]
    EmptyProviderResponse,

    #[error("Configuration error: {0}")]
    ConfigError(anyhow::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::ConfigError(anyhow::Error::new(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            message: String,
        }

        tracing::error!(error = %self, kind = self.kind(), "Request failed");

        let text = self.to_string();
        let message = if text.is_empty() {
            GENERIC_FAILURE_MESSAGE.to_string()
        } else {
            text
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse { message }),
        )
            .into_response()
    }
}

impl AppError {
    fn kind(&self) -> &'static str {
        match self {
            AppError::ApiKeyMissing => "api_key_missing",
            AppError::MalformedRequest(_) => "malformed_request",
            AppError::Provider(_) => "provider",
            AppError::MalformedProviderPayload(_) => "malformed_provider_payload",
            AppError::EmptyProviderResponse => "empty_provider_response",
            AppError::ConfigError(_) => "config",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn missing_api_key_renders_fixed_message() {
        let (status, body) = body_json(AppError::ApiKeyMissing).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "API key is not configured.");
    }

    #[tokio::test]
    async fn provider_failure_renders_error_message() {
        let err = AppError::Provider(ProviderError::NetworkError("connection refused".into()));
        let (status, body) = body_json(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let message = body["message"].as_str().unwrap();
        assert!(message.contains("connection refused"));
    }

    #[tokio::test]
    async fn malformed_request_renders_parse_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let (status, body) = body_json(AppError::MalformedRequest(parse_err)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["message"].as_str().is_some_and(|m| !m.is_empty()));
    }
}
