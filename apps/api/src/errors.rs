use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extract::ExtractError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant maps to the wire contract `{"error": "<message>"}`.
/// Extraction and internal failures keep their detail in the logs only.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Job description is missing")]
    MissingJobDescription,

    #[error("Resume file is missing")]
    MissingResume,

    #[error("Unsupported file format")]
    UnsupportedFormat,

    #[error("Could not extract text from the resume")]
    EmptyExtraction,

    #[error("Resume parsing failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Invalid multipart request: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::MissingJobDescription => (
                StatusCode::BAD_REQUEST,
                "Job description is missing".to_string(),
            ),
            AppError::MissingResume => (
                StatusCode::BAD_REQUEST,
                "Resume file is missing".to_string(),
            ),
            AppError::UnsupportedFormat => (
                StatusCode::BAD_REQUEST,
                "Unsupported file format".to_string(),
            ),
            AppError::EmptyExtraction => (
                StatusCode::BAD_REQUEST,
                "Could not extract text from the resume".to_string(),
            ),
            AppError::Extraction(e) => {
                tracing::error!("Extraction error: {e}");
                (
                    StatusCode::BAD_REQUEST,
                    "Could not parse the resume file".to_string(),
                )
            }
            AppError::Multipart(e) => {
                tracing::error!("Multipart error: {e}");
                (
                    StatusCode::BAD_REQUEST,
                    "Invalid multipart request".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({ "error": message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_input_errors_are_400() {
        assert_eq!(
            status_of(AppError::MissingJobDescription),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_of(AppError::MissingResume), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(AppError::UnsupportedFormat),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_of(AppError::EmptyExtraction), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_extraction_failure_is_400_not_text() {
        let err = AppError::Extraction(ExtractError::Pdf("bad xref".to_string()));
        assert_eq!(status_of(err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_error_is_500() {
        let err = AppError::Internal(anyhow::anyhow!("boom"));
        assert_eq!(status_of(err), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_body_shape_is_error_string() {
        let response = AppError::UnsupportedFormat.into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["error"], "Unsupported file format");
    }

    #[tokio::test]
    async fn test_internal_detail_is_not_leaked() {
        let response =
            AppError::Internal(anyhow::anyhow!("secret database password")).into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(!body.contains("secret"));
    }
}
