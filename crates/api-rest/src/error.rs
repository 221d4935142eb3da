//! API error type for the REST surface.
//!
//! The analysis engine is total, so the only failures the API can produce are
//! client-input errors raised before the engine is invoked. Each variant maps
//! to a 400 and renders as the `success: false` envelope the frontend expects.

use api_shared::types::ErrorRes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No text provided")]
    MissingText,
    #[error("No medical information provided")]
    MissingMedicalInformation,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingText | ApiError::MissingMedicalInformation => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorRes {
            success: false,
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_input_errors_map_to_bad_request() {
        assert_eq!(
            ApiError::MissingText.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::MissingMedicalInformation.into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_error_messages_match_wire_contract() {
        assert_eq!(ApiError::MissingText.to_string(), "No text provided");
        assert_eq!(
            ApiError::MissingMedicalInformation.to_string(),
            "No medical information provided"
        );
    }
}
