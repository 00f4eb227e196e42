use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::aggregator::AggregateError;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ApiError {
    pub code: &'static str,
    pub message: String,
}

/// Error status plus an optional JSON body. Not-found responses carry no body.
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    pub status: StatusCode,
    pub error: Option<ApiError>,
}

impl ApiErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: Some(ApiError {
                code: "INVALID_ARGUMENT",
                message: message.into(),
            }),
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            error: None,
        }
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: Some(ApiError {
                code: "INTERNAL_ERROR",
                message: message.into(),
            }),
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        match self.error {
            Some(error) => (self.status, Json(error)).into_response(),
            None => self.status.into_response(),
        }
    }
}

impl From<AggregateError> for ApiErrorResponse {
    fn from(error: AggregateError) -> Self {
        match error {
            AggregateError::InvalidArgument(message) => Self::bad_request(message),
            AggregateError::NotFound => Self::not_found(),
            error @ AggregateError::Upstream { .. } => Self::internal_error(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::INVALID_USER_ID;
    use typicode::{StatusCode as UpstreamStatus, TypicodeError};

    #[test]
    fn invalid_argument_maps_to_bad_request() {
        let response = ApiErrorResponse::from(AggregateError::InvalidArgument(INVALID_USER_ID));

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.unwrap().message, INVALID_USER_ID);
    }

    #[test]
    fn not_found_has_no_body() {
        let response = ApiErrorResponse::from(AggregateError::NotFound);

        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert!(response.error.is_none());
    }

    #[test]
    fn upstream_error_is_sanitized() {
        let response = ApiErrorResponse::from(AggregateError::Upstream {
            context: "error occurred retrieving albums and photos".into(),
            source: TypicodeError::Status {
                status: UpstreamStatus::BAD_GATEWAY,
                body: "secret upstream detail".into(),
            },
        });

        let error = response.error.unwrap();
        assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.code, "INTERNAL_ERROR");
        assert_eq!(error.message, "error occurred retrieving albums and photos");
    }
}
