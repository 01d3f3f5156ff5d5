use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::domain::error::DomainError;

const INTERNAL_ERROR_PAGE: &str = "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Internal Server Error</title></head>\n<body>\n<h1>Internal Server Error</h1>\n<p>An internal error occurred.</p>\n</body>\n</html>\n";

/// Failure that has no user-facing notice; rendered as a generic 500 page.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

pub type ApiResult<T> = Result<T, ApiError>;

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let trace_id = tracing::Span::current()
            .id()
            .map(|id| id.into_u64().to_string());
        tracing::error!(error = %self.0, trace_id = trace_id.as_deref(), "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, Html(INTERNAL_ERROR_PAGE)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_is_internal_server_error() {
        let err = ApiError::from(DomainError::Database(anyhow::anyhow!("disk I/O error")));

        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
