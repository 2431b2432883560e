//! Error conversions - transport-facing `From`/`IntoResponse` implementations
//!
//! Everything here is feature-gated behind `axum`.

#[cfg(feature = "axum")]
use super::{app_error::AppError, kind::ErrorKind};

// ============================================================================
// Axum extractor rejections (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::PathRejection> for AppError {
    fn from(rejection: axum::extract::rejection::PathRejection) -> Self {
        AppError::bad_request(rejection.body_text()).with_source(rejection)
    }
}

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::QueryRejection> for AppError {
    fn from(rejection: axum::extract::rejection::QueryRejection) -> Self {
        AppError::bad_request(rejection.body_text()).with_source(rejection)
    }
}

// ============================================================================
// Axum response (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl AppError {
    /// Level the response boundary logs this error at: `WARN` for busy
    /// resources, `DEBUG` for everything rejected on its input
    pub(crate) fn log_level(&self) -> tracing::Level {
        match self.kind() {
            ErrorKind::ServiceUnavailable => tracing::Level::WARN,
            _ => tracing::Level::DEBUG,
        }
    }

    fn log(&self) {
        if self.log_level() == tracing::Level::WARN {
            tracing::warn!(error = %self, code = self.code(), "Resource busy");
        } else {
            tracing::debug!(error = %self, code = self.code(), "Request rejected");
        }
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        self.log();

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self.body())).into_response()
    }
}

#[cfg(all(test, feature = "axum"))]
mod tests {
    use super::*;
    use crate::error::app_error::{CODE_MALFORMED_REQUEST, CODE_OPERATION_FAILED};
    use axum::body::to_bytes;
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn test_into_response_uses_kind_status_and_code_body() {
        let response =
            AppError::new(ErrorKind::ServiceUnavailable, "lock busy").into_response();
        assert_eq!(response.status().as_u16(), 503);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], CODE_OPERATION_FAILED);
        assert_eq!(body["message"], "lock busy");
    }

    #[tokio::test]
    async fn test_bad_request_response() {
        let response = AppError::bad_request("invalid sessionId").into_response();
        assert_eq!(response.status().as_u16(), 400);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], CODE_MALFORMED_REQUEST);
    }

    #[test]
    fn test_log_levels_by_kind() {
        assert_eq!(
            AppError::service_unavailable("lock busy").log_level(),
            tracing::Level::WARN
        );
        assert_eq!(
            AppError::unprocessable("source 0 is empty").log_level(),
            tracing::Level::DEBUG
        );
        assert_eq!(AppError::not_found("no such session 1").log_level(), tracing::Level::DEBUG);
        assert_eq!(AppError::bad_request("bad query").log_level(), tracing::Level::DEBUG);
    }
}
