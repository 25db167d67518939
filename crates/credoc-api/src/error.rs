use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use credoc_core::DocsError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::Internal(_) => "internal",
        }
    }
}

impl From<DocsError> for ApiError {
    fn from(err: DocsError) -> Self {
        match err {
            DocsError::NoCredentialDefinition { .. } | DocsError::UnknownValue { .. } => {
                ApiError::BadRequest(err.to_string())
            }
            DocsError::Generation { .. } => ApiError::Internal(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
            code: self.code().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use credoc_core::{CredentialType, Csp};

    #[test]
    fn missing_definition_maps_to_bad_request() {
        let api: ApiError =
            DocsError::no_credential_definition(Csp::Huawei, CredentialType::OAuth2).into();
        assert_eq!(api.status(), StatusCode::BAD_REQUEST);
        assert!(api.to_string().contains("huawei"));
    }

    #[test]
    fn generation_failure_maps_to_internal() {
        let api: ApiError = DocsError::generation("x.html", "renderer exploded").into();
        assert_eq!(api.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
