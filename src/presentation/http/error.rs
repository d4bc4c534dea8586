use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    code: Option<&'static str>,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Unauthorized(msg) => Self::new(StatusCode::UNAUTHORIZED, msg),
            ApplicationError::Infrastructure(msg) => {
                tracing::error!(error = %msg, "infrastructure failure");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal error".into())
            }
            ApplicationError::Domain(domain_err) => Self::from_domain(domain_err),
        }
    }

    fn from_domain(err: DomainError) -> Self {
        let message = err.to_string();
        let (status, code) = match &err {
            DomainError::Validation(_) => (StatusCode::BAD_REQUEST, None),
            DomainError::Conflict(_) => (StatusCode::CONFLICT, None),
            DomainError::NotFound(_) => (StatusCode::NOT_FOUND, None),
            DomainError::Persistence(_) => {
                tracing::error!(error = %err, "persistence failure");
                return Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal error".into());
            }
            DomainError::InvalidSlugSource => {
                (StatusCode::BAD_REQUEST, Some("INVALID_SLUG_SOURCE"))
            }
            DomainError::SlugTaken(_) => (StatusCode::CONFLICT, Some("SLUG_TAKEN")),
            DomainError::SlugConflictRetryExhausted { .. } => {
                (StatusCode::CONFLICT, Some("SLUG_CONFLICT_RETRY_EXHAUSTED"))
            }
            DomainError::DuplicateOrdinal { .. } => {
                (StatusCode::CONFLICT, Some("DUPLICATE_ORDINAL"))
            }
            DomainError::DownloadLinkCountInvalid(_) => {
                (StatusCode::BAD_REQUEST, Some("DOWNLOAD_LINK_COUNT_INVALID"))
            }
            DomainError::DownloadLinkFieldMissing { .. } => {
                (StatusCode::BAD_REQUEST, Some("DOWNLOAD_LINK_FIELD_MISSING"))
            }
            DomainError::ParentNotFound(_) => (StatusCode::NOT_FOUND, Some("PARENT_NOT_FOUND")),
        };
        Self {
            status,
            code,
            message,
        }
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            code: None,
            message,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorResponse {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            code: self.code.map(str::to_string),
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    /// Machine readable reason for catalog-specific failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_errors_map_to_statuses() {
        let cases = [
            (DomainError::InvalidSlugSource, StatusCode::BAD_REQUEST),
            (
                DomainError::DuplicateOrdinal {
                    ordinal: 5,
                    session: 1,
                },
                StatusCode::CONFLICT,
            ),
            (DomainError::DownloadLinkCountInvalid(6), StatusCode::BAD_REQUEST),
            (DomainError::ParentNotFound(9), StatusCode::NOT_FOUND),
            (
                DomainError::Persistence("boom".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(HttpError::from_error(err.into()).status(), status);
        }
    }

    #[test]
    fn persistence_details_are_not_leaked() {
        let err = HttpError::from_error(DomainError::Persistence("password=secret".into()).into());
        assert_eq!(err.message, "internal error");
    }
}
