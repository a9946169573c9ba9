use axum::{http::StatusCode, response::{IntoResponse, Response}};
use serde_json::json;

#[derive(Debug)]
pub enum HandlerErrorKind {
    NotFound,
    Internal,
    Unauthorized,
    Forbidden,
    Conflict,
    BadRequest,
}

impl std::fmt::Display for HandlerErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HandlerErrorKind::NotFound => "NotFound",
            HandlerErrorKind::Internal => "Internal",
            HandlerErrorKind::Unauthorized => "Unauthorized",
            HandlerErrorKind::Forbidden => "Forbidden",
            HandlerErrorKind::Conflict => "Conflict",
            HandlerErrorKind::BadRequest => "BadRequest",
        };
        write!(f, "{}", s)
    }
}

/// Error returned from axum handlers. Serializes into the API envelope
/// `{ "success": false, "message": ... }` at the mapped status code.
#[derive(Debug)]
pub struct HandlerError {
    pub error: HandlerErrorKind,
    pub message: String,
}

impl HandlerError {
    pub fn bad_request<T: Into<String>>(msg: T) -> Self {
        HandlerError { error: HandlerErrorKind::BadRequest, message: msg.into() }
    }

    pub fn unauthorized<T: Into<String>>(msg: T) -> Self {
        HandlerError { error: HandlerErrorKind::Unauthorized, message: msg.into() }
    }

    pub fn forbidden<T: Into<String>>(msg: T) -> Self {
        HandlerError { error: HandlerErrorKind::Forbidden, message: msg.into() }
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        HandlerError { error: HandlerErrorKind::NotFound, message: msg.into() }
    }

    pub fn internal<T: Into<String>>(msg: T) -> Self {
        HandlerError { error: HandlerErrorKind::Internal, message: msg.into() }
    }
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for HandlerError {}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = match self.error {
            HandlerErrorKind::NotFound => StatusCode::NOT_FOUND,
            HandlerErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            HandlerErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            HandlerErrorKind::Forbidden => StatusCode::FORBIDDEN,
            HandlerErrorKind::Conflict => StatusCode::CONFLICT,
            HandlerErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = axum::Json(json!({
            "success": false,
            "message": self.message,
        }));
        (status, body).into_response()
    }
}

#[derive(Debug, Clone)]
pub enum ServiceError {
    NotFound(String),
    InvalidInput(String),
    Unauthorized(String),
    Forbidden(String),
    Conflict(String),
    InternalError(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            ServiceError::InvalidInput(msg) => write!(f, "Invalid Input: {}", msg),
            ServiceError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ServiceError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            ServiceError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ServiceError::InternalError(msg) => write!(f, "Internal Error: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

impl From<crate::repository::repository_error::RepositoryError> for ServiceError {
    fn from(err: crate::repository::repository_error::RepositoryError) -> Self {
        use crate::repository::repository_error::RepositoryError;
        match err {
            RepositoryError::NotFound(msg) => ServiceError::NotFound(msg),
            RepositoryError::ValidationError(msg) => ServiceError::InvalidInput(msg),
            RepositoryError::AlreadyExists(msg) => ServiceError::Conflict(msg),
            RepositoryError::DatabaseError(msg) => ServiceError::InternalError(msg),
            RepositoryError::ConnectionError(msg) => ServiceError::InternalError(msg),
            RepositoryError::SerializationError(msg) => ServiceError::InternalError(msg),
            RepositoryError::Generic(e) => ServiceError::InternalError(e.to_string()),
        }
    }
}

/// Lets handlers bubble service failures with `?` while keeping the
/// original status codes (404/400/403/409/500).
impl From<ServiceError> for HandlerError {
    fn from(err: ServiceError) -> Self {
        let (kind, message) = match err {
            ServiceError::NotFound(msg) => (HandlerErrorKind::NotFound, msg),
            ServiceError::InvalidInput(msg) => (HandlerErrorKind::BadRequest, msg),
            ServiceError::Unauthorized(msg) => (HandlerErrorKind::Unauthorized, msg),
            ServiceError::Forbidden(msg) => (HandlerErrorKind::Forbidden, msg),
            ServiceError::Conflict(msg) => (HandlerErrorKind::Conflict, msg),
            ServiceError::InternalError(msg) => (HandlerErrorKind::Internal, msg),
        };
        HandlerError { error: kind, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_maps_to_matching_handler_kind() {
        let err: HandlerError = ServiceError::NotFound("Quote not found.".to_string()).into();
        assert!(matches!(err.error, HandlerErrorKind::NotFound));
        assert_eq!(err.message, "Quote not found.");

        let err: HandlerError = ServiceError::Conflict("dup".to_string()).into();
        assert!(matches!(err.error, HandlerErrorKind::Conflict));

        let err: HandlerError = ServiceError::Forbidden("nope".to_string()).into();
        assert!(matches!(err.error, HandlerErrorKind::Forbidden));
    }

    #[test]
    fn test_repository_error_maps_to_service_error() {
        use crate::repository::repository_error::RepositoryError;

        let err: ServiceError = RepositoryError::not_found("missing").into();
        assert!(matches!(err, ServiceError::NotFound(_)));

        let err: ServiceError = RepositoryError::already_exists("dup").into();
        assert!(matches!(err, ServiceError::Conflict(_)));
    }
}
