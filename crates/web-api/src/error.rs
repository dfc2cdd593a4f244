use application::ApplicationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::{ApiErrorDetail, DomainError};
use serde::Serialize;
use tracing::error;
use validator::ValidationErrors;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ApiErrorDetail>,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                code,
                message: message.into(),
                details: Vec::new(),
            },
        }
    }

    fn with_details(mut self, details: Vec<ApiErrorDetail>) -> Self {
        self.body.details = details;
        self
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn code(&self) -> &'static str {
        self.body.code
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::Unauthenticated { message } => {
                ApiError::new(StatusCode::UNAUTHORIZED, "UNAUTHENTICATED", message)
            }
            DomainError::Unauthorized { message, details } => {
                ApiError::new(StatusCode::UNAUTHORIZED, "UNAUTHORIZED", message).with_details(details)
            }
            DomainError::Forbidden { message, details } => {
                ApiError::new(StatusCode::FORBIDDEN, "FORBIDDEN", message).with_details(details)
            }
            DomainError::NotFound { message, details } => {
                ApiError::new(StatusCode::NOT_FOUND, "NOT_FOUND", message).with_details(details)
            }
            DomainError::BadRequest { message, details } => {
                ApiError::new(StatusCode::BAD_REQUEST, "BAD_REQUEST", message).with_details(details)
            }
            DomainError::Conflict { message, details } => {
                ApiError::new(StatusCode::CONFLICT, "CONFLICT", message).with_details(details)
            }
            DomainError::Unprocessable { message, details } => ApiError::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNPROCESSABLE_ENTITY",
                message,
            )
            .with_details(details),
            DomainError::ValidationError { field, message } => ApiError::new(
                StatusCode::BAD_REQUEST,
                "INVALID_ARGUMENT",
                format!("{}: {}", field, message),
            ),
            DomainError::Api {
                status,
                message,
                details,
            } => {
                error!(status, %message, "upstream API error");
                ApiError::new(StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", message).with_details(details)
            }
            DomainError::Transport { message } => {
                ApiError::new(StatusCode::BAD_GATEWAY, "UPSTREAM_UNAVAILABLE", message)
            }
            DomainError::Decode { message } => {
                ApiError::new(StatusCode::BAD_GATEWAY, "UPSTREAM_INVALID_RESPONSE", message)
            }
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(error: ApplicationError) -> Self {
        match error {
            ApplicationError::Domain(err) => err.into(),
            ApplicationError::Session(message) => {
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "SESSION_ERROR", message)
            }
            ApplicationError::Cache(message) => {
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "CACHE_ERROR", message)
            }
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        DomainError::from(errors).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
