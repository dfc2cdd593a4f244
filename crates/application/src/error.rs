use domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("session error: {0}")]
    Session(String),
    #[error("cache error: {0}")]
    Cache(String),
}

impl ApplicationError {
    pub fn session(message: impl Into<String>) -> Self {
        ApplicationError::Session(message.into())
    }

    pub fn cache(message: impl Into<String>) -> Self {
        ApplicationError::Cache(message.into())
    }
}

pub type ApplicationResult<T> = Result<T, ApplicationError>;
