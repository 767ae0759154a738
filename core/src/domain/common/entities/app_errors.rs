use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("Not found")]
    NotFound,

    #[error("Invalid input: {0}")]
    InputError(String),

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Review limit exceeded: {0}")]
    ReviewLimitExceeded(String),

    #[error("Internal server error")]
    InternalServerError,
}
