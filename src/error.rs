//! Error types
//!
//! Two kinds of failure reach the user: the backend said no (or could not
//! be reached), or the form was rejected before anything was sent.

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure talking to the REST backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never produced a response
    #[error("Network error: {0}")]
    Transport(String),

    /// Non-2xx response; `message` is the body's `detail` or a generic text
    #[error("{message}")]
    Status { status: u16, message: String },

    /// 2xx response whose body did not match the expected shape
    #[error("Unexpected response: {0}")]
    Decode(String),
}

/// Client-side form rejection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("This field is required")]
    Required,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Username must be 3-20 characters and contain only letters, numbers, and underscores")]
    InvalidUsername,

    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Task title is required")]
    EmptyTitle,
}
