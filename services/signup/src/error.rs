//! Custom error types for the sign-up form

use thiserror::Error;

use crate::api::EndpointError;
use crate::models::UnknownField;
use crate::validation::FormErrors;

/// Error returned by the sign-up form handlers
#[derive(Error, Debug)]
pub enum SignupError {
    /// The draft failed validation; nothing was sent
    #[error("Validation failed: {0}")]
    Validation(FormErrors),

    /// Another submission has not finished yet
    #[error("A submission is already in progress")]
    SubmissionInProgress,

    /// The registration API call failed
    #[error(transparent)]
    Endpoint(#[from] EndpointError),

    /// An input event referenced a field the form does not have
    #[error(transparent)]
    UnknownField(#[from] UnknownField),
}

/// Type alias for sign-up results
pub type SignupResult<T> = Result<T, SignupError>;
