use thiserror::Error;

/// Errors surfaced by the user repository.
#[derive(Debug, Error)]
pub enum RepoError {
    /// The unique email index rejected the insert.
    #[error("email already registered")]
    Conflict,
    /// The driver reported success without persisting a row.
    #[error("record was not inserted")]
    NotSaved,
    #[error("database error: {0}")]
    Db(String),
}

/// Outcome classification for a registration attempt.
///
/// `Rejected` is an expected negative outcome (invalid data, duplicate
/// email) and maps to HTTP 400; `Internal` is an infrastructure failure and
/// maps to HTTP 500. Either way the message is safe to return to the caller;
/// underlying detail is logged, never surfaced.
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("{0}")]
    Rejected(String),
    #[error("{0}")]
    Internal(String),
}
