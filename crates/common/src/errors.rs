use thiserror::Error;

/// Request-pipeline failures. Display output is surfaced verbatim in the
/// gateway's error bodies, so variants carry the caller-facing message.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Fetch(String),
}
