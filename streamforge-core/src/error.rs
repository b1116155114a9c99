// streamforge-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum StreamforgeError {
    // --- DOMAIN ERRORS (remote rejections, stream state) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (IO, parsing, transport) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Infrastructure(#[from] InfrastructureError),

    #[error("Internal Error: {0}")]
    #[diagnostic(code(streamforge::internal))]
    InternalError(String),
}

impl From<std::io::Error> for StreamforgeError {
    fn from(err: std::io::Error) -> Self {
        StreamforgeError::Infrastructure(InfrastructureError::Io(err))
    }
}

impl From<reqwest::Error> for StreamforgeError {
    fn from(err: reqwest::Error) -> Self {
        StreamforgeError::Infrastructure(InfrastructureError::Http(err))
    }
}
