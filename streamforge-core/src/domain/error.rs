// streamforge-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("{operation} rejected with HTTP {status}: {body}")]
    #[diagnostic(
        code(streamforge::domain::remote_rejected),
        help("The control plane refused the request. The response body above says why.")
    )]
    RemoteRejected {
        operation: String,
        status: u16,
        body: String,
    },

    #[error("Stream '{stream_id}' did not become ready within {waited_secs}s")]
    #[diagnostic(
        code(streamforge::domain::settle_timeout),
        help("Raise settle.timeout_seconds or switch settle.mode back to 'fixed'.")
    )]
    SettleTimeout { stream_id: String, waited_secs: u64 },

    #[error("Stream '{stream_id}' reached state {state} while settling")]
    #[diagnostic(code(streamforge::domain::stream_state))]
    InvalidStreamState { stream_id: String, state: String },
}
