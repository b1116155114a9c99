// streamforge-core/src/ports/credentials.rs

use crate::domain::provision::Secret;
use crate::error::StreamforgeError;

/// Where the per-run secrets come from (terminal, environment, test fixture).
pub trait CredentialSource {
    fn bearer_token(&self) -> Result<Secret, StreamforgeError>;

    fn database_password(&self) -> Result<Secret, StreamforgeError>;
}
