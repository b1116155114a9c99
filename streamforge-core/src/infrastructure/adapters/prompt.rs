// streamforge-core/src/infrastructure/adapters/prompt.rs
//
// Masked terminal prompts, with an environment shortcut for unattended runs.

use tracing::debug;

use crate::domain::provision::Secret;
use crate::error::StreamforgeError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::credentials::CredentialSource;

pub const ENV_AUTH_TOKEN: &str = "STREAMFORGE_AUTH_TOKEN";
pub const ENV_DB_PASSWORD: &str = "STREAMFORGE_DB_PASSWORD";

const TOKEN_PROMPT: &str = "Enter auth_token, you can generate auth token by running \
gcloud config set project <project_id> && gcloud auth print-access-token: ";
const PASSWORD_PROMPT: &str = "Enter Source DB Password: ";

/// Reads each secret from its environment variable when set, otherwise asks
/// for it on the terminal without echo.
#[derive(Debug, Default)]
pub struct PromptCredentials {
    token: Option<Secret>,
    db_password: Option<Secret>,
}

impl PromptCredentials {
    pub fn from_env() -> Self {
        let read = |key: &str| {
            std::env::var(key)
                .ok()
                .filter(|v| !v.is_empty())
                .map(Secret::new)
        };
        Self {
            token: read(ENV_AUTH_TOKEN),
            db_password: read(ENV_DB_PASSWORD),
        }
    }

    pub fn preset(token: Option<Secret>, db_password: Option<Secret>) -> Self {
        Self { token, db_password }
    }

    fn resolve(
        preset: &Option<Secret>,
        prompt: &str,
        what: &'static str,
    ) -> Result<Secret, StreamforgeError> {
        let secret = match preset {
            Some(secret) => {
                debug!(what, "Using credential from environment");
                secret.clone()
            }
            None => rpassword::prompt_password(prompt)
                .map(Secret::new)
                .map_err(|source| InfrastructureError::Prompt { what, source })?,
        };
        // Rejected here so an empty value never reaches the control plane.
        if secret.is_empty() {
            return Err(InfrastructureError::EmptyCredential(what).into());
        }
        Ok(secret)
    }
}

impl CredentialSource for PromptCredentials {
    fn bearer_token(&self) -> Result<Secret, StreamforgeError> {
        Self::resolve(&self.token, TOKEN_PROMPT, "auth token")
    }

    fn database_password(&self) -> Result<Secret, StreamforgeError> {
        Self::resolve(&self.db_password, PASSWORD_PROMPT, "database password")
    }
}
