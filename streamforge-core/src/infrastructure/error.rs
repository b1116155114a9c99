// streamforge-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(streamforge::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(streamforge::infra::yaml),
        help("Check your YAML syntax (indentation, types, required keys).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Provisioning configuration not found: {0}")]
    #[diagnostic(
        code(streamforge::infra::config_missing),
        help("Create streamforge.yaml in the working directory or pass --config.")
    )]
    ConfigNotFound(String),

    // --- TRANSPORT ---
    #[error("HTTP Transport Error: {0}")]
    #[diagnostic(
        code(streamforge::infra::http),
        help("The control plane could not be reached. Check network access and the api base URLs.")
    )]
    Http(#[from] reqwest::Error),

    // --- CREDENTIALS ---
    #[error("Could not read {what} from the terminal: {source}")]
    #[diagnostic(code(streamforge::infra::prompt))]
    Prompt {
        what: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Empty {0} supplied")]
    #[diagnostic(
        code(streamforge::infra::empty_credential),
        help("Enter a non-empty value at the prompt or unset the environment variable.")
    )]
    EmptyCredential(&'static str),
}
