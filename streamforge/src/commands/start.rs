// streamforge/src/commands/start.rs
//
// USE CASE: Start a stream created by an earlier run.

use std::path::PathBuf;

use streamforge_core::application::start_stream;
use streamforge_core::domain::provision::Credential;
use streamforge_core::infrastructure::adapters::{PromptCredentials, ReqwestControlPlane};
use streamforge_core::infrastructure::config::load_provision_config;
use streamforge_core::ports::credentials::CredentialSource;

pub async fn execute(config_path: PathBuf) -> anyhow::Result<()> {
    let config = load_provision_config(&config_path)?;

    let credential = Credential::token_only(PromptCredentials::from_env().bearer_token()?);
    let plane = ReqwestControlPlane::new()?;

    let step = start_stream(&plane, &config, &credential).await?;
    if let Some(line) = step.message() {
        println!("{}", line);
    }
    if let Some(rejection) = step.rejection() {
        eprintln!("{:?}", miette::Report::new(rejection));
        std::process::exit(1);
    }

    Ok(())
}
