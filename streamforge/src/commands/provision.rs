// streamforge/src/commands/provision.rs
//
// USE CASE: Create both connection profiles and the stream, then start it.

use std::path::PathBuf;

use anyhow::Context;
use streamforge_core::application::{SettleStrategy, run_provisioning};
use streamforge_core::domain::provision::{Credential, SettleMode};
use streamforge_core::infrastructure::adapters::{PromptCredentials, ReqwestControlPlane};
use streamforge_core::infrastructure::config::load_provision_config;
use streamforge_core::ports::credentials::CredentialSource;

pub async fn execute(
    config_path: PathBuf,
    settle_seconds: Option<u64>,
    poll: bool,
) -> anyhow::Result<()> {
    let start = std::time::Instant::now();

    // A. Load the Config (Infra)
    println!("⚙️  Loading configuration...");
    let mut config = load_provision_config(&config_path).with_context(|| {
        format!(
            "Failed to load provisioning configuration from {:?}",
            config_path
        )
    })?;
    println!("   Project: {} ({})", config.project_id, config.location);

    if let Some(seconds) = settle_seconds {
        config.settle.seconds = seconds;
    }
    if poll {
        config.settle.mode = SettleMode::Poll;
    }

    // B. Credentials, held for this run only
    let secrets = PromptCredentials::from_env();
    let credential = Credential::new(secrets.bearer_token()?, secrets.database_password()?);

    // C. Run the sequence (Application Layer)
    let plane = ReqwestControlPlane::new()?;
    let settle = SettleStrategy::from_config(&config.settle);

    match run_provisioning(&plane, &config, &credential, &settle).await {
        Ok(report) => {
            if report.success() {
                println!("Process Completed!");
                tracing::info!(elapsed = ?start.elapsed(), "Provisioning finished");
            } else {
                if let Some(rejection) = report.failure().and_then(|f| f.rejection()) {
                    eprintln!("\n❌ FAILURE");
                    eprintln!("{:?}", miette::Report::new(rejection));
                }
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("\n💥 CRITICAL PROVISIONING ERROR");
            eprintln!("{:?}", miette::Report::new(e));
            std::process::exit(1);
        }
    }

    Ok(())
}
