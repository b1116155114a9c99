// streamforge/src/commands/plan.rs
//
// USE CASE: Show the four requests without contacting the API.

use std::path::PathBuf;

use streamforge_core::application::{plan_requests, render_plan};
use streamforge_core::infrastructure::config::load_provision_config;

pub fn execute(config_path: PathBuf, bodies: bool) -> anyhow::Result<()> {
    let config = load_provision_config(&config_path)?;

    println!(
        "📋 Provisioning plan for {} ({})",
        config.project_id, config.location
    );
    let calls = plan_requests(&config)?;
    println!("{}", render_plan(&calls, bodies)?);

    Ok(())
}
