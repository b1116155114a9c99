// streamforge-core/src/infrastructure/config/project.rs

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::domain::provision::configuration::ProvisionConfig;
use crate::infrastructure::error::InfrastructureError;

pub const CONFIG_CANDIDATES: [&str; 2] = ["streamforge.yaml", "streamforge.yml"];

pub const ENV_PROJECT_ID: &str = "STREAMFORGE_PROJECT_ID";
pub const ENV_LOCATION: &str = "STREAMFORGE_LOCATION";

/// Picks the configuration file: the explicit path when given, otherwise the
/// first candidate present in `dir`.
pub fn locate_config(dir: &Path, explicit: Option<&Path>) -> Result<PathBuf, InfrastructureError> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return Err(InfrastructureError::ConfigNotFound(format!(
            "{} does not exist",
            path.display()
        )));
    }

    CONFIG_CANDIDATES
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.is_file())
        .ok_or_else(|| {
            InfrastructureError::ConfigNotFound(format!(
                "no configuration file in {}. Checked: {:?}",
                dir.display(),
                CONFIG_CANDIDATES
            ))
        })
}

#[instrument]
pub fn load_provision_config(path: &Path) -> Result<ProvisionConfig, InfrastructureError> {
    info!(path = ?path, "Loading provisioning configuration");

    let content = fs::read_to_string(path)?;
    let mut config: ProvisionConfig = serde_yaml::from_str(&content)?;

    // Layering: VAR=value streamforge provision
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    Ok(config)
}

fn apply_env_overrides(config: &mut ProvisionConfig, lookup: impl Fn(&str) -> Option<String>) {
    // Empty values are treated as unset.
    let lookup = |key: &str| lookup(key).filter(|v| !v.is_empty());
    if let Some(val) = lookup(ENV_PROJECT_ID) {
        info!(old = ?config.project_id, new = ?val, "Overriding project id via ENV");
        config.project_id = val;
    }
    if let Some(val) = lookup(ENV_LOCATION) {
        info!(old = ?config.location, new = ?val, "Overriding location via ENV");
        config.location = val;
    }
}
