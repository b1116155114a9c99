pub mod project;

pub use crate::domain::provision::ProvisionConfig;
pub use project::{load_provision_config, locate_config};
