// src/domain/provision/configuration.rs

use serde::{Deserialize, Serialize};

pub const DEFAULT_PRIMARY_BASE_URL: &str = "https://datastream.googleapis.com/v1";
pub const DEFAULT_PREVIEW_BASE_URL: &str = "https://datastream.clients6.google.com/v1alpha1";
pub const DEFAULT_SETTLE_SECONDS: u64 = 60;

/// Root of `streamforge.yaml`.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProvisionConfig {
    pub project_id: String,
    pub location: String,

    pub source_profile: SourceProfileConfig,
    pub destination_profile: DestinationProfileConfig,
    pub stream: StreamConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub settle: SettleConfig,
}

/// Relational database the stream reads from. The password never lives here.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SourceProfileConfig {
    pub display_name: String,
    pub profile_id: String,
    pub hostname: String,
    pub port: u16,
    pub username: String,
}

/// Object-storage location the stream writes to.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DestinationProfileConfig {
    pub display_name: String,
    pub profile_id: String,
    pub bucket_name: String,
    #[serde(alias = "prefix")]
    pub root_path: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StreamConfig {
    pub stream_id: String,
    pub display_name: String,

    // Both default to the ids of the configured profiles.
    #[serde(default)]
    pub source_profile_id: Option<String>,
    #[serde(default)]
    pub destination_profile_id: Option<String>,
}

/// Base URLs of the control plane. Profiles and stream start go through
/// `primary`; destination profile and stream creation go through `preview`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_primary_base_url")]
    pub primary_base_url: String,
    #[serde(default = "default_preview_base_url")]
    pub preview_base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            primary_base_url: default_primary_base_url(),
            preview_base_url: default_preview_base_url(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SettleMode {
    #[default]
    Fixed,
    Poll,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SettleConfig {
    #[serde(default)]
    pub mode: SettleMode,

    /// Fixed mode: how long to sleep before starting the stream.
    #[serde(default = "default_settle_seconds")]
    pub seconds: u64,

    /// Poll mode only.
    #[serde(default = "default_poll_interval")]
    pub interval_seconds: u64,
    #[serde(default = "default_poll_timeout")]
    pub timeout_seconds: u64,
}

impl Default for SettleConfig {
    fn default() -> Self {
        Self {
            mode: SettleMode::Fixed,
            seconds: default_settle_seconds(),
            interval_seconds: default_poll_interval(),
            timeout_seconds: default_poll_timeout(),
        }
    }
}

impl ProvisionConfig {
    pub fn stream_source_profile_id(&self) -> &str {
        self.stream
            .source_profile_id
            .as_deref()
            .unwrap_or(&self.source_profile.profile_id)
    }

    pub fn stream_destination_profile_id(&self) -> &str {
        self.stream
            .destination_profile_id
            .as_deref()
            .unwrap_or(&self.destination_profile.profile_id)
    }
}

fn default_primary_base_url() -> String {
    DEFAULT_PRIMARY_BASE_URL.to_string()
}
fn default_preview_base_url() -> String {
    DEFAULT_PREVIEW_BASE_URL.to_string()
}
fn default_settle_seconds() -> u64 {
    DEFAULT_SETTLE_SECONDS
}
fn default_poll_interval() -> u64 {
    10
}
fn default_poll_timeout() -> u64 {
    600
}


#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_yaml_gets_defaults() -> anyhow::Result<()> {
        let yaml = r#"
project_id: demo-proj
location: us-central1
source_profile:
  display_name: src
  profile_id: src-id
  hostname: db.internal
  port: 3306
  username: repl
destination_profile:
  display_name: dst
  profile_id: dst-id
  bucket_name: landing
  prefix: /raw
stream:
  stream_id: s1
  display_name: Stream One
"#;
        let config: ProvisionConfig = serde_yaml::from_str(yaml)?;

        assert_eq!(config.api, ApiConfig::default());
        assert_eq!(config.settle.mode, SettleMode::Fixed);
        assert_eq!(config.settle.seconds, 60);
        assert_eq!(config.destination_profile.root_path, "/raw");
        assert_eq!(config.stream_source_profile_id(), "src-id");
        assert_eq!(config.stream_destination_profile_id(), "dst-id");
        Ok(())
    }

    #[test]
    fn test_stream_profile_references_can_be_overridden() {
        let mut config = fixtures::demo_config();
        config.stream.source_profile_id = Some("legacy-src".to_string());

        assert_eq!(config.stream_source_profile_id(), "legacy-src");
        assert_eq!(config.stream_destination_profile_id(), "orders-gcs-cp");
    }

    #[test]
    fn test_missing_port_is_rejected() {
        let yaml = r#"
display_name: src
profile_id: src-id
hostname: db.internal
username: repl
"#;
        assert!(serde_yaml::from_str::<SourceProfileConfig>(yaml).is_err());
    }
}
