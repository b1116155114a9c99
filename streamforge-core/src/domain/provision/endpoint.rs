// src/domain/provision/endpoint.rs

use serde_json::Value;
use std::fmt;

use crate::domain::provision::configuration::ProvisionConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One call to the control plane. The bearer token is attached by the
/// transport, never stored here.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
}

/// Resolves resource URLs for one project/location scope.
#[derive(Debug, Clone)]
pub struct Endpoints {
    primary: String,
    preview: String,
    project: String,
    location: String,
}

impl Endpoints {
    pub fn from_config(config: &ProvisionConfig) -> Self {
        Self {
            primary: config.api.primary_base_url.trim_end_matches('/').to_string(),
            preview: config.api.preview_base_url.trim_end_matches('/').to_string(),
            project: config.project_id.clone(),
            location: config.location.clone(),
        }
    }

    /// `projects/{p}/locations/{l}`, the parent of every resource.
    pub fn parent(&self) -> String {
        format!("projects/{}/locations/{}", self.project, self.location)
    }

    /// Full resource name used when a stream references a profile.
    pub fn connection_profile_name(&self, profile_id: &str) -> String {
        format!("{}/connectionProfiles/{}", self.parent(), profile_id)
    }

    pub fn create_source_profile(&self, profile_id: &str) -> String {
        format!(
            "{}/{}/connectionProfiles?connectionProfileId={}",
            self.primary,
            self.parent(),
            profile_id
        )
    }

    pub fn create_destination_profile(&self, profile_id: &str) -> String {
        format!(
            "{}/{}/connectionProfiles?connectionProfileId={}",
            self.preview,
            self.parent(),
            profile_id
        )
    }

    pub fn create_stream(&self, stream_id: &str) -> String {
        format!(
            "{}/{}/streams?streamId={}",
            self.preview,
            self.parent(),
            stream_id
        )
    }

    pub fn start_stream(&self, stream_id: &str) -> String {
        format!("{}?updateMask=state", self.stream(stream_id))
    }

    pub fn stream(&self, stream_id: &str) -> String {
        format!("{}/{}/streams/{}", self.primary, self.parent(), stream_id)
    }
}
