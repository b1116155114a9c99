// streamforge-core/src/ports/control_plane.rs

// What the sequencer needs from the remote API: send one request, get one
// status code and body back. Rejections are data, not errors; only
// transport failures come back as `Err`.

use crate::domain::provision::{ApiRequest, Credential};
use crate::error::StreamforgeError;
use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait ControlPlane: Send + Sync {
    async fn send(
        &self,
        request: &ApiRequest,
        credential: &Credential,
    ) -> Result<ApiResponse, StreamforgeError>;
}
