// streamforge-core/src/infrastructure/adapters/http.rs

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use std::time::Instant;
use tracing::{debug, instrument};

use crate::domain::provision::{ApiRequest, Credential, Method};
use crate::error::StreamforgeError;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::control_plane::{ApiResponse, ControlPlane};

/// `ControlPlane` over HTTPS. Uses the transport's default timeouts.
#[derive(Debug, Clone)]
pub struct ReqwestControlPlane {
    client: reqwest::Client,
}

impl ReqwestControlPlane {
    pub fn new() -> Result<Self, InfrastructureError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("streamforge/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Patch => reqwest::Method::PATCH,
    }
}

#[async_trait]
impl ControlPlane for ReqwestControlPlane {
    #[instrument(skip(self, request, credential), fields(method = %request.method, url = %request.url))]
    async fn send(
        &self,
        request: &ApiRequest,
        credential: &Credential,
    ) -> Result<ApiResponse, StreamforgeError> {
        let start = Instant::now();

        let mut builder = self
            .client
            .request(to_reqwest(request.method), &request.url)
            .header(AUTHORIZATION, credential.authorization_header());
        if let Some(body) = &request.body {
            // Sets Content-Type: application/json
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        debug!(status, elapsed = ?start.elapsed(), "Control plane answered");
        Ok(ApiResponse { status, body })
    }
}
