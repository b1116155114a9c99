// streamforge-core/src/application/settle.rs
//
// Stream creation finishes asynchronously on the remote side. Before the
// start request goes out, wait either a fixed interval or until the stream
// resource reports a startable state.

use serde::Deserialize;
use std::time::Duration;
use tokio::time::{Instant, sleep};
use tracing::{debug, info, instrument};

use crate::domain::error::DomainError;
use crate::domain::provision::{
    ApiRequest, Credential, Endpoints, Method, ProvisionConfig, SettleConfig, SettleMode,
};
use crate::error::StreamforgeError;
use crate::ports::control_plane::ControlPlane;

const READY_STATES: [&str; 3] = ["NOT_STARTED", "PAUSED", "RUNNING"];
const DEAD_STATES: [&str; 2] = ["FAILED", "FAILED_PERMANENTLY"];
const HTTP_NOT_FOUND: u16 = 404;

#[derive(Debug, Clone, PartialEq)]
pub enum SettleStrategy {
    /// Sleep, then go. The default.
    Fixed(Duration),
    /// GET the stream until it reports a startable state.
    Poll { interval: Duration, timeout: Duration },
}

#[derive(Deserialize)]
struct StreamStatus {
    #[serde(default)]
    state: Option<String>,
}

impl SettleStrategy {
    pub fn from_config(config: &SettleConfig) -> Self {
        match config.mode {
            SettleMode::Fixed => Self::Fixed(Duration::from_secs(config.seconds)),
            SettleMode::Poll => Self::Poll {
                interval: Duration::from_secs(config.interval_seconds.max(1)),
                timeout: Duration::from_secs(config.timeout_seconds),
            },
        }
    }

    #[instrument(skip_all, fields(stream = %config.stream.stream_id))]
    pub async fn wait(
        &self,
        plane: &dyn ControlPlane,
        config: &ProvisionConfig,
        credential: &Credential,
    ) -> Result<(), StreamforgeError> {
        match self {
            Self::Fixed(delay) => {
                info!(?delay, "⏳ Waiting for stream creation to settle");
                sleep(*delay).await;
                Ok(())
            }
            Self::Poll { interval, timeout } => {
                poll_until_ready(plane, config, credential, *interval, *timeout).await
            }
        }
    }
}

async fn poll_until_ready(
    plane: &dyn ControlPlane,
    config: &ProvisionConfig,
    credential: &Credential,
    interval: Duration,
    timeout: Duration,
) -> Result<(), StreamforgeError> {
    let stream_id = &config.stream.stream_id;
    let request = ApiRequest {
        method: Method::Get,
        url: Endpoints::from_config(config).stream(stream_id),
        body: None,
    };
    let start = Instant::now();

    loop {
        let response = plane.send(&request, credential).await?;
        if response.is_success() {
            let state = serde_json::from_str::<StreamStatus>(&response.body)
                .ok()
                .and_then(|s| s.state)
                .unwrap_or_default();
            debug!(state = %state, "Polled stream state");

            if READY_STATES.contains(&state.as_str()) {
                info!(state = %state, elapsed = ?start.elapsed(), "Stream is ready");
                return Ok(());
            }
            if DEAD_STATES.contains(&state.as_str()) {
                return Err(DomainError::InvalidStreamState {
                    stream_id: stream_id.clone(),
                    state,
                }
                .into());
            }
        } else if response.status == HTTP_NOT_FOUND {
            // Until the create operation lands.
            debug!(status = response.status, "Stream not visible yet");
        } else {
            return Err(DomainError::RemoteRejected {
                operation: "get-stream".to_string(),
                status: response.status,
                body: response.body,
            }
            .into());
        }

        if start.elapsed() >= timeout {
            return Err(DomainError::SettleTimeout {
                stream_id: stream_id.clone(),
                waited_secs: start.elapsed().as_secs(),
            }
            .into());
        }
        sleep(interval).await;
    }
}
