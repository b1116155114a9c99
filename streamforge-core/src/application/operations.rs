// streamforge-core/src/application/operations.rs
//
// The four remote operations. Each builds its request, sends it once and
// classifies the status code; none of them retries.

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::domain::provision::payload::{
    BackfillAll, DestinationConfig, DestinationProfileBody, Empty, GcsDestinationConfig,
    GcsProfile, MysqlProfile, MysqlSourceConfig, STATE_RUNNING, SourceConfig, SourceProfileBody,
    StateUpdate, StreamBody,
};
use crate::domain::provision::{
    ApiRequest, Credential, Endpoints, Method, Operation, OperationOutcome, ProvisionConfig,
    StepRecord,
};
use crate::error::StreamforgeError;
use crate::ports::control_plane::ControlPlane;

fn to_json<T: Serialize>(body: &T) -> Result<serde_json::Value, StreamforgeError> {
    serde_json::to_value(body).map_err(|e| StreamforgeError::InternalError(e.to_string()))
}

/// Name the operator sees in the confirmation line.
pub fn resource_label(operation: Operation, config: &ProvisionConfig) -> String {
    match operation {
        Operation::CreateSourceProfile => config.source_profile.display_name.clone(),
        Operation::CreateDestinationProfile => config.destination_profile.profile_id.clone(),
        Operation::CreateStream | Operation::StartStream => config.stream.display_name.clone(),
    }
}

/// Request for `operation`. `db_password` only lands in the source profile body.
pub fn build_request(
    operation: Operation,
    config: &ProvisionConfig,
    endpoints: &Endpoints,
    db_password: &str,
) -> Result<ApiRequest, StreamforgeError> {
    let request = match operation {
        Operation::CreateSourceProfile => {
            let src = &config.source_profile;
            ApiRequest {
                method: Method::Post,
                url: endpoints.create_source_profile(&src.profile_id),
                body: Some(to_json(&SourceProfileBody {
                    display_name: &src.display_name,
                    mysql_profile: MysqlProfile {
                        hostname: &src.hostname,
                        port: src.port,
                        username: &src.username,
                        password: db_password,
                    },
                    static_service_ip_connectivity: Empty {},
                })?),
            }
        }
        Operation::CreateDestinationProfile => {
            let dst = &config.destination_profile;
            ApiRequest {
                method: Method::Post,
                url: endpoints.create_destination_profile(&dst.profile_id),
                body: Some(to_json(&DestinationProfileBody {
                    display_name: &dst.display_name,
                    gcs_profile: GcsProfile {
                        bucket_name: &dst.bucket_name,
                        root_path: &dst.root_path,
                    },
                })?),
            }
        }
        Operation::CreateStream => ApiRequest {
            method: Method::Post,
            url: endpoints.create_stream(&config.stream.stream_id),
            body: Some(to_json(&StreamBody {
                display_name: &config.stream.display_name,
                source_config: SourceConfig {
                    source_connection_profile_name: endpoints
                        .connection_profile_name(config.stream_source_profile_id()),
                    mysql_source_config: MysqlSourceConfig::default(),
                },
                destination_config: DestinationConfig {
                    destination_connection_profile_name: endpoints
                        .connection_profile_name(config.stream_destination_profile_id()),
                    gcs_destination_config: GcsDestinationConfig::default(),
                },
                backfill_all: BackfillAll::default(),
            })?),
        },
        Operation::StartStream => ApiRequest {
            method: Method::Patch,
            url: endpoints.start_stream(&config.stream.stream_id),
            body: Some(to_json(&StateUpdate {
                state: STATE_RUNNING,
            })?),
        },
    };
    Ok(request)
}

#[instrument(skip_all, fields(operation = %operation))]
async fn perform(
    plane: &dyn ControlPlane,
    operation: Operation,
    config: &ProvisionConfig,
    credential: &Credential,
) -> Result<StepRecord, StreamforgeError> {
    let endpoints = Endpoints::from_config(config);
    let request = build_request(
        operation,
        config,
        &endpoints,
        credential.db_password().expose(),
    )?;
    info!(method = %request.method, url = %request.url, "Sending request");

    let response = plane.send(&request, credential).await?;
    let outcome = OperationOutcome::classify(operation, response.status, response.body);

    match &outcome {
        OperationOutcome::Failed { code, .. } => warn!(status = code, "Request rejected"),
        OperationOutcome::AlreadyExists => info!("Resource already exists, continuing"),
        _ => info!("Request accepted"),
    }

    Ok(StepRecord {
        operation,
        resource: resource_label(operation, config),
        outcome,
    })
}

pub async fn create_source_profile(
    plane: &dyn ControlPlane,
    config: &ProvisionConfig,
    credential: &Credential,
) -> Result<StepRecord, StreamforgeError> {
    perform(plane, Operation::CreateSourceProfile, config, credential).await
}

pub async fn create_destination_profile(
    plane: &dyn ControlPlane,
    config: &ProvisionConfig,
    credential: &Credential,
) -> Result<StepRecord, StreamforgeError> {
    perform(plane, Operation::CreateDestinationProfile, config, credential).await
}

pub async fn create_stream(
    plane: &dyn ControlPlane,
    config: &ProvisionConfig,
    credential: &Credential,
) -> Result<StepRecord, StreamforgeError> {
    perform(plane, Operation::CreateStream, config, credential).await
}

pub async fn start_stream(
    plane: &dyn ControlPlane,
    config: &ProvisionConfig,
    credential: &Credential,
) -> Result<StepRecord, StreamforgeError> {
    perform(plane, Operation::StartStream, config, credential).await
}

pub(crate) async fn execute(
    plane: &dyn ControlPlane,
    operation: Operation,
    config: &ProvisionConfig,
    credential: &Credential,
) -> Result<StepRecord, StreamforgeError> {
    match operation {
        Operation::CreateSourceProfile => create_source_profile(plane, config, credential).await,
        Operation::CreateDestinationProfile => {
            create_destination_profile(plane, config, credential).await
        }
        Operation::CreateStream => create_stream(plane, config, credential).await,
        Operation::StartStream => start_stream(plane, config, credential).await,
    }
}
