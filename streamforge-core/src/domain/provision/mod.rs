// src/domain/provision/mod.rs

pub mod configuration;
pub mod credential;
pub mod endpoint;
pub mod outcome;
pub mod payload;

pub use configuration::{
    ApiConfig, DestinationProfileConfig, ProvisionConfig, SettleConfig, SettleMode,
    SourceProfileConfig, StreamConfig,
};
pub use credential::{Credential, Secret};
pub use endpoint::{ApiRequest, Endpoints, Method};
pub use outcome::{Operation, OperationOutcome, ProvisionReport, StepRecord};
