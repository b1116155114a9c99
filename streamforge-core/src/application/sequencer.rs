// streamforge-core/src/application/sequencer.rs

use std::time::Instant;
use tracing::{error, info, instrument};

use crate::application::operations::{self, resource_label};
use crate::application::settle::SettleStrategy;
use crate::domain::provision::{Credential, Operation, ProvisionConfig, ProvisionReport, StepRecord};
use crate::error::StreamforgeError;
use crate::ports::control_plane::ControlPlane;

/// Runs the four operations in order and stops at the first rejection.
///
/// A rejection is reported through the returned [`ProvisionReport`] (the
/// failing step carries the response body). Transport failures come back as
/// `Err`. Nothing already created is rolled back.
#[instrument(skip_all, fields(project = %config.project_id, location = %config.location))]
pub async fn run_provisioning(
    plane: &dyn ControlPlane,
    config: &ProvisionConfig,
    credential: &Credential,
    settle: &SettleStrategy,
) -> Result<ProvisionReport, StreamforgeError> {
    let start = Instant::now();
    let mut report = ProvisionReport {
        steps: Operation::SEQUENCE
            .iter()
            .map(|op| StepRecord::pending(*op, resource_label(*op, config)))
            .collect(),
    };

    for (index, operation) in Operation::SEQUENCE.into_iter().enumerate() {
        if operation == Operation::StartStream {
            settle.wait(plane, config, credential).await?;
        }

        let step = operations::execute(plane, operation, config, credential).await?;
        if let Some(line) = step.message() {
            println!("{}", line);
        }

        let succeeded = step.outcome.is_success();
        report.steps[index] = step;
        if !succeeded {
            error!(%operation, "Provisioning aborted");
            return Ok(report);
        }
    }

    info!(elapsed = ?start.elapsed(), "All provisioning steps succeeded");
    Ok(report)
}
