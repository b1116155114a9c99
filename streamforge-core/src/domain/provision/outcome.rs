// src/domain/provision/outcome.rs

use std::fmt;

use crate::domain::error::DomainError;

const HTTP_CONFLICT: u16 = 409;

/// The four remote calls, in the order the sequencer issues them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateSourceProfile,
    CreateDestinationProfile,
    CreateStream,
    StartStream,
}

impl Operation {
    pub const SEQUENCE: [Operation; 4] = [
        Self::CreateSourceProfile,
        Self::CreateDestinationProfile,
        Self::CreateStream,
        Self::StartStream,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateSourceProfile => "create-source-profile",
            Self::CreateDestinationProfile => "create-destination-profile",
            Self::CreateStream => "create-stream",
            Self::StartStream => "start-stream",
        }
    }

    /// Creation calls treat 409 as "already exists". Starting has no such branch.
    pub fn accepts_conflict(&self) -> bool {
        !matches!(self, Self::StartStream)
    }

    fn subject(&self) -> &'static str {
        match self {
            Self::CreateSourceProfile => "Source connection profile",
            Self::CreateDestinationProfile => "Destination connection profile",
            Self::CreateStream | Self::StartStream => "Stream",
        }
    }

    fn failure_prefix(&self) -> &'static str {
        match self {
            Self::CreateSourceProfile => "Issue while creating source connection profile",
            Self::CreateDestinationProfile => "Issue while creating destination connection profile",
            Self::CreateStream => "Issue while creating stream",
            Self::StartStream => "Issue while starting stream",
        }
    }

    fn success_verb(&self) -> &'static str {
        match self {
            Self::StartStream => "started",
            _ => "created",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationOutcome {
    NotAttempted,
    Succeeded,
    AlreadyExists,
    Failed { code: u16, body: String },
}

impl OperationOutcome {
    pub fn classify(operation: Operation, code: u16, body: String) -> Self {
        if (200..300).contains(&code) {
            Self::Succeeded
        } else if code == HTTP_CONFLICT && operation.accepts_conflict() {
            Self::AlreadyExists
        } else {
            Self::Failed { code, body }
        }
    }

    /// `AlreadyExists` takes the same downstream branch as `Succeeded`.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded | Self::AlreadyExists)
    }
}

/// One line of the provisioning report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRecord {
    pub operation: Operation,
    /// Name shown to the operator: display name, or the id for the destination profile.
    pub resource: String,
    pub outcome: OperationOutcome,
}

impl StepRecord {
    pub fn pending(operation: Operation, resource: impl Into<String>) -> Self {
        Self {
            operation,
            resource: resource.into(),
            outcome: OperationOutcome::NotAttempted,
        }
    }

    /// Operator-facing line, `None` while the step has not run.
    pub fn message(&self) -> Option<String> {
        let op = self.operation;
        match &self.outcome {
            OperationOutcome::NotAttempted => None,
            OperationOutcome::Succeeded => Some(format!(
                "{} {} {} successfully",
                op.subject(),
                self.resource,
                op.success_verb()
            )),
            OperationOutcome::AlreadyExists => {
                Some(format!("{} {} already exist", op.subject(), self.resource))
            }
            OperationOutcome::Failed { body, .. } => {
                Some(format!("{}: {}", op.failure_prefix(), body))
            }
        }
    }

    pub fn rejection(&self) -> Option<DomainError> {
        match &self.outcome {
            OperationOutcome::Failed { code, body } => Some(DomainError::RemoteRejected {
                operation: self.operation.to_string(),
                status: *code,
                body: body.clone(),
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProvisionReport {
    pub steps: Vec<StepRecord>,
}

impl ProvisionReport {
    pub fn success(&self) -> bool {
        !self.steps.is_empty() && self.steps.iter().all(|s| s.outcome.is_success())
    }

    pub fn failure(&self) -> Option<&StepRecord> {
        self.steps
            .iter()
            .find(|s| matches!(s.outcome, OperationOutcome::Failed { .. }))
    }

    pub fn attempted(&self) -> impl Iterator<Item = &StepRecord> {
        self.steps
            .iter()
            .filter(|s| s.outcome != OperationOutcome::NotAttempted)
    }
}
