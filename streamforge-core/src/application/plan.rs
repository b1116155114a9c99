// streamforge-core/src/application/plan.rs
//
// Dry run: the requests the sequencer would send, without credentials.

use comfy_table::{Table, presets::UTF8_FULL};

use crate::application::operations::build_request;
use crate::domain::provision::{ApiRequest, Endpoints, Operation, ProvisionConfig, Secret};
use crate::error::StreamforgeError;

#[derive(Debug, Clone)]
pub struct PlannedCall {
    pub operation: Operation,
    pub request: ApiRequest,
}

/// The four requests in send order. The database password is masked.
pub fn plan_requests(config: &ProvisionConfig) -> Result<Vec<PlannedCall>, StreamforgeError> {
    let endpoints = Endpoints::from_config(config);
    Operation::SEQUENCE
        .into_iter()
        .map(|operation| {
            Ok(PlannedCall {
                operation,
                request: build_request(operation, config, &endpoints, Secret::redacted())?,
            })
        })
        .collect()
}

pub fn render_plan(calls: &[PlannedCall], with_bodies: bool) -> Result<String, StreamforgeError> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["#", "Operation", "Verb", "URL"]);

    for (i, call) in calls.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            call.operation.to_string(),
            call.request.method.to_string(),
            call.request.url.clone(),
        ]);
    }

    let mut out = table.to_string();
    if with_bodies {
        for call in calls {
            let Some(body) = &call.request.body else {
                continue;
            };
            let pretty = serde_json::to_string_pretty(body)
                .map_err(|e| StreamforgeError::InternalError(e.to_string()))?;
            out.push_str(&format!("\n\n{}:\n{}", call.operation, pretty));
        }
    }
    Ok(out)
}
