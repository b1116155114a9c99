// streamforge-core/src/application/mod.rs

pub mod operations;
pub mod plan;
pub mod sequencer;
pub mod settle;

// --- RE-EXPORTS (FACADE PATTERN) ---
// `use streamforge_core::application::{run_provisioning, plan_requests};`

pub use operations::{
    create_destination_profile, create_source_profile, create_stream, start_stream,
};
pub use plan::{PlannedCall, plan_requests, render_plan};
pub use sequencer::run_provisioning;
pub use settle::SettleStrategy;
