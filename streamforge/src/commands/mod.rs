// streamforge/src/commands/mod.rs

pub mod plan;
pub mod provision;
pub mod start;
