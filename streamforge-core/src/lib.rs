// streamforge-core/src/lib.rs

#![allow(missing_docs)]
// Memory safety
#![deny(unsafe_code)]
// Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Traits)
// Contracts for the control-plane transport and the credential source.
pub mod ports;

// 2. Domain
// Config records, request payloads, endpoints, outcomes.
// Depends on nothing else in the crate.
pub mod domain;

// 3. Infrastructure (Adapters)
// YAML loader, reqwest control plane, masked prompts.
pub mod infrastructure;

// 4. Application (Use Cases)
// The four remote operations, the settle wait, the sequencer.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use error::StreamforgeError;
