// streamforge-core/src/ports/mod.rs

pub mod control_plane;
pub mod credentials;

pub use control_plane::{ApiResponse, ControlPlane};
pub use credentials::CredentialSource;
