pub mod http;
pub mod prompt;

pub use http::ReqwestControlPlane;
pub use prompt::PromptCredentials;
