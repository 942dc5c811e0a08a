pub mod client;
pub mod http_client;
pub mod scrub;
pub mod types;

pub use client::InferenceClient;
pub use http_client::build_client;
pub use scrub::sanitize_api_error;
pub use types::{ChatMessage, ChatRequest, ChatResponse};
