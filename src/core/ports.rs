// Ports define what the checks need from the outside world, without implementing it.
//
// Purpose
// - Describe the transport to the service under test as a trait.
//
// Responsibilities
// - Keep the checks independent of any HTTP client by coding against the trait.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits in the adapters layer.
//
// Testing guidance
// - Provide canned-response implementations for unit tests.

use crate::core::user::NewUser;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("response body is not valid JSON: {0}")]
    Body(String),

    #[error("failed to build http client: {0}")]
    Client(String),
}

/// Raw observable outcome of one request: the status code and the parsed
/// JSON body, with no interpretation applied.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

#[async_trait]
pub trait RegistrationApi: Send + Sync {
    /// Submits `payload` to the registration endpoint. Implementations own
    /// the wire shape, including the `user` envelope.
    async fn register(&self, payload: &NewUser) -> Result<ApiResponse, TransportError>;
}
