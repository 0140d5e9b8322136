use crate::config::HarnessConfig;
use crate::core::ports::{ApiResponse, RegistrationApi, TransportError};
use crate::core::user::{NewUser, UserEnvelope};
use async_trait::async_trait;
use std::time::Duration;

/// `RegistrationApi` over a real HTTP connection to the service under test.
pub struct HttpRegistrationApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpRegistrationApi {
    pub fn new(config: &HarnessConfig) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|err| TransportError::Client(err.to_string()))?;
        Ok(Self {
            base_url: config.base_url.clone(),
            http,
        })
    }
}

#[async_trait]
impl RegistrationApi for HttpRegistrationApi {
    async fn register(&self, payload: &NewUser) -> Result<ApiResponse, TransportError> {
        tracing::debug!(username = %payload.username, "submitting registration payload");
        let response = self
            .http
            .post(format!("{}/api/users", self.base_url))
            .json(&UserEnvelope {
                user: payload.clone(),
            })
            .send()
            .await
            .map_err(|err| TransportError::Request(err.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .json()
            .await
            .map_err(|err| TransportError::Body(err.to_string()))?;
        Ok(ApiResponse { status, body })
    }
}
