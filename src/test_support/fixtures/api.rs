// Canned-response double for the RegistrationApi port.
//
// Testing guidance
// - `replying` repeats one response forever; `sequence` plays responses in
//   order and repeats the last one.
// - `toggle_offline` makes every call fail at the transport level.

use crate::core::ports::{ApiResponse, RegistrationApi, TransportError};
use crate::core::user::NewUser;
use serde_json::json;
use std::collections::VecDeque;
use tokio::sync::Mutex;

pub struct CannedApi {
    responses: Mutex<VecDeque<ApiResponse>>,
    offline: bool,
    pub submitted: Mutex<Vec<NewUser>>,
}

impl CannedApi {
    pub fn replying(response: ApiResponse) -> Self {
        Self::sequence(vec![response])
    }

    pub fn sequence(responses: Vec<ApiResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            offline: false,
            submitted: Mutex::new(Vec::new()),
        }
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }
}

#[async_trait::async_trait]
impl RegistrationApi for CannedApi {
    async fn register(&self, payload: &NewUser) -> Result<ApiResponse, TransportError> {
        if self.offline {
            return Err(TransportError::Request("target offline".into()));
        }
        self.submitted.lock().await.push(payload.clone());
        let mut responses = self.responses.lock().await;
        let response = if responses.len() > 1 {
            responses.pop_front().expect("queue has more than one entry")
        } else {
            responses
                .front()
                .cloned()
                .expect("CannedApi needs at least one canned response")
        };
        Ok(response)
    }
}

/// 200 response echoing `payload` the way a conforming service would.
pub fn conforming_response(payload: &NewUser) -> ApiResponse {
    ApiResponse {
        status: 200,
        body: json!({
            "user": {
                "username": payload.username,
                "email": payload.email,
                "bio": null,
                "image": null,
                "token": "fixture.token.value"
            }
        }),
    }
}

/// 422 rejection carrying one message under `errors.<field>`.
pub fn rejection_response(field: &str, message: &str) -> ApiResponse {
    ApiResponse {
        status: 422,
        body: json!({ "errors": { field: [message] } }),
    }
}
