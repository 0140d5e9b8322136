#![allow(dead_code)]

// Shared helpers for the integration tests: serve a stub (or any router) on
// an ephemeral port and hand out a client pointed at it. Every test gets its
// own instance, which also gives every test a fresh, empty user store.

use axum::Router;
use registration_checks::adapters::http_api::HttpRegistrationApi;
use registration_checks::adapters::stub::http::{StubState, router};
use registration_checks::config::HarnessConfig;

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    pub fn api(&self) -> HttpRegistrationApi {
        HttpRegistrationApi::new(&HarnessConfig {
            base_url: self.address.clone(),
            timeout_ms: 5_000,
            salt_identities: false,
        })
        .expect("failed to build the http client")
    }
}

pub async fn spawn_stub() -> TestApp {
    spawn_router(router(StubState::new())).await
}

pub async fn spawn_router(app: Router) -> TestApp {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind an ephemeral port");
    let address = format!(
        "http://{}",
        listener.local_addr().expect("listener has no local address")
    );
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server died");
    });
    TestApp { address }
}
