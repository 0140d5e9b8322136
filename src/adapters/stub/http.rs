// Conforming stub for the registration endpoint. Spun up on an ephemeral
// port by the integration tests so the checks have a target that behaves
// like the real service: same statuses, same envelope, same error bodies.
// The token is an opaque non-empty string, not a verifiable credential.

use crate::adapters::stub::state::{DuplicateIdentity, InMemoryUsers};
use crate::core::user::{NewUser, RegisteredUser, UserEnvelope};
use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct StubState {
    pub users: Arc<InMemoryUsers>,
}

impl StubState {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn router(state: StubState) -> Router {
    Router::new()
        .route("/api/users", post(handle))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn handle(
    State(state): State<StubState>,
    body: Result<Json<UserEnvelope<NewUser>>, JsonRejection>,
) -> impl IntoResponse {
    let Json(envelope) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let user = envelope.user;

    if let Err((field, message)) = validate(&user) {
        return rejection(field, &message);
    }

    match state.users.insert(&user.username, &user.email).await {
        Err(DuplicateIdentity::Username) => rejection("username", "has already been taken"),
        Err(DuplicateIdentity::Email) => rejection("email", "has already been taken"),
        Ok(()) => (
            StatusCode::OK,
            Json(UserEnvelope {
                user: RegisteredUser {
                    username: user.username,
                    email: user.email,
                    bio: None,
                    image: None,
                    token: issue_token(),
                },
            }),
        )
            .into_response(),
    }
}

fn rejection(field: &str, message: &str) -> axum::response::Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(serde_json::json!({ "errors": { field: [message] } })),
    )
        .into_response()
}

fn issue_token() -> String {
    Uuid::now_v7().simple().to_string()
}

fn validate(user: &NewUser) -> Result<(), (&'static str, String)> {
    check_size(&user.username, "username", 2, 20)?;
    check_size(&user.password, "password", 5, 100)?;
    validate_email(&user.email)?;
    Ok(())
}

// Bounds are exclusive on both ends, like the service's own size check.
fn check_size(
    value: &str,
    name: &'static str,
    min: usize,
    max: usize,
) -> Result<(), (&'static str, String)> {
    let length = value.chars().count();
    if length > min && length < max {
        Ok(())
    } else {
        Err((
            name,
            format!("must be longer than {min} characters and less than {max}"),
        ))
    }
}

fn validate_email(email: &str) -> Result<(), (&'static str, String)> {
    if email.is_empty() {
        return Err(("email", "cannot be empty".to_string()));
    }
    if email_is_valid(email) {
        Ok(())
    } else {
        Err(("email", "invalid".to_string()))
    }
}

fn email_is_valid(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let word = |part: &str| {
        !part.is_empty()
            && part
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
    };
    let local_ok = local.split('.').all(word);
    let domain_ok = domain.split('.').count() >= 2 && domain.split('.').all(word);
    local_ok && domain_ok
}
