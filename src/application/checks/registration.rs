use crate::core::ports::{ApiResponse, RegistrationApi, TransportError};
use crate::core::report::{CheckReport, Violation};
use crate::core::user::NewUser;
use serde_json::Value;

/// Registering a fresh user must answer 200 with a `user` object that echoes
/// the submitted username and email, carries null `bio` and `image`, and a
/// non-empty `token` string. One request, no retries; a transport failure
/// propagates, everything else lands in the report.
pub async fn register_new_user(
    api: &dyn RegistrationApi,
    payload: &NewUser,
) -> Result<CheckReport, TransportError> {
    let response = api.register(payload).await?;
    let mut report = CheckReport::new("register_new_user");
    if response.status != 200 {
        report.record(Violation::Status {
            expected: 200,
            actual: response.status,
        });
    }
    let Some(user) = user_object(&response) else {
        report.record(Violation::MissingUser);
        return Ok(report);
    };
    expect_echo(&mut report, user, "username", &payload.username);
    expect_echo(&mut report, user, "email", &payload.email);
    expect_null(&mut report, user, "bio");
    expect_null(&mut report, user, "image");
    expect_token(&mut report, user);
    Ok(report)
}

fn user_object(response: &ApiResponse) -> Option<&serde_json::Map<String, Value>> {
    response.body.get("user")?.as_object()
}

fn expect_echo(
    report: &mut CheckReport,
    user: &serde_json::Map<String, Value>,
    field: &'static str,
    expected: &str,
) {
    match user.get(field) {
        None => report.record(Violation::MissingField { field }),
        Some(Value::String(actual)) if actual == expected => {}
        Some(Value::String(actual)) => report.record(Violation::FieldMismatch {
            field,
            expected: expected.to_string(),
            actual: actual.clone(),
        }),
        Some(other) => report.record(Violation::NotAString {
            field,
            actual: other.to_string(),
        }),
    }
}

// The original check indexes the key, so an absent key is as much a
// deviation as a non-null value.
fn expect_null(report: &mut CheckReport, user: &serde_json::Map<String, Value>, field: &'static str) {
    match user.get(field) {
        None => report.record(Violation::MissingField { field }),
        Some(Value::Null) => {}
        Some(other) => report.record(Violation::NotNull {
            field,
            actual: other.to_string(),
        }),
    }
}

fn expect_token(report: &mut CheckReport, user: &serde_json::Map<String, Value>) {
    match user.get("token") {
        None => report.record(Violation::MissingField { field: "token" }),
        Some(Value::String(token)) if token.is_empty() => report.record(Violation::EmptyToken),
        Some(Value::String(_)) => {}
        Some(other) => report.record(Violation::NotAString {
            field: "token",
            actual: other.to_string(),
        }),
    }
}
