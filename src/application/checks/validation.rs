// Payloads outside the accepted windows must be rejected with a 422 and a
// non-empty `errors.<field>` array. Message text is the service's own
// business; only the status and the error shape are part of the contract.

use crate::core::ports::{ApiResponse, RegistrationApi, TransportError};
use crate::core::report::{CheckReport, Violation};
use crate::core::user::NewUser;
use serde_json::Value;

pub async fn rejects_short_username(
    api: &dyn RegistrationApi,
    base: &NewUser,
) -> Result<CheckReport, TransportError> {
    let mut payload = base.clone().with_unique_suffix();
    payload.username = "J".into();
    run_rejection(api, payload, "rejects_short_username", "username").await
}

pub async fn rejects_short_password(
    api: &dyn RegistrationApi,
    base: &NewUser,
) -> Result<CheckReport, TransportError> {
    let mut payload = base.clone().with_unique_suffix();
    payload.password = "jake".into();
    run_rejection(api, payload, "rejects_short_password", "password").await
}

pub async fn rejects_invalid_email(
    api: &dyn RegistrationApi,
    base: &NewUser,
) -> Result<CheckReport, TransportError> {
    let mut payload = base.clone().with_unique_suffix();
    payload.email = "jake.jake".into();
    run_rejection(api, payload, "rejects_invalid_email", "email").await
}

async fn run_rejection(
    api: &dyn RegistrationApi,
    payload: NewUser,
    name: &'static str,
    field: &'static str,
) -> Result<CheckReport, TransportError> {
    let response = api.register(&payload).await?;
    let mut report = CheckReport::new(name);
    expect_rejection(&mut report, &response, field);
    Ok(report)
}

/// Asserts the rejection shape shared by validation and uniqueness checks:
/// status 422 and at least one non-empty message under `errors.<field>`.
pub(crate) fn expect_rejection(report: &mut CheckReport, response: &ApiResponse, field: &'static str) {
    if response.status != 422 {
        report.record(Violation::Status {
            expected: 422,
            actual: response.status,
        });
    }
    let Some(errors) = response.body.get("errors").and_then(Value::as_object) else {
        report.record(Violation::MissingErrors);
        return;
    };
    match errors.get(field) {
        None => report.record(Violation::MissingErrorField { field }),
        Some(Value::Array(messages))
            if messages
                .iter()
                .any(|message| message.as_str().is_some_and(|text| !text.is_empty())) => {}
        Some(_) => report.record(Violation::EmptyErrorField { field }),
    }
}
