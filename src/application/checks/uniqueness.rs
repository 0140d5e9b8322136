// Re-registering a taken username or email must be rejected with a 422 and
// "has already been taken" under the colliding field. Each check seeds its
// own fresh identity first, so it never depends on earlier checks and never
// pollutes the canonical payload.

use crate::application::checks::validation::expect_rejection;
use crate::core::ports::{RegistrationApi, TransportError};
use crate::core::report::{CheckReport, Violation};
use crate::core::user::NewUser;

pub async fn duplicate_username_rejected(
    api: &dyn RegistrationApi,
    base: &NewUser,
) -> Result<CheckReport, TransportError> {
    let seeded = base.clone().with_unique_suffix();
    let mut collider = base.clone().with_unique_suffix();
    collider.username = seeded.username.clone();
    run_collision(api, seeded, collider, "duplicate_username_rejected", "username").await
}

pub async fn duplicate_email_rejected(
    api: &dyn RegistrationApi,
    base: &NewUser,
) -> Result<CheckReport, TransportError> {
    let seeded = base.clone().with_unique_suffix();
    let mut collider = base.clone().with_unique_suffix();
    collider.email = seeded.email.clone();
    run_collision(api, seeded, collider, "duplicate_email_rejected", "email").await
}

async fn run_collision(
    api: &dyn RegistrationApi,
    seeded: NewUser,
    collider: NewUser,
    name: &'static str,
    field: &'static str,
) -> Result<CheckReport, TransportError> {
    let mut report = CheckReport::new(name);
    let seed = api.register(&seeded).await?;
    if seed.status != 200 {
        // Without the seeded user there is no collision to provoke.
        report.record(Violation::Status {
            expected: 200,
            actual: seed.status,
        });
        return Ok(report);
    }
    let response = api.register(&collider).await?;
    expect_rejection(&mut report, &response, field);
    Ok(report)
}
