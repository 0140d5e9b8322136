// Runs every registration check in sequence against one target. Checks that
// create users derive isolated identities from the base payload, so the
// suite never collides with itself; the canonical check submits the base
// payload as given.

use crate::application::checks::{registration, uniqueness, validation};
use crate::application::errors::HarnessError;
use crate::core::ports::RegistrationApi;
use crate::core::report::{CheckReport, SuiteReport};
use crate::core::user::NewUser;
use chrono::Utc;

pub async fn run(api: &dyn RegistrationApi, base: &NewUser) -> Result<SuiteReport, HarnessError> {
    let started_at = Utc::now();
    let mut checks = Vec::new();
    for report in [
        registration::register_new_user(api, base).await?,
        uniqueness::duplicate_username_rejected(api, base).await?,
        uniqueness::duplicate_email_rejected(api, base).await?,
        validation::rejects_short_username(api, base).await?,
        validation::rejects_short_password(api, base).await?,
        validation::rejects_invalid_email(api, base).await?,
    ] {
        log_outcome(&report);
        checks.push(report);
    }
    Ok(SuiteReport {
        started_at,
        finished_at: Utc::now(),
        checks,
    })
}

fn log_outcome(report: &CheckReport) {
    if report.passed() {
        tracing::info!(check = report.name, "check passed");
    } else {
        for violation in &report.violations {
            tracing::warn!(check = report.name, %violation, "contract violation");
        }
    }
}
