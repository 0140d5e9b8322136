use registration_checks::adapters::http_api::HttpRegistrationApi;
use registration_checks::application::suite;
use registration_checks::config::HarnessConfig;
use registration_checks::test_support::fixtures::registration::RegistrationUserBuilder;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = HarnessConfig::from_env()?;
    let api = HttpRegistrationApi::new(&config)?;

    let mut user = RegistrationUserBuilder::new().build();
    if config.salt_identities {
        user = user.with_unique_suffix();
    }

    tracing::info!(target_url = %config.base_url, username = %user.username, "running registration contract checks");
    let report = suite::run(&api, &user).await?;

    if report.passed() {
        tracing::info!(checks = report.checks.len(), "all checks passed");
        Ok(())
    } else {
        anyhow::bail!(
            "{} contract violation(s) across {} checks",
            report.violation_count(),
            report.checks.len()
        )
    }
}
