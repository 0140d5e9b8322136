use thiserror::Error;

pub const TARGET_URL_VAR: &str = "REGISTRATION_TARGET_URL";
pub const TIMEOUT_MS_VAR: &str = "REGISTRATION_TIMEOUT_MS";
pub const SALT_IDENTITIES_VAR: &str = "REGISTRATION_SALT_IDENTITIES";

const DEFAULT_TIMEOUT_MS: u64 = 5_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} is required")]
    Missing { name: &'static str },

    #[error("{name} is not valid: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Harness settings, read from the environment.
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    /// Base URL of the service under test, without a trailing slash.
    pub base_url: String,
    pub timeout_ms: u64,
    /// When set, the canonical payload gets a derived unique identity so the
    /// suite can run repeatedly against a store that is never reset.
    pub salt_identities: bool,
}

impl HarnessConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup(TARGET_URL_VAR)
            .map(|raw| raw.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::Missing {
                name: TARGET_URL_VAR,
            })?;

        let timeout_ms = match lookup(TIMEOUT_MS_VAR) {
            None => DEFAULT_TIMEOUT_MS,
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: TIMEOUT_MS_VAR,
                reason: format!("{raw:?} is not a number of milliseconds"),
            })?,
        };

        let salt_identities = match lookup(SALT_IDENTITIES_VAR).as_deref() {
            None => false,
            Some("true") | Some("1") => true,
            Some("false") | Some("0") => false,
            Some(raw) => {
                return Err(ConfigError::Invalid {
                    name: SALT_IDENTITIES_VAR,
                    reason: format!("{raw:?} is not a boolean"),
                });
            }
        };

        Ok(Self {
            base_url,
            timeout_ms,
            salt_identities,
        })
    }
}
