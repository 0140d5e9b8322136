use chrono::{DateTime, Utc};
use thiserror::Error;

/// One way the observed response deviated from the registration contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("expected status {expected}, got {actual}")]
    Status { expected: u16, actual: u16 },

    #[error("response body has no `user` object")]
    MissingUser,

    #[error("`user.{field}` is missing from the response")]
    MissingField { field: &'static str },

    #[error("`user.{field}` is not a string: {actual}")]
    NotAString { field: &'static str, actual: String },

    #[error("`user.{field}` is {actual:?}, expected {expected:?}")]
    FieldMismatch {
        field: &'static str,
        expected: String,
        actual: String,
    },

    #[error("`user.{field}` should be null for a fresh registration, got {actual}")]
    NotNull { field: &'static str, actual: String },

    #[error("`user.token` is empty")]
    EmptyToken,

    #[error("rejection body has no `errors` object")]
    MissingErrors,

    #[error("`errors.{field}` is missing from the rejection body")]
    MissingErrorField { field: &'static str },

    #[error("`errors.{field}` carries no messages")]
    EmptyErrorField { field: &'static str },
}

/// Outcome of a single check: a name and whatever violations were observed.
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub name: &'static str,
    pub violations: Vec<Violation>,
}

impl CheckReport {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            violations: Vec::new(),
        }
    }

    pub fn record(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Aggregate outcome of one suite run.
#[derive(Debug, Clone)]
pub struct SuiteReport {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub checks: Vec<CheckReport>,
}

impl SuiteReport {
    pub fn passed(&self) -> bool {
        self.checks.iter().all(CheckReport::passed)
    }

    pub fn violation_count(&self) -> usize {
        self.checks.iter().map(|check| check.violations.len()).sum()
    }
}
