// Shared fixture for the canonical registration payload. The JSON file
// carries the exact wire shape, `user` envelope included.

use crate::core::user::{NewUser, UserEnvelope};

const CANONICAL_PAYLOAD: &str = include_str!("json/registration_user.json");

pub struct RegistrationUserBuilder {
    inner: NewUser,
}

impl Default for RegistrationUserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RegistrationUserBuilder {
    pub fn new() -> Self {
        let envelope: UserEnvelope<NewUser> = serde_json::from_str(CANONICAL_PAYLOAD)
            .expect("canonical payload fixture is not valid JSON");
        Self {
            inner: envelope.user,
        }
    }

    pub fn username(mut self, v: impl Into<String>) -> Self {
        self.inner.username = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn password(mut self, v: impl Into<String>) -> Self {
        self.inner.password = v.into();
        self
    }

    pub fn build(self) -> NewUser {
        self.inner
    }
}
