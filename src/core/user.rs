use serde::{Deserialize, Serialize};
use uuid::Uuid;

// The registration endpoint accepts usernames of 3..=19 characters. Derived
// identities must stay inside that window.
const SALT_BASE_LEN: usize = 10;

/// Envelope shared by the request and response bodies of `POST /api/users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEnvelope<T> {
    pub user: T,
}

/// Payload submitted to the registration endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// User representation the endpoint returns for a fresh registration.
/// `bio` and `image` serialize as explicit `null` when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub username: String,
    pub email: String,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub token: String,
}

impl NewUser {
    /// Derives an identity that will not collide with earlier registrations
    /// of the same base payload. Username and email get a shared unique
    /// fragment; the password is kept as is. The fragment separator is `_`
    /// because the endpoint's email validation does not accept `+` tags.
    pub fn with_unique_suffix(mut self) -> Self {
        let fragment = unique_fragment();
        let base: String = self.username.chars().take(SALT_BASE_LEN).collect();
        self.username = format!("{base}_{fragment}");
        let email = match self.email.split_once('@') {
            Some((local, domain)) => format!("{local}_{fragment}@{domain}"),
            None => format!("{fragment}@example.test"),
        };
        self.email = email;
        self
    }
}

// Tail of the uuid, not the head: v7 leads with the timestamp, so two ids
// minted in the same millisecond share their first characters.
pub(crate) fn unique_fragment() -> String {
    let id = Uuid::now_v7().simple().to_string();
    id[id.len() - 8..].to_string()
}

#[cfg(test)]
mod registration_user_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_serialize_the_payload_inside_the_user_envelope() {
        let envelope = UserEnvelope {
            user: NewUser {
                username: "Jacob".into(),
                email: "jake@jake.jake".into(),
                password: "jakejake".into(),
            },
        };
        let json = serde_json::to_value(&envelope).expect("serialize failed");
        assert_eq!(
            json,
            serde_json::json!({
                "user": {
                    "username": "Jacob",
                    "email": "jake@jake.jake",
                    "password": "jakejake"
                }
            })
        );
    }

    #[rstest]
    fn it_should_serialize_unset_bio_and_image_as_null() {
        let envelope = UserEnvelope {
            user: RegisteredUser {
                username: "Jacob".into(),
                email: "jake@jake.jake".into(),
                bio: None,
                image: None,
                token: "abc".into(),
            },
        };
        let json = serde_json::to_value(&envelope).expect("serialize failed");
        assert!(json["user"]["bio"].is_null());
        assert!(json["user"]["image"].is_null());
        assert_eq!(json["user"]["token"], "abc");
    }

    #[rstest]
    fn it_should_derive_a_distinct_identity_and_keep_the_password() {
        let base = NewUser {
            username: "Jacob".into(),
            email: "jake@jake.jake".into(),
            password: "jakejake".into(),
        };
        let derived = base.clone().with_unique_suffix();
        assert_ne!(derived.username, base.username);
        assert_ne!(derived.email, base.email);
        assert_eq!(derived.password, base.password);
        assert!(derived.username.starts_with("Jacob_"));
        assert!(derived.email.starts_with("jake_"));
        assert!(derived.email.ends_with("@jake.jake"));
    }

    #[rstest]
    fn it_should_keep_derived_usernames_inside_the_accepted_window() {
        let base = NewUser {
            username: "a-username-way-over-the-limit".into(),
            email: "jake@jake.jake".into(),
            password: "jakejake".into(),
        };
        let derived = base.with_unique_suffix();
        let length = derived.username.chars().count();
        assert!((3..=19).contains(&length), "got {length} chars");
    }

    #[rstest]
    fn it_should_not_produce_the_same_identity_twice() {
        let base = NewUser {
            username: "Jacob".into(),
            email: "jake@jake.jake".into(),
            password: "jakejake".into(),
        };
        let first = base.clone().with_unique_suffix();
        let second = base.with_unique_suffix();
        assert_ne!(first.username, second.username);
        assert_ne!(first.email, second.email);
    }
}
