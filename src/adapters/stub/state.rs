// In memory user registry backing the stub registration endpoint.
//
// Purpose
// - Stand in for the service fixture so the check suite can run without a
//   deployed service or database.
//
// Responsibilities
// - Track taken usernames and emails per stub instance.
// - Enforce uniqueness case-insensitively, matching the case-insensitive
//   columns of the real store.

use tokio::sync::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateIdentity {
    Username,
    Email,
}

struct StoredUser {
    username: String,
    email: String,
}

#[derive(Default)]
pub struct InMemoryUsers {
    inner: RwLock<Vec<StoredUser>>,
}

impl InMemoryUsers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the identity, or reports which field is already taken.
    /// Username collisions win over email collisions when both apply.
    pub async fn insert(&self, username: &str, email: &str) -> Result<(), DuplicateIdentity> {
        let mut guard = self.inner.write().await;
        let username = username.to_lowercase();
        let email = email.to_lowercase();
        if guard.iter().any(|user| user.username == username) {
            return Err(DuplicateIdentity::Username);
        }
        if guard.iter().any(|user| user.email == email) {
            return Err(DuplicateIdentity::Email);
        }
        guard.push(StoredUser { username, email });
        Ok(())
    }

    pub async fn registered_count(&self) -> usize {
        self.inner.read().await.len()
    }
}

#[cfg(test)]
mod in_memory_users_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_register_distinct_identities() {
        let users = InMemoryUsers::new();
        users
            .insert("Jacob", "jake@jake.jake")
            .await
            .expect("first insert failed");
        users
            .insert("Anah", "anah@anah.anah")
            .await
            .expect("second insert failed");
        assert_eq!(users.registered_count().await, 2);
    }

    #[rstest]
    #[case("Jacob", "other@jake.jake", DuplicateIdentity::Username)]
    #[case("JACOB", "other@jake.jake", DuplicateIdentity::Username)]
    #[case("Other", "jake@jake.jake", DuplicateIdentity::Email)]
    #[case("Other", "JAKE@JAKE.JAKE", DuplicateIdentity::Email)]
    #[tokio::test]
    async fn it_should_reject_a_taken_identity_ignoring_case(
        #[case] username: &str,
        #[case] email: &str,
        #[case] expected: DuplicateIdentity,
    ) {
        let users = InMemoryUsers::new();
        users
            .insert("Jacob", "jake@jake.jake")
            .await
            .expect("seed insert failed");
        let result = users.insert(username, email).await;
        assert_eq!(result, Err(expected));
        assert_eq!(users.registered_count().await, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_the_username_when_both_fields_collide() {
        let users = InMemoryUsers::new();
        users
            .insert("Jacob", "jake@jake.jake")
            .await
            .expect("seed insert failed");
        let result = users.insert("Jacob", "jake@jake.jake").await;
        assert_eq!(result, Err(DuplicateIdentity::Username));
    }
}
