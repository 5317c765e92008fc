use async_trait::async_trait;

use super::domain::UserRecord;
use super::errors::RepoError;

/// Repository abstraction for user persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Exact-match (case-sensitive) lookup by email.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, RepoError>;

    /// Insert a new user with an already-hashed password.
    async fn insert(
        &self,
        username: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<UserRecord, RepoError>;
}

/// Simple in-memory mock repository for tests
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use uuid::Uuid;

    #[derive(Default)]
    pub struct MockUserRepository {
        users: Mutex<HashMap<String, UserRecord>>, // key: email
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, RepoError> {
            let users = self.users.lock().unwrap();
            Ok(users.get(email).cloned())
        }

        async fn insert(
            &self,
            username: &str,
            email: &str,
            password_hash: &str,
        ) -> Result<UserRecord, RepoError> {
            let mut users = self.users.lock().unwrap();
            if users.contains_key(email) {
                return Err(RepoError::Conflict);
            }
            let record = UserRecord {
                id: Uuid::new_v4(),
                username: username.to_string(),
                email: email.to_string(),
                password_hash: password_hash.to_string(),
                tasks: Vec::new(),
            };
            users.insert(email.to_string(), record.clone());
            Ok(record)
        }
    }
}
