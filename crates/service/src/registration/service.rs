use std::sync::Arc;

use tracing::{error, info, instrument};

use super::domain::{RegisterInput, UserRecord};
use super::errors::{RegistrationError, RepoError};
use super::repository::UserRepository;
use crate::password::PasswordEncryptor;

pub const EMAIL_CHECK_FAILED: &str = "There was an error while checking if the email existed.";
pub const EMAIL_ALREADY_REGISTERED: &str =
    "User registration failed: This email address is already registered.";
pub const ENCRYPTION_FAILED: &str = "There was an error while encrypting the password.";
pub const NOT_REGISTERED: &str = "The user could not be registered successfully.";
pub const REGISTRATION_ERROR: &str = "There was an error while registering the user.";

/// Registration orchestrator: a strictly sequential pipeline of duplicate
/// check, password hashing and persistence, short-circuiting on the first
/// failure. Input is assumed to be already validated by the HTTP layer.
pub struct RegistrationService {
    repo: Arc<dyn UserRepository>,
    encryptor: PasswordEncryptor,
}

impl RegistrationService {
    pub fn new(repo: Arc<dyn UserRepository>, encryptor: PasswordEncryptor) -> Self {
        Self { repo, encryptor }
    }

    /// Exact-match duplicate check; `Ok(None)` means the address is free.
    pub async fn search_email(&self, email: &str) -> Result<Option<UserRecord>, RepoError> {
        self.repo.find_by_email(email).await
    }

    /// Register a new user: lookup, hash, insert — each step awaited to
    /// completion before the next starts.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn register(&self, input: &RegisterInput) -> Result<UserRecord, RegistrationError> {
        let existing = match self.search_email(&input.email).await {
            Ok(found) => found,
            Err(e) => {
                error!(error = %e, "email lookup failed");
                return Err(RegistrationError::Rejected(EMAIL_CHECK_FAILED.into()));
            }
        };
        if existing.is_some() {
            return Err(RegistrationError::Rejected(EMAIL_ALREADY_REGISTERED.into()));
        }

        let password_hash = match self.encryptor.encrypt(&input.password) {
            Ok(hash) => hash,
            Err(e) => {
                error!(error = %e, "password encryption failed");
                return Err(RegistrationError::Rejected(ENCRYPTION_FAILED.into()));
            }
        };

        match self.repo.insert(&input.username, &input.email, &password_hash).await {
            Ok(saved) => {
                info!(user_id = %saved.id, email = %saved.email, "user_registered");
                Ok(saved)
            }
            // The unique index catches the race two concurrent registrations
            // can win against the lookup above.
            Err(RepoError::Conflict) => {
                Err(RegistrationError::Rejected(EMAIL_ALREADY_REGISTERED.into()))
            }
            Err(RepoError::NotSaved) => Err(RegistrationError::Rejected(NOT_REGISTERED.into())),
            Err(e) => {
                error!(error = %e, "user insert failed");
                Err(RegistrationError::Internal(REGISTRATION_ERROR.into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::repository::mock::MockUserRepository;
    use async_trait::async_trait;

    /// Repository whose every operation fails at the infrastructure level.
    struct UnavailableRepository;

    #[async_trait]
    impl UserRepository for UnavailableRepository {
        async fn find_by_email(&self, _email: &str) -> Result<Option<UserRecord>, RepoError> {
            Err(RepoError::Db("connection refused".into()))
        }

        async fn insert(
            &self,
            _username: &str,
            _email: &str,
            _password_hash: &str,
        ) -> Result<UserRecord, RepoError> {
            Err(RepoError::Db("connection refused".into()))
        }
    }

    /// Lookup misses, insert loses the uniqueness race.
    struct RacingRepository;

    #[async_trait]
    impl UserRepository for RacingRepository {
        async fn find_by_email(&self, _email: &str) -> Result<Option<UserRecord>, RepoError> {
            Ok(None)
        }

        async fn insert(
            &self,
            _username: &str,
            _email: &str,
            _password_hash: &str,
        ) -> Result<UserRecord, RepoError> {
            Err(RepoError::Conflict)
        }
    }

    fn input() -> RegisterInput {
        RegisterInput {
            username: "validUser_1".into(),
            email: "user@test.org".into(),
            password: "Secure123!".into(),
        }
    }

    fn service(repo: Arc<dyn UserRepository>) -> RegistrationService {
        RegistrationService::new(repo, PasswordEncryptor::new(1))
    }

    #[tokio::test]
    async fn registers_new_user_with_hashed_password() {
        let svc = service(Arc::new(MockUserRepository::default()));
        let saved = svc.register(&input()).await.unwrap();
        assert_eq!(saved.email, "user@test.org");
        assert!(saved.tasks.is_empty());
        // Plaintext never reaches the repository.
        assert_ne!(saved.password_hash, "Secure123!");
        assert!(saved.password_hash.starts_with("$argon2id$"));
    }

    #[tokio::test]
    async fn rejects_duplicate_email() {
        let svc = service(Arc::new(MockUserRepository::default()));
        svc.register(&input()).await.unwrap();
        let err = svc.register(&input()).await.unwrap_err();
        match err {
            RegistrationError::Rejected(msg) => assert_eq!(msg, EMAIL_ALREADY_REGISTERED),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn lookup_failure_is_reported_as_rejection() {
        let svc = service(Arc::new(UnavailableRepository));
        let err = svc.register(&input()).await.unwrap_err();
        match err {
            RegistrationError::Rejected(msg) => assert_eq!(msg, EMAIL_CHECK_FAILED),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn encryption_failure_is_reported_as_rejection() {
        let svc = RegistrationService::new(
            Arc::new(MockUserRepository::default()),
            PasswordEncryptor::new(0),
        );
        let err = svc.register(&input()).await.unwrap_err();
        match err {
            RegistrationError::Rejected(msg) => assert_eq!(msg, ENCRYPTION_FAILED),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn insert_conflict_maps_to_already_registered() {
        let svc = service(Arc::new(RacingRepository));
        let err = svc.register(&input()).await.unwrap_err();
        match err {
            RegistrationError::Rejected(msg) => assert_eq!(msg, EMAIL_ALREADY_REGISTERED),
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn search_email_reports_misses_and_hits() {
        let svc = service(Arc::new(MockUserRepository::default()));
        assert!(svc.search_email("user@test.org").await.unwrap().is_none());
        svc.register(&input()).await.unwrap();
        let found = svc.search_email("user@test.org").await.unwrap().unwrap();
        assert_eq!(found.email, "user@test.org");
        // Lookup is case-sensitive.
        assert!(svc.search_email("User@test.org").await.unwrap().is_none());
    }
}
