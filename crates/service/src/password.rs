use argon2::password_hash::{
    Error as PasswordHashError, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
};
use argon2::{Algorithm, Argon2, Params, Version};
use rand::rngs::OsRng;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HashError {
    #[error("invalid cost factor: {0}")]
    InvalidCost(u32),
    #[error("hashing failed: {0}")]
    Hash(String),
}

/// Salted one-way password hashing with a configurable work factor.
///
/// The cost factor maps to the Argon2id iteration count; memory and
/// parallelism stay at the crate defaults. Each password gets a fresh
/// random salt from the OS.
#[derive(Debug, Clone)]
pub struct PasswordEncryptor {
    cost: u32,
}

impl PasswordEncryptor {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    fn hasher(&self) -> Result<Argon2<'static>, HashError> {
        let params = Params::new(Params::DEFAULT_M_COST, self.cost, Params::DEFAULT_P_COST, None)
            .map_err(|_| HashError::InvalidCost(self.cost))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }

    /// Hash a plaintext password with a random per-password salt.
    pub fn encrypt(&self, password: &str) -> Result<String, HashError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .hasher()?
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| HashError::Hash(e.to_string()))?
            .to_string();
        Ok(hash)
    }

    /// Verify a plaintext password against a stored hash.
    ///
    /// A genuine mismatch is `Ok(false)`; a malformed hash or any other
    /// verification failure is `Err`, so callers can tell the two apart.
    pub fn compare(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let parsed = PasswordHash::new(hash).map_err(|e| HashError::Hash(e.to_string()))?;
        match Argon2::default().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(PasswordHashError::Password) => Ok(false),
            Err(e) => Err(HashError::Hash(e.to_string())),
        }
    }
}
