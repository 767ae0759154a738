use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use tracing::error;

use crate::domain::{common::entities::app_errors::CoreError, user::ports::HasherRepository};

/// Argon2id with the crate's default parameters, PHC string output.
#[derive(Debug, Clone, Default)]
pub struct Argon2HasherRepository;

impl Argon2HasherRepository {
    pub fn new() -> Self {
        Self
    }
}

impl HasherRepository for Argon2HasherRepository {
    fn hash_password(&self, password: &str) -> Result<String, CoreError> {
        let salt = SaltString::generate(&mut rand::thread_rng());

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| {
                error!("Failed to hash password: {}", e);
                CoreError::InternalServerError
            })
    }

    fn verify_password(&self, password: &str, hash: &str) -> Result<bool, CoreError> {
        let parsed = PasswordHash::new(hash).map_err(|e| {
            error!("Stored password hash is malformed: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hasher = Argon2HasherRepository::new();
        let hash = hasher.hash_password("correct horse battery").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify_password("correct horse battery", &hash).unwrap());
        assert!(!hasher.verify_password("wrong horse", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = Argon2HasherRepository::new();
        let first = hasher.hash_password("same-password-1").unwrap();
        let second = hasher.hash_password("same-password-1").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_malformed_hash_is_internal_error() {
        let hasher = Argon2HasherRepository::new();
        let result = hasher.verify_password("anything", "not-a-phc-string");
        assert!(matches!(result, Err(CoreError::InternalServerError)));
    }
}
