//! Account registration and authentication service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::user::{User, UserClaims},
    repository::Repository,
};

#[derive(Clone)]
pub struct AccountsService {
    repository: Repository,
    config: AuthConfig,
}

impl AccountsService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Register a new account.
    ///
    /// Input shape is not validated beyond what the schema enforces; a
    /// duplicate username surfaces as a conflict from the store.
    pub async fn register(&self, username: &str, password: &str) -> AppResult<User> {
        let password_hash = Self::hash_password(password)?;
        let user = self.repository.users.insert(username, &password_hash).await?;

        tracing::info!(user = %user.username, "account registered");
        Ok(user)
    }

    /// Authenticate by username and password, returning a signed token.
    ///
    /// An unknown username is reported distinctly from a wrong password.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<String> {
        let user = self
            .repository
            .users
            .get_by_username(username)
            .await?
            .ok_or_else(|| AppError::BadRequest("User not found".to_string()))?;

        if !Self::verify_password(&user.password_hash, password)? {
            return Err(AppError::Authentication("Invalid password".to_string()));
        }

        // No expiration claim: tokens stay valid until the secret changes.
        let claims = UserClaims {
            sub: user.username.clone(),
            iat: Utc::now().timestamp(),
        };

        claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    /// Hash a password using Argon2 with a fresh random salt
    pub fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
        Ok(hash.to_string())
    }

    /// Verify a password against a stored hash (constant-time comparison)
    pub fn verify_password(hash: &str, password: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|_| AppError::Internal("Invalid password hash".to_string()))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_original_plaintext_only() {
        let hash = AccountsService::hash_password("pw1").unwrap();
        assert!(AccountsService::verify_password(&hash, "pw1").unwrap());
        assert!(!AccountsService::verify_password(&hash, "pw2").unwrap());
    }

    #[test]
    fn hashing_salts_each_password() {
        let first = AccountsService::hash_password("pw1").unwrap();
        let second = AccountsService::hash_password("pw1").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn malformed_stored_hash_is_an_internal_error() {
        let err = AccountsService::verify_password("not-a-phc-string", "pw1").unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
