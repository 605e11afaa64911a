//! User model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A registered user account.
///
/// The stored argon2 hash is never serialized into API responses.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct User {
    pub id: i32,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}

/// Registration and login request body
#[derive(Debug, Deserialize, ToSchema)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Successful login response
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

/// JWT claims carried by an access token.
///
/// Tokens carry no expiration claim: they stay valid until the signing
/// secret changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserClaims {
    pub sub: String,
    pub iat: i64,
}

impl UserClaims {
    /// Create a new JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse and verify a JWT token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &validation,
        )?;
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    fn claims_for(username: &str) -> UserClaims {
        UserClaims {
            sub: username.to_string(),
            iat: chrono::Utc::now().timestamp(),
        }
    }

    #[test]
    fn token_round_trips_username() {
        let token = claims_for("alice").create_token(SECRET).unwrap();
        let decoded = UserClaims::from_token(&token, SECRET).unwrap();
        assert_eq!(decoded.sub, "alice");
    }

    #[test]
    fn token_without_expiry_is_accepted_long_after_issuance() {
        let old = UserClaims {
            sub: "alice".to_string(),
            // Issued far in the past; without an exp claim this must
            // still verify.
            iat: 0,
        };
        let token = old.create_token(SECRET).unwrap();
        assert!(UserClaims::from_token(&token, SECRET).is_ok());
    }

    #[test]
    fn tampered_token_is_rejected() {
        let token = claims_for("alice").create_token(SECRET).unwrap();
        let mut tampered = token.clone();
        tampered.push('x');
        assert!(UserClaims::from_token(&tampered, SECRET).is_err());
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = claims_for("alice").create_token("other-secret").unwrap();
        assert!(UserClaims::from_token(&token, SECRET).is_err());
    }

    #[test]
    fn password_hash_is_not_serialized() {
        let user = User {
            id: 1,
            username: "bob".to_string(),
            password_hash: "$argon2id$secret".to_string(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "bob");
    }
}
