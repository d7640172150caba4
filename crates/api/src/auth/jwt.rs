//! Access-token generation and validation.
//!
//! Access tokens are HS256-signed JWTs whose payload carries a snapshot of
//! the public user record taken at issuance. There is no revocation: a token
//! stays valid until `exp` whatever happens to the account afterwards.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use notekeep_db::models::user::UserResponse;
use serde::{Deserialize, Serialize};

use crate::config::{parse_or, required, ConfigError};

/// JWT claims embedded in every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// The user as it was when the token was issued.
    pub user: UserResponse,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
}

/// Configuration for token generation and validation.
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Token lifetime in minutes, shared by account creation and login.
    pub expiry_mins: i64,
}

/// Default token lifetime in minutes.
pub const DEFAULT_EXPIRY_MINS: i64 = 3600;

impl TokenConfig {
    /// Load token configuration through a variable lookup.
    ///
    /// | Env Var                    | Required | Default |
    /// |----------------------------|----------|---------|
    /// | `ACCESS_TOKEN_SECRET`      | **yes**  | --      |
    /// | `ACCESS_TOKEN_EXPIRY_MINS` | no       | `3600`  |
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret = required("ACCESS_TOKEN_SECRET", lookup)?;
        let expiry_mins = parse_or("ACCESS_TOKEN_EXPIRY_MINS", lookup, DEFAULT_EXPIRY_MINS)?;
        if expiry_mins <= 0 {
            return Err(ConfigError::Invalid {
                name: "ACCESS_TOKEN_EXPIRY_MINS",
                value: expiry_mins.to_string(),
            });
        }
        Ok(Self {
            secret,
            expiry_mins,
        })
    }
}

/// Issue an HS256 access token for the given user.
pub fn generate_access_token(
    user: &UserResponse,
    config: &TokenConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        user: user.clone(),
        exp: now + config.expiry_mins * 60,
        iat: now,
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode an access token, returning the embedded [`Claims`].
///
/// Checks the signature and expiration.
pub fn validate_token(
    token: &str,
    config: &TokenConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> TokenConfig {
        TokenConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            expiry_mins: 30,
        }
    }

    fn test_user() -> UserResponse {
        UserResponse {
            id: notekeep_core::types::new_id(),
            full_name: "Test User".to_string(),
            email: "qwerty@uiop.com".to_string(),
            created_on: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_generate_and_validate_access_token() {
        let config = test_config();
        let user = test_user();
        let token = generate_access_token(&user, &config).expect("token generation should succeed");

        let claims = validate_token(&token, &config).expect("token validation should succeed");
        assert_eq!(claims.user.id, user.id);
        assert_eq!(claims.user.email, "qwerty@uiop.com");
        assert_eq!(claims.exp - claims.iat, 30 * 60);
    }

    #[test]
    fn test_expired_token_fails() {
        let config = test_config();

        // Well beyond the default 60-second leeway.
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            user: test_user(),
            exp: now - 300,
            iat: now - 600,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .expect("encoding should succeed");

        assert!(validate_token(&token, &config).is_err());
    }

    #[test]
    fn test_different_secrets_fail() {
        let config_a = TokenConfig {
            secret: "secret-alpha".to_string(),
            expiry_mins: 30,
        };
        let config_b = TokenConfig {
            secret: "secret-bravo".to_string(),
            expiry_mins: 30,
        };

        let token = generate_access_token(&test_user(), &config_a)
            .expect("token generation should succeed");

        assert!(validate_token(&token, &config_b).is_err());
    }

    #[test]
    fn test_garbage_token_fails() {
        assert!(validate_token("invalidToken", &test_config()).is_err());
    }

    #[test]
    fn test_non_positive_expiry_rejected() {
        let lookup = |key: &str| match key {
            "ACCESS_TOKEN_SECRET" => Some("s".to_string()),
            "ACCESS_TOKEN_EXPIRY_MINS" => Some("0".to_string()),
            _ => None,
        };
        assert!(TokenConfig::from_lookup(&lookup).is_err());
    }
}
