//! Session token issuing and validation.
//!
//! Tokens are compact HS256 JWTs that live for exactly 24 hours. Validation is
//! stateless and only accepts the HMAC family.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, Result};
use crate::models::identity::Identity;

pub const TOKEN_ISSUER: &str = "rondo-api";
pub const TOKEN_LIFETIME_HOURS: i64 = 24;

/// Claims carried by every session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub user_id: String,
    pub phone: String,
    pub first_name: String,
    pub last_name: String,
    /// Same as `user_id`
    pub sub: String,
    pub iss: String,
    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
}

impl SessionClaims {
    pub fn for_identity(identity: &Identity, now: DateTime<Utc>) -> Self {
        let user_id = identity.user_id();
        let issued_at = now.timestamp();
        Self {
            sub: user_id.clone(),
            user_id,
            phone: identity.phone().to_string(),
            first_name: identity.first_name().to_string(),
            last_name: identity.last_name().to_string(),
            iss: TOKEN_ISSUER.to_string(),
            iat: issued_at,
            nbf: issued_at,
            exp: (now + Duration::hours(TOKEN_LIFETIME_HOURS)).timestamp(),
        }
    }
}

#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenIssuer {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.leeway = 0;
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.set_issuer(&[TOKEN_ISSUER]);
        validation.set_required_spec_claims(&["exp", "nbf", "iss", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn issue(&self, identity: &Identity) -> Result<String> {
        self.sign(&SessionClaims::for_identity(identity, Utc::now()))
    }

    pub fn sign(&self, claims: &SessionClaims) -> Result<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| AppError::TokenSigning(e.to_string()))
    }

    /// Every failure collapses into `AppError::InvalidToken`.
    pub fn validate(&self, token: &str) -> Result<SessionClaims> {
        decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(reason = %e, "Rejected session token");
                AppError::InvalidToken
            })
    }
}
