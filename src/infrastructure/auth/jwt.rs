//! JWT token generation and validation
//!
//! Production deployments sign with RS256 using PEM key material supplied
//! base64-encoded through the environment; development and tests can use an
//! HS256 shared secret instead. Claims carry the subject identifier, the
//! role, and the event reference so downstream handlers never need a
//! database round trip to authorize by role.

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::domain::user::{User, UserRole};
use crate::domain::DomainError;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Subject (user ID)
    pub sub: String,
    /// Role at issue time
    pub role: UserRole,
    /// Event reference at issue time, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<String>,
    /// Issued at (Unix epoch seconds)
    pub iat: i64,
    /// Expiration (Unix epoch seconds)
    pub exp: i64,
}

impl JwtClaims {
    /// Create claims for a user
    pub fn new(user: &User, expiration_hours: u64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours as i64);

        Self {
            sub: user.id().as_str().to_string(),
            role: user.role(),
            event: user.event().map(|e| e.as_str().to_string()),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        }
    }

    /// Get the user ID from the claims
    pub fn user_id(&self) -> &str {
        &self.sub
    }
}

/// JWT signing and validation service
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    expiration_hours: u64,
}

impl Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("algorithm", &self.algorithm)
            .field("expiration_hours", &self.expiration_hours)
            .field("keys", &"[hidden]")
            .finish()
    }
}

impl JwtService {
    /// HS256 service from a shared secret
    pub fn from_secret(secret: &str, expiration_hours: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            algorithm: Algorithm::HS256,
            expiration_hours,
        }
    }

    /// RS256 service from base64-encoded PEM key material
    ///
    /// The private and public keys arrive base64-wrapped so they can travel
    /// through single-line environment variables.
    pub fn from_base64_pem(
        private_key: &str,
        public_key: &str,
        expiration_hours: u64,
    ) -> Result<Self, DomainError> {
        let private_pem = STANDARD.decode(private_key).map_err(|e| {
            DomainError::configuration(format!("Invalid base64 in private key: {}", e))
        })?;
        let public_pem = STANDARD.decode(public_key).map_err(|e| {
            DomainError::configuration(format!("Invalid base64 in public key: {}", e))
        })?;

        let encoding_key = EncodingKey::from_rsa_pem(&private_pem)
            .map_err(|e| DomainError::configuration(format!("Invalid RSA private key: {}", e)))?;
        let decoding_key = DecodingKey::from_rsa_pem(&public_pem)
            .map_err(|e| DomainError::configuration(format!("Invalid RSA public key: {}", e)))?;

        Ok(Self {
            encoding_key,
            decoding_key,
            algorithm: Algorithm::RS256,
            expiration_hours,
        })
    }

    /// Issue a token for a user
    pub fn generate(&self, user: &User) -> Result<String, DomainError> {
        let claims = JwtClaims::new(user, self.expiration_hours);

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| DomainError::internal(format!("Failed to generate token: {}", e)))
    }

    /// Validate a token and return its claims
    pub fn validate(&self, token: &str) -> Result<JwtClaims, DomainError> {
        let validation = Validation::new(self.algorithm);

        decode::<JwtClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| DomainError::credential(format!("Invalid token: {}", e)))
    }

    /// Configured token lifetime in hours
    pub fn expiration_hours(&self) -> u64 {
        self.expiration_hours
    }
}
