//! Authentication service - Bearer token verification.
//!
//! Users sign in with an external identity provider; this service only
//! checks the tokens it issues. `issue_token` exists for local tooling and
//! shares the signing configuration.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::{Config, SECONDS_PER_HOUR, TOKEN_TYPE_BEARER};
use crate::errors::{AppError, AppResult};

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User login
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

/// Token response returned by the `token` command
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    /// Token type (always "Bearer")
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Token expiration time in seconds
    #[schema(example = 86400)]
    pub expires_in: i64,
}

/// Authentication service trait for dependency injection.
pub trait AuthService: Send + Sync {
    /// Sign a token for `login`
    fn issue_token(&self, login: &str) -> AppResult<TokenResponse>;

    /// Verify JWT token and extract claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// HS256 implementation of AuthService.
pub struct Authenticator {
    config: Config,
}

impl Authenticator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl AuthService for Authenticator {
    fn issue_token(&self, login: &str) -> AppResult<TokenResponse> {
        let now = Utc::now();
        let lifetime = self
            .config
            .jwt_expiration_hours
            .checked_mul(SECONDS_PER_HOUR)
            .and_then(Duration::try_seconds)
            .ok_or_else(|| AppError::internal("token lifetime out of range"))?;
        let expires_at = now
            .checked_add_signed(lifetime)
            .ok_or_else(|| AppError::internal("token expiry out of range"))?;

        let claims = Claims {
            sub: login.to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret_bytes()),
        )?;

        Ok(TokenResponse {
            access_token: token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            expires_in: lifetime.num_seconds(),
        })
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }
}
