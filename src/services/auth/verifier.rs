//! Token verification contract consumed by the gate.

use async_trait::async_trait;
use thiserror::Error;

use crate::repos::User;
use crate::repos::error::RepoError;
use crate::services::auth::authority::AuthorityError;

/// Why a presented token was not accepted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidTokenError {
    #[error("token is empty")]
    Empty,
    #[error("token is malformed")]
    Malformed,
    #[error("token has expired")]
    Expired,
    #[error("token signature does not validate")]
    BadSignature,
    #[error("token claims rejected: {0}")]
    Claims(String),
    #[error("token subject does not resolve to a known user")]
    UnknownSubject,
}

/// Everything that can stop a request carrying a credential from authenticating.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid token: {0}")]
    InvalidToken(#[from] InvalidTokenError),
    #[error("stored roles for user {user_id} are malformed: {source}")]
    MalformedRoles {
        user_id: i32,
        #[source]
        source: AuthorityError,
    },
    #[error("user lookup failed: {0}")]
    Repo(#[from] RepoError),
}

/// Decodes a raw token into the user it was issued for.
///
/// Called once per request that carries a credential, from many requests at
/// once. Any caching or timeout policy belongs to the implementation.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<User, AuthError>;
}
