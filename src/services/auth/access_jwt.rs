use std::{fmt, sync::Arc};

use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, errors::ErrorKind};
use serde::Deserialize;

use crate::repos::{User, UserRepository};
use crate::services::auth::verifier::{AuthError, InvalidTokenError, TokenVerifier};

impl From<jsonwebtoken::errors::Error> for InvalidTokenError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        match e.kind() {
            ErrorKind::ExpiredSignature => Self::Expired,
            ErrorKind::InvalidSignature => Self::BadSignature,
            ErrorKind::InvalidToken
            | ErrorKind::Base64(_)
            | ErrorKind::Json(_)
            | ErrorKind::Utf8(_) => Self::Malformed,
            _ => Self::Claims(e.to_string()),
        }
    }
}

/// Access token (JWT) claims.
///
/// `id` and `username` identify the user the token was issued for. `roles` is
/// carried for clients but never trusted: authorities come from the stored record.
#[derive(Debug, Clone, Deserialize)]
#[cfg_attr(test, derive(serde::Serialize))]
pub struct AccessTokenClaims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub iss: Option<String>,
    pub id: i32,
    pub username: String,
    #[serde(default)]
    pub roles: Option<String>,
    pub exp: u64,
}

/// HS512 access-token verifier backed by the user store.
///
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct JwtVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
    users: Arc<dyn UserRepository>,
}

impl fmt::Debug for JwtVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print key material
        f.debug_struct("JwtVerifier")
            .field("validation", &self.validation)
            .finish_non_exhaustive()
    }
}

impl JwtVerifier {
    pub fn new(
        secret: &str,
        issuer: Option<&str>,
        leeway_seconds: u64,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS512);
        if let Some(issuer) = issuer {
            // `set_issuer` alone lets a token without `iss` through.
            validation.set_issuer(&[issuer]);
            validation.set_required_spec_claims(&["exp", "iss"]);
        }
        validation.leeway = leeway_seconds;

        Self {
            decoding_key,
            validation,
            users,
        }
    }

    /// Signature, `exp` (and `iss` when configured) are checked by `jsonwebtoken`;
    /// this additionally rejects an empty `username`.
    pub fn decode_claims(&self, token: &str) -> Result<AccessTokenClaims, InvalidTokenError> {
        if token.trim().is_empty() {
            return Err(InvalidTokenError::Empty);
        }

        let data =
            jsonwebtoken::decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)?;
        let claims = data.claims;

        if claims.username.trim().is_empty() {
            return Err(InvalidTokenError::Claims("empty 'username' claim".into()));
        }

        Ok(claims)
    }
}

#[async_trait]
impl TokenVerifier for JwtVerifier {
    async fn verify(&self, token: &str) -> Result<User, AuthError> {
        let claims = self.decode_claims(token)?;

        let user = self
            .users
            .find_by_username(&claims.username)
            .await?
            .filter(|user| user.id() == claims.id)
            .ok_or(InvalidTokenError::UnknownSubject)?;

        Ok(user)
    }
}
