//! Per-request authentication: headers in, `AuthCtx` (or an error) out.
//!
//! - No credential: anonymous, the verifier is not consulted. Public routes
//!   stay reachable through the same pipeline.
//! - Credential: exactly one `verify` call, no retry. Success binds the user
//!   and the authorities parsed from its roles. Any failure is returned as is
//!   and no context is produced.

use std::{fmt, sync::Arc};

use axum::http::HeaderMap;

use crate::services::auth::authority::parse_roles;
use crate::services::auth::bearer;
use crate::services::auth::context::{AuthCtx, Authenticated};
use crate::services::auth::verifier::{AuthError, TokenVerifier};

#[derive(Clone)]
pub struct AuthGate {
    verifier: Arc<dyn TokenVerifier>,
}

impl fmt::Debug for AuthGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthGate").finish_non_exhaustive()
    }
}

impl AuthGate {
    pub fn new(verifier: Arc<dyn TokenVerifier>) -> Self {
        Self { verifier }
    }

    pub async fn authenticate(&self, headers: &HeaderMap) -> Result<AuthCtx, AuthError> {
        let Some(token) = bearer::extract(headers) else {
            return Ok(AuthCtx::Anonymous);
        };

        let principal = self.verifier.verify(&token).await?;

        let authorities =
            parse_roles(principal.roles()).map_err(|source| AuthError::MalformedRoles {
                user_id: principal.id(),
                source,
            })?;

        tracing::debug!(
            user_id = principal.id(),
            username = %principal.username(),
            "request authenticated"
        );

        Ok(AuthCtx::Authenticated(Authenticated {
            principal,
            authorities,
        }))
    }
}
