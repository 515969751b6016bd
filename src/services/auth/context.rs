/*
 * Responsibility
 * - The per-request authentication outcome (AuthCtx)
 * - The gate builds it, middleware stores it in request extensions,
 *   handlers receive it through extractors
 *
 * Notes
 * - One value per request. It is never cached or shared across requests.
 */
use std::collections::BTreeSet;

use crate::repos::User;
use crate::services::auth::authority::Authority;

/// Outcome of authenticating one request.
#[derive(Debug, Clone, Default)]
pub enum AuthCtx {
    /// No credential was presented.
    #[default]
    Anonymous,
    Authenticated(Authenticated),
}

/// A verified principal together with the authorities granted by its roles.
#[derive(Debug, Clone)]
pub struct Authenticated {
    pub principal: User,
    pub authorities: BTreeSet<Authority>,
}

impl Authenticated {
    pub fn has_authority(&self, role: &str) -> bool {
        self.authorities.iter().any(|a| a.as_str() == role)
    }
}

impl AuthCtx {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub fn principal(&self) -> Option<&User> {
        match self {
            Self::Authenticated(auth) => Some(&auth.principal),
            Self::Anonymous => None,
        }
    }

    /// Empty for anonymous requests.
    pub fn authorities(&self) -> impl Iterator<Item = &Authority> {
        match self {
            Self::Authenticated(auth) => Some(auth.authorities.iter()),
            Self::Anonymous => None,
        }
        .into_iter()
        .flatten()
    }
}
