use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::services::auth::{AuthCtx, Authenticated};

/// Gives handlers the AuthCtx of the current request.
///
/// The gate inserts an AuthCtx into every request it sees, anonymous or not.
/// A missing one means the gate is not installed on this route: 401.
pub struct AuthCtxExtractor(pub AuthCtx);

impl<S> FromRequestParts<S> for AuthCtxExtractor
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthCtx>()
            .cloned()
            .map(AuthCtxExtractor)
            .ok_or(AppError::Unauthorized)
    }
}

/// The authenticated principal. Anonymous requests are rejected with 401.
pub struct CurrentUser(pub Authenticated);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let AuthCtxExtractor(ctx) = AuthCtxExtractor::from_request_parts(parts, state).await?;

        match ctx {
            AuthCtx::Authenticated(auth) => Ok(CurrentUser(auth)),
            AuthCtx::Anonymous => Err(AppError::Unauthorized),
        }
    }
}
