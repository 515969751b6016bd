//! Bearer gate middleware: authenticate → AuthCtx into request extensions.
//!
//! Runs for every route under `/api/v1`, ahead of handlers and any role check.
//! - no `Authorization` header: `AuthCtx::Anonymous`, request continues
//! - valid token: `AuthCtx::Authenticated`, request continues
//! - anything else: the handler never runs, the error is rendered as 401 / 500

use axum::{
    Router,
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::error::AppError;
use crate::services::auth::{AuthError, bearer};
use crate::state::AppState;

/// Install the gate on `router`.
///
/// ```ignore
/// let v1 = api::v1::routes();
/// let v1 = middleware::auth::access::apply(v1, state.clone());
/// app = app.nest("/api/v1", v1);
/// ```
pub fn apply(router: Router<AppState>, state: AppState) -> Router<AppState> {
    // `from_fn` cannot see router state in axum 0.8; hand it over explicitly.
    router.layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let auth_ctx = match state.auth.authenticate(req.headers()).await {
        Ok(ctx) => ctx,
        Err(err @ AuthError::InvalidToken(_)) => {
            tracing::warn!(
                error = %err,
                bearer_scheme = bearer::resolve(req.headers()).is_some(),
                "access token rejected"
            );
            return Err(err.into());
        }
        Err(err) => {
            tracing::error!(error = ?err, "authentication could not complete");
            return Err(err.into());
        }
    };

    // Picked up by the extractors in api::v1::extractors.
    req.extensions_mut().insert(auth_ctx);

    Ok(next.run(req).await)
}
