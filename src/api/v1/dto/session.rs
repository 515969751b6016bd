use serde::Serialize;

use crate::api::v1::dto::users::UserResponse;
use crate::services::auth::AuthCtx;

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub authenticated: bool,
    pub user: Option<UserResponse>,
    /// Parsed authorities, sorted; empty when anonymous.
    pub authorities: Vec<String>,
}

impl From<&AuthCtx> for SessionResponse {
    fn from(ctx: &AuthCtx) -> Self {
        Self {
            authenticated: ctx.is_authenticated(),
            user: ctx.principal().map(UserResponse::from),
            authorities: ctx.authorities().map(|a| a.to_string()).collect(),
        }
    }
}
