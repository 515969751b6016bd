/*
 * Responsibility
 * - /me: the authenticated caller
 * - /users/{user_id}: lookup by id, ADMIN only
 * - Authentication already happened in the bearer gate; these only read AuthCtx
 */
use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    api::v1::{dto::users::UserResponse, extractors::CurrentUser},
    error::AppError,
    state::AppState,
};

pub const ADMIN_ROLE: &str = "ADMIN";

pub async fn get_me(CurrentUser(auth): CurrentUser) -> Json<UserResponse> {
    Json(UserResponse::from(&auth.principal))
}

pub async fn get_user(
    State(state): State<AppState>,
    CurrentUser(auth): CurrentUser,
    Path(user_id): Path<i32>,
) -> Result<Json<UserResponse>, AppError> {
    if !auth.has_authority(ADMIN_ROLE) {
        return Err(AppError::Forbidden);
    }

    let user = state
        .users
        .find_by_id(user_id)
        .await?
        .ok_or(AppError::not_found("user"))?;

    Ok(Json(UserResponse::from(&user)))
}
