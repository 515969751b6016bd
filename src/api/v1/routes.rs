/*
 * Responsibility
 * - URL layout of v1
 * - Every route sits behind the bearer gate (installed in app.rs);
 *   public vs. authenticated is decided per handler by its extractor
 */
use axum::{Router, routing::get};

use crate::state::AppState;

use crate::api::v1::handlers::{
    health::health,
    session::get_session,
    users::{get_me, get_user},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/session", get(get_session))
        .route("/me", get(get_me))
        .route("/users/{user_id}", get(get_user))
}
