/*
 * Responsibility
 * - GET /session: what the bearer gate made of this request
 * - Public: anonymous callers get `authenticated: false`
 */
use axum::Json;

use crate::api::v1::{dto::session::SessionResponse, extractors::AuthCtxExtractor};

pub async fn get_session(AuthCtxExtractor(ctx): AuthCtxExtractor) -> Json<SessionResponse> {
    Json(SessionResponse::from(&ctx))
}
