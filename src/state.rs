/*
 * Responsibility
 * - Shared context bound to the Router (AppState)
 *   - users: UserRepository, auth: AuthGate
 * - Cloned per request, so everything inside is Arc
 */
use std::sync::Arc;

use crate::repos::UserRepository;
use crate::services::auth::AuthGate;

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub auth: Arc<AuthGate>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserRepository>, auth: Arc<AuthGate>) -> Self {
        Self { users, auth }
    }
}
