/*
 * Responsibility
 * - User response DTO
 * - The password hash is never part of any response
 */
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::repos::User;

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub roles: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            username: user.username().to_string(),
            email: user.email().to_string(),
            roles: user
                .roles()
                .split(',')
                .map(|r| r.trim().to_string())
                .filter(|r| !r.is_empty())
                .collect(),
            created_at: user.created_at(),
        }
    }
}
