/*
 * Responsibility
 * - The user record (the principal a request authenticates as)
 * - UserRepository: lookup by id / username, insert, credential update
 * - SQLx implementation against `user_tb`
 *
 * Notes
 * - The password hash never leaves this module except through the repository.
 *   It is not serialized and `Debug` redacts it.
 * - `created_at` is assigned by `insert`, roles default to USER when unset.
 */
use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::repos::error::{RepoError, RepoResult};

pub const DEFAULT_ROLE: &str = "USER";

const USERNAME_MAX_CHARS: usize = 20;
const PASSWORD_MAX_CHARS: usize = 60;
const EMAIL_MAX_CHARS: usize = 30;

#[derive(Clone, PartialEq, Eq, FromRow)]
pub struct User {
    id: i32,
    username: String,
    password: String,
    email: String,
    roles: String,
    created_at: DateTime<Utc>,
}

impl User {
    /// Materialize a freshly inserted record.
    pub fn new(id: i32, new_user: NewUser, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            username: new_user.username,
            password: new_user.password,
            email: new_user.email,
            roles: new_user.roles.unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            created_at,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Raw comma-separated role list as stored.
    pub fn roles(&self) -> &str {
        &self.roles
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Password hash, for persistence only.
    pub(crate) fn password_for_storage(&self) -> &str {
        &self.password
    }

    /// Replace email and password hash. Everything else stays as created.
    pub fn update(&mut self, email: impl Into<String>, password: impl Into<String>) {
        self.email = email.into();
        self.password = password.into();
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("email", &self.email)
            .field("roles", &self.roles)
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Input for `UserRepository::insert`. The password is expected to be hashed already.
#[derive(Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: String,
    pub roles: Option<String>,
}

impl NewUser {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.username.trim().is_empty() {
            return Err("username is required");
        }
        if self.username.chars().count() > USERNAME_MAX_CHARS {
            return Err("username must be <= 20 chars");
        }
        if self.password.is_empty() {
            return Err("password is required");
        }
        if self.password.chars().count() > PASSWORD_MAX_CHARS {
            return Err("password must be <= 60 chars");
        }
        if self.email.trim().is_empty() {
            return Err("email is required");
        }
        if self.email.chars().count() > EMAIL_MAX_CHARS {
            return Err("email must be <= 30 chars");
        }
        Ok(())
    }
}

pub(crate) fn validate_credentials(user: &User) -> RepoResult<()> {
    if user.email.trim().is_empty() || user.email.chars().count() > EMAIL_MAX_CHARS {
        return Err(RepoError::Invalid("email"));
    }
    if user.password.is_empty() || user.password.chars().count() > PASSWORD_MAX_CHARS {
        return Err(RepoError::Invalid("password"));
    }
    Ok(())
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<User>>;

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Insert a new user. Sets `created_at` and defaults roles to USER.
    /// A duplicate username surfaces as `RepoError::Conflict`.
    async fn insert(&self, new_user: NewUser) -> RepoResult<User>;

    /// Persist the result of `User::update` (email + password only).
    /// Returns `false` when the user no longer exists.
    async fn update(&self, user: &User) -> RepoResult<bool>;
}

#[derive(Clone, Debug)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<User>> {
        let row = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password, email,
                   COALESCE(roles, 'USER') AS roles, created_at
            FROM user_tb
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let row = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password, email,
                   COALESCE(roles, 'USER') AS roles, created_at
            FROM user_tb
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    async fn insert(&self, new_user: NewUser) -> RepoResult<User> {
        new_user.validate().map_err(RepoError::Invalid)?;

        let roles = new_user
            .roles
            .unwrap_or_else(|| DEFAULT_ROLE.to_string());

        let row = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO user_tb (username, password, email, roles, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, username, password, email,
                      COALESCE(roles, 'USER') AS roles, created_at
            "#,
        )
        .bind(&new_user.username)
        .bind(&new_user.password)
        .bind(&new_user.email)
        .bind(roles)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(RepoError::from_sqlx)?;

        Ok(row)
    }

    async fn update(&self, user: &User) -> RepoResult<bool> {
        validate_credentials(user)?;

        let result = sqlx::query(
            r#"
            UPDATE user_tb
            SET email = $2, password = $3
            WHERE id = $1
            "#,
        )
        .bind(user.id)
        .bind(user.email())
        .bind(user.password_for_storage())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
