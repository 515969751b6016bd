//! In-memory `UserRepository` for tests.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::repos::error::{RepoError, RepoResult};
use crate::repos::user_repo::{NewUser, User, UserRepository, validate_credentials};

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id() == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username() == username).cloned())
    }

    async fn insert(&self, new_user: NewUser) -> RepoResult<User> {
        new_user.validate().map_err(RepoError::Invalid)?;

        let mut users = self.users.write().await;
        if users.iter().any(|u| u.username() == new_user.username) {
            return Err(RepoError::Conflict);
        }

        let id = users.iter().map(User::id).max().unwrap_or(0) + 1;
        let user = User::new(id, new_user, Utc::now());
        users.push(user.clone());

        Ok(user)
    }

    async fn update(&self, user: &User) -> RepoResult<bool> {
        validate_credentials(user)?;

        let mut users = self.users.write().await;
        match users.iter_mut().find(|u| u.id() == user.id()) {
            Some(stored) => {
                // Only the credential pair is persisted; the rest of `user` is ignored.
                stored.update(user.email(), user.password_for_storage());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            password: "hash".into(),
            email: format!("{username}@example.com"),
            roles: None,
        }
    }

    #[tokio::test]
    async fn insert_assigns_id_timestamp_and_default_role() {
        let repo = InMemoryUserRepository::new();
        let before = Utc::now();

        let alice = repo.insert(new_user("alice")).await.unwrap();
        let bob = repo.insert(new_user("bob")).await.unwrap();

        assert_eq!(alice.id(), 1);
        assert_eq!(bob.id(), 2);
        assert_eq!(alice.roles(), "USER");
        assert!(alice.created_at() >= before);

        let by_id = repo.find_by_id(2).await.unwrap().unwrap();
        assert_eq!(by_id.username(), "bob");
        let by_name = repo.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(by_name.id(), 1);
        assert!(repo.find_by_username("carol").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_username_is_a_conflict() {
        let repo = InMemoryUserRepository::new();
        repo.insert(new_user("alice")).await.unwrap();

        let err = repo.insert(new_user("alice")).await.unwrap_err();
        assert!(matches!(err, RepoError::Conflict));
    }

    #[tokio::test]
    async fn update_persists_only_email_and_password() {
        let repo = InMemoryUserRepository::new();
        let created = repo
            .insert(NewUser {
                roles: Some("USER,ADMIN".into()),
                ..new_user("alice")
            })
            .await
            .unwrap();

        let mut changed = created.clone();
        changed.update("new@example.com", "newHash");
        assert!(repo.update(&changed).await.unwrap());

        let stored = repo.find_by_id(created.id()).await.unwrap().unwrap();
        assert_eq!(stored.email(), "new@example.com");
        assert_eq!(stored.password_for_storage(), "newHash");
        assert_eq!(stored.username(), "alice");
        assert_eq!(stored.roles(), "USER,ADMIN");
        assert_eq!(stored.created_at(), created.created_at());
    }

    #[tokio::test]
    async fn update_of_missing_user_reports_false() {
        let repo = InMemoryUserRepository::new();
        let ghost = User::new(42, new_user("ghost"), Utc::now());
        assert!(!repo.update(&ghost).await.unwrap());
    }
}
