/*
 * Responsibility
 * - Public surface of the persistence layer
 * - UserRepository (trait) and its Postgres implementation
 */
pub mod error;
#[cfg(test)]
pub mod memory;
pub mod user_repo;

pub use user_repo::{NewUser, PgUserRepository, User, UserRepository};
