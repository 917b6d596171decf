//! User repository trait

#[cfg(test)]
use mockall::automock;

use super::entity::{User, UserStatus};
use crate::domain::DomainError;

/// Repository trait for user storage
///
/// Implementations keep users in insertion order; `list` returns them
/// oldest first.
#[cfg_attr(test, automock)]
pub trait UserRepository {
    /// Get a user by their ID
    fn get(&self, id: &str) -> Result<Option<User>, DomainError>;

    /// Store a new user
    fn create(&mut self, user: User) -> Result<User, DomainError>;

    /// Replace an existing user
    fn update(&mut self, user: &User) -> Result<User, DomainError>;

    /// List users in creation order (optionally filtered by status)
    fn list(&self, status: Option<UserStatus>) -> Result<Vec<User>, DomainError>;

    /// Count users (optionally filtered by status)
    fn count(&self, status: Option<UserStatus>) -> Result<usize, DomainError>;

    /// Remove every user
    fn clear(&mut self) -> Result<(), DomainError>;
}
