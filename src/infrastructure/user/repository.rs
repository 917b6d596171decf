//! In-memory user repository implementation

use std::collections::HashMap;

use crate::domain::user::{User, UserRepository, UserStatus};
use crate::domain::DomainError;

/// In-memory implementation of UserRepository
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: HashMap<String, User>,
    /// User IDs in insertion order
    order: Vec<String>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository with initial users, kept in the given order
    ///
    /// Fails with a conflict if two users share an ID.
    pub fn with_users(users: Vec<User>) -> Result<Self, DomainError> {
        let mut repository = Self::new();

        for user in users {
            repository.create(user)?;
        }

        Ok(repository)
    }

    fn ordered(&self) -> impl Iterator<Item = &User> {
        self.order.iter().filter_map(|id| self.users.get(id))
    }
}

fn matches_status(user: &User, status: Option<UserStatus>) -> bool {
    status.map_or(true, |s| user.status() == s)
}

impl UserRepository for InMemoryUserRepository {
    fn get(&self, id: &str) -> Result<Option<User>, DomainError> {
        Ok(self.users.get(id).cloned())
    }

    fn create(&mut self, user: User) -> Result<User, DomainError> {
        let id = user.id().as_str().to_string();

        if self.users.contains_key(&id) {
            return Err(DomainError::conflict(format!(
                "User with ID '{}' already exists",
                id
            )));
        }

        self.order.push(id.clone());
        self.users.insert(id, user.clone());

        Ok(user)
    }

    fn update(&mut self, user: &User) -> Result<User, DomainError> {
        let stored = self
            .users
            .get_mut(user.id().as_str())
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", user.id())))?;

        *stored = user.clone();

        Ok(user.clone())
    }

    fn list(&self, status: Option<UserStatus>) -> Result<Vec<User>, DomainError> {
        Ok(self
            .ordered()
            .filter(|u| matches_status(u, status))
            .cloned()
            .collect())
    }

    fn count(&self, status: Option<UserStatus>) -> Result<usize, DomainError> {
        Ok(self.ordered().filter(|u| matches_status(u, status)).count())
    }

    fn clear(&mut self) -> Result<(), DomainError> {
        self.users.clear();
        self.order.clear();
        Ok(())
    }
}
