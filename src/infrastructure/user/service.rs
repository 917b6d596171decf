//! User service for user registration and management

use tracing::{debug, info, warn};

use crate::domain::user::{render_report, validate_new_user, User, UserRepository, UserStatus};
use crate::domain::DomainError;

use super::repository::InMemoryUserRepository;

/// Request for creating a new user
#[derive(Debug, Clone, Default)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    /// `None` and `Some(0)` are both treated as missing
    pub age: Option<u32>,
    pub is_admin: bool,
}

impl CreateUserRequest {
    /// Build a request for a regular (non-admin) user
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age: Some(age),
            is_admin: false,
        }
    }

    /// Mark the user to be created as an admin
    pub fn admin(mut self) -> Self {
        self.is_admin = true;
        self
    }
}

/// User service owning the user store
#[derive(Debug)]
pub struct UserService<R: UserRepository = InMemoryUserRepository> {
    repository: R,
}

impl UserService<InMemoryUserRepository> {
    /// Create a service backed by an empty in-memory store
    pub fn new() -> Self {
        Self::with_repository(InMemoryUserRepository::new())
    }
}

impl Default for UserService<InMemoryUserRepository> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: UserRepository> UserService<R> {
    /// Create a user service on top of an existing repository
    pub fn with_repository(repository: R) -> Self {
        Self { repository }
    }

    /// Create a new user
    pub fn create_user(&mut self, request: CreateUserRequest) -> Result<User, DomainError> {
        let age = validate_new_user(&request.name, &request.email, request.age)?;

        let user = User::new(request.name, request.email, age, request.is_admin);
        info!(id = %user.id(), name = %user.name(), is_admin = user.is_admin(), "Creating user");

        self.repository.create(user)
    }

    /// Shorthand for [`UserService::create_user`]
    pub fn create(
        &mut self,
        name: &str,
        email: &str,
        age: u32,
        is_admin: bool,
    ) -> Result<User, DomainError> {
        self.create_user(CreateUserRequest {
            name: name.to_string(),
            email: email.to_string(),
            age: Some(age),
            is_admin,
        })
    }

    /// Get a user by ID; unknown IDs yield `None`
    pub fn get_user_by_id(&self, id: &str) -> Result<Option<User>, DomainError> {
        let user = self.repository.get(id)?;

        if user.is_none() {
            debug!(id = %id, "User not found");
        }

        Ok(user)
    }

    /// Deactivate a user
    ///
    /// Returns `false` without changing anything when the user does not exist
    /// or is an admin.
    pub fn deactivate_user(&mut self, id: &str) -> Result<bool, DomainError> {
        let Some(mut user) = self.repository.get(id)? else {
            debug!(id = %id, "Cannot deactivate unknown user");
            return Ok(false);
        };

        if !user.is_active() {
            debug!(id = %id, "User already inactive");
            return Ok(true);
        }

        if !user.deactivate() {
            warn!(id = %id, "Refusing to deactivate admin user");
            return Ok(false);
        }

        info!(id = %id, "Deactivating user");
        self.repository.update(&user)?;

        Ok(true)
    }

    /// List all users in creation order
    pub fn list_users(&self) -> Result<Vec<User>, DomainError> {
        self.repository.list(None)
    }

    /// Count users (optionally filtered by status)
    pub fn count_users(&self, status: Option<UserStatus>) -> Result<usize, DomainError> {
        self.repository.count(status)
    }

    /// Render the user report
    pub fn generate_user_report(&self) -> Result<String, DomainError> {
        let users = self.repository.list(None)?;
        debug!(users = users.len(), "Generating user report");

        Ok(render_report(&users))
    }

    /// Remove every user from the store
    pub fn clear(&mut self) -> Result<(), DomainError> {
        debug!("Clearing user store");
        self.repository.clear()
    }
}
