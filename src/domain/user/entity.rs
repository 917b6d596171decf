//! User entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque user identifier, generated at creation time
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    #[default]
    Active,
    /// Set by deactivation; there is no way back
    Inactive,
}

impl UserStatus {
    /// Token used for this status in reports
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "ativo",
            Self::Inactive => "inativo",
        }
    }
}

impl std::fmt::Display for UserStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// User record
///
/// Construct through [`User::new`] with already validated fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    age: u32,
    is_admin: bool,
    status: UserStatus,
    created_at: DateTime<Utc>,
}

impl User {
    /// Create a new active user with a freshly generated ID
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        age: u32,
        is_admin: bool,
    ) -> Self {
        Self {
            id: UserId::generate(),
            name: name.into(),
            email: email.into(),
            age,
            is_admin,
            status: UserStatus::Active,
            created_at: Utc::now(),
        }
    }

    // Getters

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }

    pub fn status(&self) -> UserStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_active(&self) -> bool {
        self.status == UserStatus::Active
    }

    /// Mark the user as inactive
    ///
    /// Admins are left untouched and `false` is returned. Deactivating an
    /// already inactive user is a no-op that still returns `true`.
    pub fn deactivate(&mut self) -> bool {
        if self.is_admin {
            return false;
        }

        self.status = UserStatus::Inactive;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let before = Utc::now();
        let user = User::new("Fulano de Tal", "fulano@teste.com", 25, false);

        assert_eq!(user.name(), "Fulano de Tal");
        assert_eq!(user.email(), "fulano@teste.com");
        assert_eq!(user.age(), 25);
        assert!(!user.is_admin());
        assert!(user.is_active());
        assert!(!user.id().as_str().is_empty());
        assert!(user.created_at() >= before);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = User::new("A", "a@a.com", 20, false);
        let b = User::new("B", "b@b.com", 20, false);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_deactivate_regular_user() {
        let mut user = User::new("Comum", "comum@teste.com", 30, false);

        assert!(user.deactivate());
        assert_eq!(user.status(), UserStatus::Inactive);

        // Second call keeps the status and still reports success
        assert!(user.deactivate());
        assert_eq!(user.status(), UserStatus::Inactive);
    }

    #[test]
    fn test_deactivate_admin_is_refused() {
        let mut user = User::new("Admin", "admin@teste.com", 40, true);

        assert!(!user.deactivate());
        assert_eq!(user.status(), UserStatus::Active);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(UserStatus::Active.label(), "ativo");
        assert_eq!(UserStatus::Inactive.to_string(), "inativo");
        assert_eq!(UserStatus::default(), UserStatus::Active);
    }

    #[test]
    fn test_user_serialization() {
        let user = User::new("Alice", "alice@email.com", 28, false);

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["id"], user.id().as_str());
        assert_eq!(json["status"], "active");
        assert_eq!(json["is_admin"], false);

        let restored: User = serde_json::from_value(json).unwrap();
        assert_eq!(restored, user);
    }
}
