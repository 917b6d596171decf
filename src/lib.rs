//! User Registry
//!
//! A small in-memory user store with:
//! - Creation-time validation (required fields, minimum age)
//! - Lookup by generated ID
//! - Deactivation that protects admin users
//! - A plain-text user report

pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::user::{User, UserId, UserStatus, UserValidationError};
pub use domain::DomainError;
pub use infrastructure::user::{CreateUserRequest, InMemoryUserRepository, UserService};
