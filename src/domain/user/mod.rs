//! User domain
//!
//! This module provides domain types and traits for user management,
//! including the user entity, creation rules, reporting and the repository trait.

mod entity;
mod report;
mod repository;
mod validation;

pub use entity::{User, UserId, UserStatus};
pub use report::{render_report, EMPTY_REPORT, REPORT_TITLE};
pub use repository::UserRepository;
pub use validation::{validate_new_user, UserValidationError, MINIMUM_AGE};

#[cfg(test)]
pub use repository::MockUserRepository;
