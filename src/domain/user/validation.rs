//! User validation utilities

use thiserror::Error;

/// Errors that can occur while validating a new user
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Nome, email e idade são obrigatórios.")]
    MissingFields,

    #[error("O usuário deve ser maior de idade.")]
    Underage,
}

/// Minimum age, in years, for a user to be registered
pub const MINIMUM_AGE: u32 = 18;

/// Validate the fields of a new user
///
/// Rules:
/// - Name and email cannot be empty
/// - Age must be present and non-zero
/// - Age must be at least 18
///
/// Presence is checked before age, so a missing field always wins.
pub fn validate_new_user(
    name: &str,
    email: &str,
    age: Option<u32>,
) -> Result<u32, UserValidationError> {
    let age = match age {
        Some(age) if age > 0 && !name.is_empty() && !email.is_empty() => age,
        _ => return Err(UserValidationError::MissingFields),
    };

    if age < MINIMUM_AGE {
        return Err(UserValidationError::Underage);
    }

    Ok(age)
}
