//! User infrastructure module
//!
//! This module provides the in-memory user repository and the user service
//! built on top of it.

mod repository;
mod service;

pub use repository::InMemoryUserRepository;
pub use service::{CreateUserRequest, UserService};
