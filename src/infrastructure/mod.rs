//! Infrastructure layer for the user registry.
//!
//! - `config` - Application configuration loaded from the environment
//! - `repository` - The `UserRepository` abstraction
//! - `in_memory` - The in-memory store backing the service

mod config;
mod in_memory;
mod repository;

pub use config::{AppConfig, ConfigError};
pub use in_memory::InMemoryUserRepository;
pub use repository::UserRepository;
