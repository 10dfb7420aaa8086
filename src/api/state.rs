//! Shared application state handed to every handler.

use std::sync::Arc;

use crate::infrastructure::{AppConfig, InMemoryUserRepository, UserRepository};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,

    pub config: Arc<AppConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(users: impl UserRepository, config: AppConfig) -> Self {
        Self {
            users: Arc::new(users),
            config: Arc::new(config),
        }
    }

    /// Builds the state the binary runs with: an in-memory store, seeded
    /// when the configuration asks for it.
    #[must_use]
    pub fn in_memory(config: AppConfig) -> Self {
        let users = if config.seed_users {
            InMemoryUserRepository::seeded()
        } else {
            InMemoryUserRepository::new()
        };
        Self::new(users, config)
    }
}
