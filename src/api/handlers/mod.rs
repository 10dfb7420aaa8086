//! HTTP handlers.
//!
//! Handlers are thin: they extract the request, call the store, and map the
//! outcome onto a status code and DTO.

pub mod health;
pub mod users;

pub use health::{health_check, info, liveness};
pub use users::{create_user, delete_user, get_user, list_users, update_user};
