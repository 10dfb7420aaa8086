//! Domain layer for the user registry.

pub mod user;

pub use user::{User, UserDraft, UserId};
