//! Repository trait for the user store.
//!
//! Absence of a user is an ordinary outcome, so lookups return `Option`
//! and deletion returns `bool` instead of an error type.

use crate::domain::{User, UserDraft, UserId};

/// Authoritative registry of users.
///
/// Implementations must make every operation atomic with respect to the
/// others: concurrent creates receive distinct, increasing identifiers and no
/// caller ever observes a partially written user.
pub trait UserRepository: Send + Sync + 'static {
    /// Returns every stored user.
    fn list(&self) -> Vec<User>;

    /// Returns the user with the given identifier, if present.
    fn get(&self, id: UserId) -> Option<User>;

    /// Stores a new user under the next identifier and returns it.
    fn create(&self, draft: UserDraft) -> User;

    /// Replaces the mutable fields of an existing user.
    ///
    /// Returns `None` without mutating anything when the user does not exist.
    fn update(&self, id: UserId, draft: UserDraft) -> Option<User>;

    /// Removes a user, returning whether it existed.
    fn delete(&self, id: UserId) -> bool;

    /// Number of stored users.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
