//! In-memory user store.
//!
//! # Features
//!
//! - Thread-safe with `Arc<RwLock<...>>`
//! - Identifiers come from an atomic counter that is only advanced while the
//!   write guard is held, so identifier order matches insertion order
//! - Nothing is persisted across restarts

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::domain::{User, UserDraft, UserId};
use crate::infrastructure::UserRepository;

/// Identifier handed out by an empty store.
const FIRST_IDENTIFIER: UserId = UserId::new(1);

// =============================================================================
// InMemoryUserRepository
// =============================================================================

/// In-memory implementation of [`UserRepository`].
///
/// Cloning is cheap and every clone shares the same storage.
///
/// # Example
///
/// ```
/// use user_registry::domain::UserDraft;
/// use user_registry::infrastructure::{InMemoryUserRepository, UserRepository};
///
/// let repository = InMemoryUserRepository::seeded();
/// let created = repository.create(UserDraft::new("Test", "test@example.com", "1111111111"));
///
/// assert_eq!(created.id.value(), 3);
/// assert_eq!(repository.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
    next_id: Arc<AtomicU64>,
}

impl InMemoryUserRepository {
    /// Creates an empty store whose first identifier is 1.
    #[must_use]
    pub fn new() -> Self {
        Self::with_users(std::iter::empty())
    }

    /// Creates a store holding the two demonstration users.
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_users(seed_users())
    }

    /// Creates a store pre-populated with the given users.
    ///
    /// The counter starts one past the highest identifier supplied. A later
    /// user with a duplicate identifier replaces the earlier one. Seeding
    /// `u64::MAX` leaves no identifier free: every later create replaces that
    /// user.
    #[must_use]
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let users: HashMap<UserId, User> = users.into_iter().map(|user| (user.id, user)).collect();
        let next_id = users
            .keys()
            .max()
            .map_or(FIRST_IDENTIFIER, |highest| highest.next());

        Self {
            users: Arc::new(RwLock::new(users)),
            next_id: Arc::new(AtomicU64::new(next_id.value())),
        }
    }

    /// The identifier the next create will receive.
    #[must_use]
    pub fn peek_next_id(&self) -> UserId {
        UserId::new(self.next_id.load(Ordering::SeqCst))
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn list(&self) -> Vec<User> {
        let mut users: Vec<User> = self.users.read().values().cloned().collect();
        users.sort_by_key(|user| user.id);
        users
    }

    fn get(&self, id: UserId) -> Option<User> {
        self.users.read().get(&id).cloned()
    }

    fn create(&self, draft: UserDraft) -> User {
        let mut users = self.users.write();
        let id = UserId::new(self.next_id.load(Ordering::SeqCst));
        self.next_id.store(id.next().value(), Ordering::SeqCst);
        let user = User::from_draft(id, draft);
        users.insert(id, user.clone());
        user
    }

    fn update(&self, id: UserId, draft: UserDraft) -> Option<User> {
        let mut users = self.users.write();
        let stored = users.get_mut(&id)?;
        *stored = stored.with_draft(draft);
        Some(stored.clone())
    }

    fn delete(&self, id: UserId) -> bool {
        self.users.write().remove(&id).is_some()
    }

    fn len(&self) -> usize {
        self.users.read().len()
    }
}

/// The users every seeded store starts with.
fn seed_users() -> [User; 2] {
    [
        User::from_draft(
            UserId::new(1),
            UserDraft::new("John Doe", "john.doe@example.com", "1234567890"),
        ),
        User::from_draft(
            UserId::new(2),
            UserDraft::new("Jane Smith", "jane.smith@example.com", "0987654321"),
        ),
    ]
}

// =============================================================================
// Tests
// =============================================================================
