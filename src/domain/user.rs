//! The `User` entity.
//!
//! A user is a plain record owned by the store. Its identifier is assigned
//! by the store on creation and never changes afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// UserId
// =============================================================================

/// Server-assigned user identifier.
///
/// Identifiers are positive integers handed out in increasing order and are
/// never reused, even after the user they belonged to has been deleted.
/// Paths carry signed numbers; see [`UserId::from_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the identifier that follows this one, saturating at
    /// `u64::MAX`.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Interprets a signed path segment. Negative numbers name no user.
    #[must_use]
    pub fn from_path(raw: i64) -> Option<Self> {
        u64::try_from(raw).ok().map(Self)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<UserId> for u64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

// =============================================================================
// UserDraft
// =============================================================================

/// The mutable fields of a user.
///
/// Used as input to both create and update. No format validation is applied
/// to any field, and any of them may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl UserDraft {
    /// A draft with every field present.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            phone: Some(phone.into()),
        }
    }
}

// =============================================================================
// User
// =============================================================================

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl User {
    /// Binds a draft to an identifier.
    #[must_use]
    pub fn from_draft(id: UserId, draft: UserDraft) -> Self {
        let UserDraft { name, email, phone } = draft;
        Self {
            id,
            name,
            email,
            phone,
        }
    }

    /// Returns a copy with every mutable field replaced by the draft and the
    /// identifier left untouched.
    #[must_use]
    pub fn with_draft(&self, draft: UserDraft) -> Self {
        Self::from_draft(self.id, draft)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    mod user_id {
        use super::*;

        #[rstest]
        #[case(1, 2)]
        #[case(41, 42)]
        fn next_increments(#[case] value: u64, #[case] expected: u64) {
            assert_eq!(UserId::new(value).next(), UserId::new(expected));
        }

        #[rstest]
        fn next_saturates_at_maximum() {
            assert_eq!(UserId::new(u64::MAX).next(), UserId::new(u64::MAX));
        }

        #[rstest]
        #[case(0, Some(0))]
        #[case(42, Some(42))]
        #[case(-1, None)]
        #[case(i64::MIN, None)]
        fn from_path_rejects_negatives(#[case] raw: i64, #[case] expected: Option<u64>) {
            assert_eq!(UserId::from_path(raw), expected.map(UserId::new));
        }

        #[rstest]
        fn display_shows_raw_number() {
            assert_eq!(UserId::new(7).to_string(), "7");
        }

        #[rstest]
        fn ordering_follows_value() {
            assert!(UserId::new(1) < UserId::new(2));
        }

        #[rstest]
        fn serializes_as_plain_number() {
            let json = serde_json::to_string(&UserId::new(3)).unwrap();
            assert_eq!(json, "3");

            let parsed: UserId = serde_json::from_str("12").unwrap();
            assert_eq!(parsed, UserId::new(12));
        }
    }

    mod user {
        use super::*;

        #[rstest]
        fn from_draft_binds_identifier() {
            let draft = UserDraft::new("John Doe", "john.doe@example.com", "1234567890");
            let user = User::from_draft(UserId::new(1), draft);

            assert_eq!(user.id, UserId::new(1));
            assert_eq!(user.name.as_deref(), Some("John Doe"));
            assert_eq!(user.email.as_deref(), Some("john.doe@example.com"));
            assert_eq!(user.phone.as_deref(), Some("1234567890"));
        }

        #[rstest]
        fn with_draft_preserves_identifier() {
            let user = User::from_draft(
                UserId::new(5),
                UserDraft::new("Old", "old@example.com", "000"),
            );

            let updated = user.with_draft(UserDraft::new("New", "new@example.com", "111"));

            assert_eq!(updated.id, UserId::new(5));
            assert_eq!(updated.name.as_deref(), Some("New"));
            assert_eq!(updated.email.as_deref(), Some("new@example.com"));
            assert_eq!(updated.phone.as_deref(), Some("111"));
        }

        #[rstest]
        fn with_draft_clears_absent_fields() {
            let user = User::from_draft(
                UserId::new(5),
                UserDraft::new("Old", "old@example.com", "000"),
            );

            let updated = user.with_draft(UserDraft {
                name: Some("New".to_string()),
                ..UserDraft::default()
            });

            assert_eq!(updated.name.as_deref(), Some("New"));
            assert_eq!(updated.email, None);
            assert_eq!(updated.phone, None);
        }

        #[rstest]
        fn draft_accepts_unvalidated_input() {
            let draft = UserDraft::new("", "not-an-email", "phone?");
            assert_eq!(draft.email.as_deref(), Some("not-an-email"));
        }
    }
}
