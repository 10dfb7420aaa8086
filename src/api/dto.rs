//! Request and response bodies.
//!
//! All DTOs are plain serde structs; conversion to and from domain types
//! happens through `From` implementations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{User, UserDraft};

// =============================================================================
// User DTOs
// =============================================================================

/// Body of `POST /api/v1/users` and `PUT /api/v1/users/{id}`.
///
/// Any `id` supplied by the client is ignored along with other unknown
/// fields; identifiers are always assigned by the store. Missing and `null`
/// fields are stored as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl From<UserRequest> for UserDraft {
    fn from(request: UserRequest) -> Self {
        let UserRequest { name, email, phone } = request;
        Self { name, email, phone }
    }
}

/// JSON representation of a stored user. Absent fields render as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: u64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.value(),
            name: user.name,
            email: user.email,
            phone: user.phone,
        }
    }
}

// =============================================================================
// Health DTOs
// =============================================================================

/// Body of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub service: String,
    pub version: String,
}

/// Body of `GET /api/info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfoResponse {
    pub application: String,
    pub description: String,
    pub version: String,
}

/// Body of `GET /actuator/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeResponse {
    pub status: String,
}

// =============================================================================
// Error DTOs
// =============================================================================

/// Envelope for every error the service produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetailResponse,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetailResponse {
    /// Machine-readable error code.
    pub code: String,

    /// Human-readable error message.
    pub message: String,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetailResponse {
                code: code.into(),
                message: message.into(),
            },
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
