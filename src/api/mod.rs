//! API layer for the user registry.
//!
//! ```text
//! HTTP Request
//!     │
//!     ▼
//! ┌───────────────┐
//! │   Handlers    │ ── Extract request, call the store
//! └───────────────┘
//!     │
//!     ▼
//! ┌───────────────┐
//! │  Repository   │ ── In-memory user store
//! └───────────────┘
//!     │
//!     ▼
//! HTTP Response (DTO or ApiError)
//! ```

pub mod dto;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod state;

pub use errors::ApiError;
pub use routes::create_router;
pub use state::AppState;
