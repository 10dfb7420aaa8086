//! User Registry Service
//!
//! An HTTP service exposing an in-memory user registry together with
//! health and info endpoints.
//!
//! # Architecture
//!
//! - **Domain Layer**: the `User` entity and its identifier
//! - **Infrastructure Layer**: the user store and configuration
//! - **API Layer**: routes, handlers, DTOs and error responses
//!
//! # Routes
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | /api/v1/users | List users |
//! | GET | /api/v1/users/{id} | Get a user |
//! | POST | /api/v1/users | Create a user |
//! | PUT | /api/v1/users/{id} | Update a user |
//! | DELETE | /api/v1/users/{id} | Delete a user |
//! | GET | /api/health | Service health |
//! | GET | /api/info | Application info |
//! | GET | /actuator/health | Liveness probe |

pub mod api;
pub mod domain;
pub mod infrastructure;
pub mod server;
