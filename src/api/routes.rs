//! Route configuration.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | /api/v1/users | `list_users` |
//! | POST | /api/v1/users | `create_user` |
//! | GET | /api/v1/users/{id} | `get_user` |
//! | PUT | /api/v1/users/{id} | `update_user` |
//! | DELETE | /api/v1/users/{id} | `delete_user` |
//! | GET | /api/health | `health_check` |
//! | GET | /api/info | `info` |
//! | GET | /actuator/health | `liveness` |

use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{Level, Span};

use crate::api::handlers;
use crate::api::state::AppState;

/// Header carrying the per-request identifier.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Creates the router with every route and middleware layer.
///
/// # Example
///
/// ```
/// use user_registry::api::{AppState, create_router};
/// use user_registry::infrastructure::AppConfig;
///
/// let router = create_router(AppState::in_memory(AppConfig::default()));
/// ```
pub fn create_router(state: AppState) -> Router {
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(make_request_span)
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(create_cors_layer());

    Router::new()
        // Users
        .route(
            "/api/v1/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route(
            "/api/v1/users/{id}",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        )
        // Health and info
        .route("/api/health", get(handlers::health_check))
        .route("/api/info", get(handlers::info))
        .route("/actuator/health", get(handlers::liveness))
        .layer(middleware)
        .with_state(state)
}

fn make_request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id
    )
}

fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
