//! Running the user registry over HTTP.
//!
//! [`Server`] owns the application state until it is served, and logs the
//! bound address, store size and endpoint table on start.

use std::future::{Future, pending};

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;

use crate::api::{AppState, create_router};
use crate::infrastructure::AppConfig;

/// Method, path and summary of every route, in startup-log order.
const ENDPOINTS: [(&str, &str, &str); 8] = [
    ("GET", "/api/v1/users", "List users"),
    ("GET", "/api/v1/users/{id}", "Get user"),
    ("POST", "/api/v1/users", "Create user"),
    ("PUT", "/api/v1/users/{id}", "Update user"),
    ("DELETE", "/api/v1/users/{id}", "Delete user"),
    ("GET", "/api/health", "Health check"),
    ("GET", "/api/info", "Application info"),
    ("GET", "/actuator/health", "Liveness probe"),
];

pub struct Server {
    address: String,
    state: AppState,
}

impl Server {
    #[must_use]
    pub fn new(config: &AppConfig, state: AppState) -> Self {
        Self {
            address: config.socket_addr(),
            state,
        }
    }

    /// The `host:port` pair [`Server::run`] binds to.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Binds the configured address and serves until Ctrl+C or SIGTERM.
    ///
    /// # Errors
    ///
    /// Returns an error if the address cannot be bound or serving fails.
    pub async fn run(self) -> anyhow::Result<()> {
        let listener = TcpListener::bind(&self.address)
            .await
            .with_context(|| format!("failed to bind {}", self.address))?;

        self.serve(listener, shutdown_signal()).await
    }

    /// Serves on an already-bound listener until `shutdown` completes.
    ///
    /// In-flight requests are drained before this returns.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener has no local address or serving fails.
    pub async fn serve<Shutdown>(
        self,
        listener: TcpListener,
        shutdown: Shutdown,
    ) -> anyhow::Result<()>
    where
        Shutdown: Future<Output = ()> + Send + 'static,
    {
        let local_address = listener.local_addr()?;
        tracing::info!(
            address = %local_address,
            users = self.state.users.len(),
            "User registry listening"
        );
        for (method, path, summary) in ENDPOINTS {
            tracing::info!("  {method:<6} {path:<20} - {summary}");
        }

        let router = create_router(self.state);
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .context("server terminated abnormally")?;

        tracing::info!("User registry stopped");
        Ok(())
    }
}

/// Resolves on the first of Ctrl+C or SIGTERM.
///
/// A handler that cannot be installed is logged and then waits forever, so
/// the other signal still stops the server.
async fn shutdown_signal() {
    let interrupt = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!(%error, "Cannot listen for Ctrl+C");
            pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::error!(%error, "Cannot listen for SIGTERM");
                pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = pending::<()>();

    let received = tokio::select! {
        () = interrupt => "SIGINT",
        () = terminate => "SIGTERM",
    };
    tracing::info!(signal = received, "Draining in-flight requests");
}
