//! Server Implementation
//!
//! HTTP 服务器启动和管理

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::api;
use crate::core::{Config, Result, ServerError, ServerState};
use crate::middleware::{self, logging::REQUEST_ID_HEADER};

/// Request ID generator
#[derive(Clone, Copy, Default)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

/// Build the fully configured application with middleware and state
///
/// Used by [`Server::run`] and by the integration tests.
pub fn build_app(state: ServerState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    api::build_router()
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Request logging
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        // Trace - Request tracing spans
        .layer(TraceLayer::new_for_http())
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        // Request ID - outermost, so logging sees it
        .layer(SetRequestIdLayer::new(request_id, XRequestId))
        .with_state(state)
}

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    /// Create server over an initialized state
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    /// Serve until Ctrl+C or SIGTERM
    pub async fn run(&self) -> Result<()> {
        let state = self.state.clone();

        let addr = self.config.bind_addr();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: addr.clone(),
                source,
            })?;
        let local = listener.local_addr().map_err(ServerError::Serve)?;
        tracing::info!(environment = %self.config.environment, "Store server listening on {local}");

        axum::serve(listener, build_app(state.clone()))
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(ServerError::Serve)?;

        state.db.pool.close().await;
        tracing::info!("Server stopped");
        Ok(())
    }
}

/// Graceful shutdown handler
///
/// Listens for SIGTERM and Ctrl+C signals
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, shutting down gracefully...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, shutting down gracefully...");
        },
    }
}
