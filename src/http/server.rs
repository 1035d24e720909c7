//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Build the services and inject them into the handler state
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout, limits, metrics)
//! - Serve on a listener until shutdown is signalled

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware, Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{AppConfig, FluxConfig};
use crate::http::request::{self, RequestIdExt};
use crate::http::{flux, info, mono};
use crate::observability::metrics;
use crate::security::headers::security_headers;
use crate::service::{ProductService, UserService};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService>,
    pub products: Arc<ProductService>,
    pub flux: FluxConfig,
    pub started_at: Instant,
}

impl AppState {
    /// Build the services described by `config`.
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            users: Arc::new(UserService::new(config.users.fetch_delay())),
            products: Arc::new(ProductService::new()),
            flux: config.flux.clone(),
            started_at: Instant::now(),
        }
    }
}

/// HTTP server for the demo API.
pub struct HttpServer {
    router: Router,
    config: AppConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let state = AppState::from_config(&config);
        Self::with_state(config, state)
    }

    /// Create a server around pre-built state.
    pub fn with_state(config: AppConfig, state: AppState) -> Self {
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    pub fn build_router(config: &AppConfig, state: AppState) -> Router {
        let mut router = Router::new()
            .nest("/api/mono", mono::routes())
            .nest("/api/flux", flux::routes())
            .merge(info::routes())
            .route_layer(middleware::from_fn(metrics::track_metrics))
            .with_state(state);

        if config.security.enable_headers {
            router = router.layer(middleware::from_fn(security_headers));
        }

        router
            .layer(GlobalConcurrencyLimitLayer::new(config.listener.max_connections))
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                Duration::from_secs(config.timeouts.request_secs),
            ))
            .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request.request_id(),
                )
            }))
            .layer(request::propagate_request_id_layer())
            .layer(request::set_request_id_layer())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            user_delay_ms = self.config.users.fetch_delay_ms,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received, draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// A clone of the fully layered router.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
