//! # HTTP Server
//!
//! Main HTTP server combining all endpoint routers.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::config::HttpServerConfig;
use super::observability_routes::{health_routes, observability_routes};
use crate::observability::{Event, MetricsRegistry};
use crate::rest_api::{framework_routes, FrameworkService};
use crate::store::RecordStore;

/// HTTP server for the framework registry
pub struct HttpServer {
    config: HttpServerConfig,
    metrics: Arc<MetricsRegistry>,
    router: Router,
}

impl HttpServer {
    /// Create a server over `store`
    pub fn new(config: HttpServerConfig, store: Arc<dyn RecordStore>) -> Self {
        let metrics = Arc::new(MetricsRegistry::new());
        let service = Arc::new(FrameworkService::new(store, metrics.clone()));
        let router = Self::build_router(&config, service, metrics.clone());
        Self {
            config,
            metrics,
            router,
        }
    }

    /// Build the combined router with all endpoints
    fn build_router(
        config: &HttpServerConfig,
        service: Arc<FrameworkService>,
        metrics: Arc<MetricsRegistry>,
    ) -> Router {
        Router::new()
            .merge(health_routes())
            .merge(framework_routes(service))
            .nest("/observability", observability_routes(metrics))
            .layer(Self::cors_layer(config))
            .layer(TraceLayer::new_for_http())
    }

    fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
        if config.cors_origins.is_empty() {
            return CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
        }

        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|s| match s.parse() {
                Ok(origin) => Some(origin),
                Err(_) => {
                    warn!(origin = %s, "ignoring unparsable CORS origin");
                    None
                }
            })
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }

    /// Address the server binds to
    pub fn listen_addr(&self) -> String {
        self.config.listen_addr()
    }

    /// Counters updated by the framework routes and served at
    /// `/observability/metrics`
    pub fn metrics(&self) -> Arc<MetricsRegistry> {
        self.metrics.clone()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Serve until Ctrl-C or SIGTERM, then drain in-flight requests.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind(self.config.listen_addr()).await?;
        let addr = listener.local_addr()?;

        info!(event = %Event::Serving, %addr, "framework registry listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!(event = %Event::ShutdownComplete, "server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!(event = %Event::ShutdownStart, "shutdown signal received");
}
