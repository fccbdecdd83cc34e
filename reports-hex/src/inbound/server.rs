//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use reports_types::{SeedSource, TransactionStore};

use super::handlers::{self, AppState};
use crate::{ApiDoc, ReportService};

/// HTTP Server for the Reports API.
pub struct HttpServer<S: TransactionStore, F: SeedSource> {
    state: Arc<AppState<S, F>>,
}

impl<S: TransactionStore, F: SeedSource> HttpServer<S, F> {
    /// Creates a new HTTP server with the given service.
    pub fn new(service: ReportService<S, F>) -> Self {
        Self {
            state: Arc::new(AppState { service }),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route("/initialize", get(handlers::initialize::<S, F>))
            .route("/transactions", get(handlers::list_transactions::<S, F>))
            .route("/statistics/{month}", get(handlers::statistics::<S, F>))
            .route("/bar-chart/{month}", get(handlers::bar_chart::<S, F>))
            .route("/pie-chart/{month}", get(handlers::pie_chart::<S, F>))
            .route("/combined/{month}", get(handlers::combined::<S, F>))
            .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
            // The charts SPA is served from another origin.
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
