//! Application builder: wires router, middleware, and state into an Axum app.

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio::sync::watch;
use tower_http::trace::TraceLayer;

use employees_core::config::{AppConfig, CorsConfig};
use employees_core::error::AppError;
use employees_core::traits::UpstreamExecutor;
use employees_service::{EmployeeMutationService, EmployeeQueryService};
use employees_upstream::{EmployeeEndpoints, RestExecutor};

use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState, cors_config: &CorsConfig) -> Router {
    build_router(state)
        .layer(build_cors_layer(cors_config))
        .layer(TraceLayer::new_for_http())
}

/// Wires both services around a single shared executor.
pub fn build_state(config: AppConfig, executor: Arc<dyn UpstreamExecutor>) -> AppState {
    let endpoints = EmployeeEndpoints::new(&config.upstream);

    let query_service = Arc::new(EmployeeQueryService::new(
        Arc::clone(&executor),
        endpoints.clone(),
    ));
    let mutation_service = Arc::new(EmployeeMutationService::new(executor, endpoints));

    AppState {
        config: Arc::new(config),
        query_service,
        mutation_service,
    }
}

/// Runs the employee proxy with the given configuration.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        base_url = %config.upstream.base_url,
        max_attempts = config.upstream.retry.max_attempts,
        delay_ms = config.upstream.retry.delay_ms,
        "Initializing upstream executor"
    );
    let executor: Arc<dyn UpstreamExecutor> = Arc::new(RestExecutor::new(&config.upstream)?);

    let addr = config.server.bind_address();
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let cors = config.server.cors.clone();

    let app = build_app(build_state(config, executor), &cors);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Employee proxy listening on {}", addr);

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
            let _ = shutdown_tx.send(true);
        })
        .into_future();
    tokio::pin!(server);

    // In-flight requests get `grace` to drain once the signal arrives.
    let drain_deadline = async {
        let _ = shutdown_rx.changed().await;
        tokio::time::sleep(grace).await;
    };

    tokio::select! {
        result = &mut server => {
            result.map_err(|e| AppError::internal(format!("Server error: {}", e)))?;
        }
        _ = drain_deadline => {
            tracing::warn!(grace_seconds = grace.as_secs(), "Graceful shutdown timed out");
        }
    }

    tracing::info!("Employee proxy shut down");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
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
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
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
}
