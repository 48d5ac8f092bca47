//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use chirpy_common::{AppConfig, AppError, JwtService};
use chirpy_db::{create_pool, run_migrations, DatabaseConfig, MemoryStore};
use chirpy_service::{ServiceContext, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, file_server_routes, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router()
        .merge(health_routes())
        .merge(file_server_routes(&state));

    let config = state.config();
    let router = apply_middleware(router, &config.cors, config.app.env.is_production());

    router.with_state(state)
}

fn service_builder(config: &AppConfig) -> Result<ServiceContextBuilder, AppError> {
    let jwt_service = JwtService::new(&config.jwt.secret, config.jwt.access_token_ttl())
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(ServiceContext::builder()
        .jwt_service(Arc::new(jwt_service))
        .refresh_token_ttl(config.jwt.refresh_token_ttl())
        .platform(config.app.platform))
}

/// Connect to PostgreSQL, apply migrations and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&DatabaseConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Persistence(e.to_string()))?;
    info!("PostgreSQL connection established");

    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Persistence(e.to_string()))?;

    let service_context = service_builder(&config)?
        .postgres(pool)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Create AppState backed by an in-memory store
pub fn create_memory_app_state(
    config: AppConfig,
    store: Arc<MemoryStore>,
) -> Result<AppState, AppError> {
    let service_context = service_builder(&config)?
        .memory(store)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Serve `app` on an already bound listener until Ctrl-C
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), AppError> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    serve(listener, app).await
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, &addr).await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
