//! Route definitions
//!
//! JSON API under `/api`, admin pages under `/admin`, and the metered
//! static file server under `/app`.

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::handlers::{admin, auth, chirps, health, users};
use crate::middleware::count_hits;
use crate::state::AppState;

/// Create the main router with all routes except health
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api", api_routes())
        .nest("/admin", admin_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/api/healthz", get(health::healthz))
        .route("/health/ready", get(health::readiness_check))
}

/// Static files under `/app`, counted by the hit counter
pub fn file_server_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .nest_service("/app", ServeDir::new(&state.config().static_files.dir))
        .layer(from_fn_with_state(state.clone(), count_hits))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(session_routes())
        .merge(user_routes())
        .merge(chirp_routes())
}

/// Session routes
fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/refresh", post(auth::refresh))
        .route("/revoke", post(auth::revoke))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new().route("/users", post(users::create_user).put(users::update_user))
}

/// Chirp routes
fn chirp_routes() -> Router<AppState> {
    Router::new()
        .route("/chirps", post(chirps::create_chirp).get(chirps::list_chirps))
        .route(
            "/chirps/:chirp_id",
            get(chirps::get_chirp).delete(chirps::delete_chirp),
        )
}

/// Admin routes
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/metrics", get(admin::metrics))
        .route("/reset", post(admin::reset))
}
