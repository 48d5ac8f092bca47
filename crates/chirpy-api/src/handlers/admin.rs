//! Admin handlers
//!
//! File server metrics and the development reset.

use axum::{extract::State, response::Html};
use chirpy_service::UserService;
use tracing::info;

use crate::response::ApiResult;
use crate::state::AppState;

/// Render the hit counter
///
/// GET /admin/metrics
pub async fn metrics(State(state): State<AppState>) -> Html<String> {
    Html(format!(
        "<html>\n  <body>\n    <h1>Welcome, Chirpy Admin</h1>\n    <p>Chirpy has been visited {} times!</p>\n  </body>\n</html>\n",
        state.hits().get()
    ))
}

/// Zero the hit counter and delete every user
///
/// POST /admin/reset
///
/// Refused with 403 unless the platform is `dev`; nothing is changed then.
pub async fn reset(State(state): State<AppState>) -> ApiResult<&'static str> {
    let removed = UserService::new(state.service_context()).reset().await?;
    state.hits().reset();

    info!(removed, "Application state reset");
    Ok("Hits reset to 0 and all users deleted")
}
