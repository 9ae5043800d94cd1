//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the server-rendered welcome page at `/`, the player
//! REST API under `/api/players`, and two health endpoints. Unmatched paths
//! get a JSON 404, and a wrong method on a known path a JSON 405, so API
//! clients never see an HTML or empty error body.

pub mod players;

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{Html, IntoResponse, Json};
use axum::routing::get;
use serde_json::json;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::state::AppState;

/// Build the application router.
///
/// `cors_origins` empty means any origin is allowed.
pub fn app(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/healthz", get(healthz))
        .route("/api/health", get(health))
        .route("/api/players", get(players::list_players).post(players::create_player))
        .route(
            "/api/players/{id}",
            get(players::get_player)
                .put(players::replace_player)
                .patch(players::patch_player)
                .delete(players::delete_player),
        )
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub(crate) fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let parsed = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect::<Vec<_>>();
    layer.allow_origin(AllowOrigin::list(parsed))
}

async fn welcome(State(state): State<AppState>) -> Html<String> {
    Html(state.welcome_page.to_string())
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "message": "Basketball Player Ranking API is running"
    }))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Resource not found" })))
}

async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, Json(json!({ "error": "Method not allowed" })))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
