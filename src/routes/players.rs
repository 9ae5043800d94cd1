//! Player REST routes.
//!
//! Handlers translate HTTP into service calls and service errors into JSON
//! error bodies. Bodies are taken as raw JSON so validation can report every
//! field problem instead of the first serde failure.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::error;
use uuid::Uuid;

use crate::config::ListingConfig;
use crate::model::{Player, Position};
use crate::services::player::{self, PlayerError};
use crate::state::AppState;
use crate::store::{PlayerFilters, PlayerPage, PlayerQuery, SortField, SortOrder};
use crate::validate::ValidationErrors;

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Validation(ValidationErrors),
    NoData,
    InvalidId,
    NotFound,
    Internal,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, json!({ "error": message })),
            Self::Validation(details) => {
                (StatusCode::BAD_REQUEST, json!({ "error": "Validation error", "details": details }))
            }
            Self::NoData => (StatusCode::BAD_REQUEST, json!({ "error": "No data provided" })),
            Self::InvalidId => (StatusCode::BAD_REQUEST, json!({ "error": "Invalid player ID format" })),
            Self::NotFound => (StatusCode::NOT_FOUND, json!({ "error": "Player not found" })),
            Self::Internal => (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": "Internal server error" })),
        };
        (status, Json(body)).into_response()
    }
}

impl From<PlayerError> for ApiError {
    fn from(err: PlayerError) -> Self {
        match err {
            PlayerError::NotFound(_) => Self::NotFound,
            PlayerError::Validation(details) => Self::Validation(details),
            PlayerError::InvalidQuery(message) => Self::BadRequest(message),
            PlayerError::Store(e) => {
                error!(error = %e, "player store failure");
                Self::Internal
            }
        }
    }
}

fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::InvalidId)
}

/// Unwrap a JSON body, treating unparseable, `null`, and `{}` bodies as absent.
fn require_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, ApiError> {
    let Ok(Json(value)) = body else {
        return Err(ApiError::NoData);
    };
    match &value {
        Value::Null => Err(ApiError::NoData),
        Value::Object(map) if map.is_empty() => Err(ApiError::NoData),
        _ => Ok(value),
    }
}

// =============================================================================
// LIST QUERY
// =============================================================================

/// Raw `GET /api/players` query string. Parsed by [`parse_list_params`] so bad
/// values produce a JSON 400 rather than axum's plain-text rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
    pub per_page: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub position: Option<String>,
    pub team: Option<String>,
    pub name: Option<String>,
}

pub(crate) fn parse_list_params(params: ListParams, listing: ListingConfig) -> Result<PlayerQuery, PlayerError> {
    let page = match params.page.as_deref() {
        None => 1,
        Some(raw) => raw
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|page| *page >= 1)
            .ok_or_else(|| PlayerError::InvalidQuery(format!("invalid page: {raw}")))?,
    };
    let per_page = match params.per_page.as_deref() {
        None => listing.default_per_page,
        Some(raw) => raw
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|n| (1..=listing.max_per_page).contains(n))
            .ok_or_else(|| {
                PlayerError::InvalidQuery(format!("per_page must be between 1 and {}", listing.max_per_page))
            })?,
    };
    let sort_by = match params.sort_by.as_deref() {
        None => SortField::default(),
        Some(raw) => raw.parse().map_err(PlayerError::InvalidQuery)?,
    };
    let order = match params.order.as_deref() {
        None => SortOrder::default(),
        Some(raw) => raw.to_ascii_lowercase().parse().map_err(PlayerError::InvalidQuery)?,
    };
    let position = params
        .position
        .as_deref()
        .map(|raw| raw.parse::<Position>().map_err(|e| PlayerError::InvalidQuery(e.to_string())))
        .transpose()?;

    Ok(PlayerQuery {
        page,
        per_page,
        sort_by,
        order,
        filters: PlayerFilters {
            position,
            team: non_blank(params.team),
            name: non_blank(params.name),
        },
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /api/players` — filtered, sorted, paginated listing.
pub async fn list_players(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<PlayerPage>, ApiError> {
    let Query(params) = params.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let query = parse_list_params(params, state.listing)?;
    let page = player::list_players(state.store.as_ref(), &query).await?;
    Ok(Json(page))
}

/// `POST /api/players` — create a player.
pub async fn create_player(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Player>), ApiError> {
    let body = require_body(body)?;
    let created = player::create_player(state.store.as_ref(), &body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/players/:id` — fetch one player.
pub async fn get_player(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Player>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(player::get_player(state.store.as_ref(), id).await?))
}

/// `PUT /api/players/:id` — replace a player.
pub async fn replace_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Player>, ApiError> {
    let id = parse_id(&id)?;
    let body = require_body(body)?;
    Ok(Json(player::replace_player(state.store.as_ref(), id, &body).await?))
}

/// `PATCH /api/players/:id` — update some fields of a player.
pub async fn patch_player(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Player>, ApiError> {
    let id = parse_id(&id)?;
    let body = require_body(body)?;
    Ok(Json(player::patch_player(state.store.as_ref(), id, &body).await?))
}

/// `DELETE /api/players/:id` — delete a player.
pub async fn delete_player(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    let id = parse_id(&id)?;
    player::delete_player(state.store.as_ref(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "players_test.rs"]
mod tests;
