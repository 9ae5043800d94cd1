//! Player service: validation, scoring, and storage orchestration.
//!
//! DESIGN
//! ======
//! Route handlers hand raw JSON bodies to this module; everything that makes
//! a body into a stored player (validation, score computation, identity and
//! timestamps) happens here so both stores see identical records.
//!
//! PUT replaces the whole document. PATCH merges the body over the stored
//! player (one level deep into `offense` / `defense`) and then validates the
//! merged document exactly like a PUT, so partial updates can never leave a
//! player in a state a full write would reject.

use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use crate::model::{Player, PlayerDraft};
use crate::scoring;
use crate::store::{PlayerPage, PlayerQuery, PlayerStore, StoreError};
use crate::validate::{self, ValidationErrors};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    #[error("player not found: {0}")]
    NotFound(Uuid),
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),
    #[error("invalid query: {0}")]
    InvalidQuery(String),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl From<ValidationErrors> for PlayerError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

// =============================================================================
// CRUD
// =============================================================================

/// Validate and insert a new player.
///
/// # Errors
///
/// Returns `Validation` for a bad body, or `Store` if the insert fails.
pub async fn create_player(store: &dyn PlayerStore, body: &Value) -> Result<Player, PlayerError> {
    let draft = validate::validate_player(body)?;
    let now = now_ms();
    let player = build_player(Uuid::new_v4(), draft, now, now);

    store.insert(&player).await?;
    info!(player_id = %player.id, overall_score = player.overall_score, "player created");
    Ok(player)
}

/// Fetch one player.
///
/// # Errors
///
/// Returns `NotFound` if no player has this id.
pub async fn get_player(store: &dyn PlayerStore, id: Uuid) -> Result<Player, PlayerError> {
    store.get(id).await?.ok_or(PlayerError::NotFound(id))
}

/// Fetch one filtered, sorted page of players.
///
/// # Errors
///
/// Returns `Store` if the read fails.
pub async fn list_players(store: &dyn PlayerStore, query: &PlayerQuery) -> Result<PlayerPage, PlayerError> {
    Ok(store.list(query).await?)
}

/// Replace a player with a complete new body.
///
/// # Errors
///
/// Returns `NotFound` if absent, `Validation` for a bad body.
pub async fn replace_player(store: &dyn PlayerStore, id: Uuid, body: &Value) -> Result<Player, PlayerError> {
    let existing = get_player(store, id).await?;
    let draft = validate::validate_player(body)?;
    save_revision(store, &existing, draft).await
}

/// Merge a partial body over the stored player and save the result.
///
/// # Errors
///
/// Returns `NotFound` if absent, `Validation` if the merged document is invalid.
pub async fn patch_player(store: &dyn PlayerStore, id: Uuid, body: &Value) -> Result<Player, PlayerError> {
    let existing = get_player(store, id).await?;
    let mut merged = editable_document(&existing);
    merge_patch(&mut merged, body);
    let draft = validate::validate_player(&merged)?;
    save_revision(store, &existing, draft).await
}

/// Delete a player.
///
/// # Errors
///
/// Returns `NotFound` if absent.
pub async fn delete_player(store: &dyn PlayerStore, id: Uuid) -> Result<(), PlayerError> {
    if !store.delete(id).await? {
        return Err(PlayerError::NotFound(id));
    }
    info!(player_id = %id, "player deleted");
    Ok(())
}

// =============================================================================
// HELPERS
// =============================================================================

async fn save_revision(store: &dyn PlayerStore, existing: &Player, draft: PlayerDraft) -> Result<Player, PlayerError> {
    let updated_at = now_ms().max(existing.created_at);
    let player = build_player(existing.id, draft, existing.created_at, updated_at);

    // The row can vanish between the read and the write.
    if !store.update(&player).await? {
        return Err(PlayerError::NotFound(existing.id));
    }
    info!(player_id = %player.id, overall_score = player.overall_score, "player updated");
    Ok(player)
}

pub(crate) fn build_player(id: Uuid, draft: PlayerDraft, created_at: i64, updated_at: i64) -> Player {
    let overall_score = scoring::overall_score(&draft.offense, &draft.defense);
    let weighted_score = scoring::position_weighted_score(&draft.offense, &draft.defense, draft.position);
    Player {
        id,
        name: draft.name,
        team: draft.team,
        position: draft.position,
        offense: draft.offense,
        defense: draft.defense,
        overall_score,
        weighted_score,
        created_at,
        updated_at,
    }
}

/// The writable fields of a stored player as a JSON object.
fn editable_document(player: &Player) -> Value {
    serde_json::json!({
        "name": player.name,
        "team": player.team,
        "position": player.position,
        "offense": player.offense,
        "defense": player.defense,
    })
}

/// Overlay `patch` onto `base`. Object values merge one level deep (so a
/// patch can change a single stat); everything else replaces. A non-object
/// patch replaces `base` outright and fails validation downstream.
pub(crate) fn merge_patch(base: &mut Value, patch: &Value) {
    let (Some(base_map), Some(patch_map)) = (base.as_object_mut(), patch.as_object()) else {
        *base = patch.clone();
        return;
    };
    for (key, value) in patch_map {
        match (base_map.get_mut(key), value) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                for (stat, stat_value) in incoming {
                    existing.insert(stat.clone(), stat_value.clone());
                }
            }
            _ => {
                base_map.insert(key.clone(), value.clone());
            }
        }
    }
}

pub(crate) fn now_ms() -> i64 {
    let Ok(duration) = std::time::SystemTime::now().duration_since(std::time::UNIX_EPOCH) else {
        return 0;
    };
    i64::try_from(duration.as_millis()).unwrap_or(0)
}

#[cfg(test)]
#[path = "player_test.rs"]
mod tests;
