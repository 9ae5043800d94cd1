//! In-memory player store.
//!
//! Used when `DATABASE_URL` is unset and by tests. Nothing survives a restart.

use std::cmp::Ordering;
use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use super::{PlayerPage, PlayerQuery, PlayerStore, SortField, SortOrder, StoreError};
use crate::model::Player;

#[derive(Default)]
pub struct MemoryPlayerStore {
    players: RwLock<HashMap<Uuid, Player>>,
}

impl MemoryPlayerStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Compare by the sort key only, ascending.
fn compare_key(a: &Player, b: &Player, field: SortField) -> Ordering {
    match field {
        SortField::OverallScore => a.overall_score.total_cmp(&b.overall_score),
        SortField::WeightedScore => a.weighted_score.total_cmp(&b.weighted_score),
        SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortField::Team => a.team.to_lowercase().cmp(&b.team.to_lowercase()),
        SortField::Position => a.position.as_str().cmp(b.position.as_str()),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}

pub(crate) fn sort_players(players: &mut [Player], field: SortField, order: SortOrder) {
    players.sort_by(|a, b| {
        let key = compare_key(a, b, field);
        let key = match order {
            SortOrder::Asc => key,
            SortOrder::Desc => key.reverse(),
        };
        key.then_with(|| a.id.cmp(&b.id))
    });
}

#[async_trait::async_trait]
impl PlayerStore for MemoryPlayerStore {
    async fn insert(&self, player: &Player) -> Result<(), StoreError> {
        let mut players = self.players.write().await;
        players.insert(player.id, player.clone());
        Ok(())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Player>, StoreError> {
        let players = self.players.read().await;
        Ok(players.get(&id).cloned())
    }

    async fn list(&self, query: &PlayerQuery) -> Result<PlayerPage, StoreError> {
        let mut matching = {
            let players = self.players.read().await;
            players
                .values()
                .filter(|player| query.filters.matches(player))
                .cloned()
                .collect::<Vec<_>>()
        };
        sort_players(&mut matching, query.sort_by, query.order);

        let total = matching.len() as u64;
        let offset = usize::try_from(query.offset()).unwrap_or(usize::MAX);
        let page = matching
            .into_iter()
            .skip(offset)
            .take(query.per_page as usize)
            .collect();
        Ok(PlayerPage::new(page, total, query))
    }

    async fn update(&self, player: &Player) -> Result<bool, StoreError> {
        let mut players = self.players.write().await;
        let Some(existing) = players.get_mut(&player.id) else {
            return Ok(false);
        };
        let created_at = existing.created_at;
        *existing = player.clone();
        existing.created_at = created_at;
        Ok(true)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut players = self.players.write().await;
        Ok(players.remove(&id).is_some())
    }
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;
