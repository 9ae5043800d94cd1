//! Player persistence.
//!
//! ARCHITECTURE
//! ============
//! `PlayerStore` is the seam between the service layer and storage. The
//! production implementation is `PgPlayerStore`; `MemoryPlayerStore` backs
//! database-less runs and the test suite. Both must agree on filtering,
//! ordering, and paging so a page looks the same whichever store served it.

pub mod memory;
pub mod postgres;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use uuid::Uuid;

use crate::model::{Player, Position};

pub use memory::MemoryPlayerStore;
pub use postgres::PgPlayerStore;

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("corrupt player row: {0}")]
    Corrupt(String),
}

// =============================================================================
// QUERY
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    OverallScore,
    WeightedScore,
    Name,
    Team,
    Position,
    CreatedAt,
}

impl SortField {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OverallScore => "overall_score",
            Self::WeightedScore => "weighted_score",
            Self::Name => "name",
            Self::Team => "team",
            Self::Position => "position",
            Self::CreatedAt => "created_at",
        }
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overall_score" => Ok(Self::OverallScore),
            "weighted_score" => Ok(Self::WeightedScore),
            "name" => Ok(Self::Name),
            "team" => Ok(Self::Team),
            "position" => Ok(Self::Position),
            "created_at" => Ok(Self::CreatedAt),
            other => Err(format!("invalid sort_by: {other}")),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(format!("invalid order: {other}")),
        }
    }
}

/// Row filters. All present filters must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerFilters {
    /// Exact position match.
    pub position: Option<Position>,
    /// Case-insensitive exact team match.
    pub team: Option<String>,
    /// Case-insensitive substring match on name.
    pub name: Option<String>,
}

impl PlayerFilters {
    #[must_use]
    pub fn matches(&self, player: &Player) -> bool {
        if let Some(position) = self.position
            && player.position != position
        {
            return false;
        }
        if let Some(team) = self.team.as_deref()
            && player.team.to_lowercase() != team.to_lowercase()
        {
            return false;
        }
        if let Some(name) = self.name.as_deref()
            && !player.name.to_lowercase().contains(&name.to_lowercase())
        {
            return false;
        }
        true
    }
}

/// One page request. `page` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerQuery {
    pub page: u32,
    pub per_page: u32,
    pub sort_by: SortField,
    pub order: SortOrder,
    pub filters: PlayerFilters,
}

impl PlayerQuery {
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.per_page)
    }
}

impl Default for PlayerQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 20,
            sort_by: SortField::default(),
            order: SortOrder::default(),
            filters: PlayerFilters::default(),
        }
    }
}

/// One page of players plus totals for the whole filtered set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerPage {
    pub players: Vec<Player>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub pages: u64,
}

impl PlayerPage {
    #[must_use]
    pub fn new(players: Vec<Player>, total: u64, query: &PlayerQuery) -> Self {
        let per_page = u64::from(query.per_page.max(1));
        Self { players, total, page: query.page, per_page: query.per_page, pages: total.div_ceil(per_page) }
    }
}

// =============================================================================
// STORE
// =============================================================================

#[async_trait::async_trait]
pub trait PlayerStore: Send + Sync {
    /// Insert a new player.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the write fails.
    async fn insert(&self, player: &Player) -> Result<(), StoreError>;

    /// Fetch one player by id.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the read fails or the row cannot be decoded.
    async fn get(&self, id: Uuid) -> Result<Option<Player>, StoreError>;

    /// Fetch one filtered, sorted page.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the read fails or a row cannot be decoded.
    async fn list(&self, query: &PlayerQuery) -> Result<PlayerPage, StoreError>;

    /// Replace every mutable column of an existing player. Returns `false`
    /// when no player has that id.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the write fails.
    async fn update(&self, player: &Player) -> Result<bool, StoreError>;

    /// Delete a player. Returns `false` when no player has that id.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the delete fails.
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
