//! Player domain types.
//!
//! DESIGN
//! ======
//! `Player` is the stored record and mirrors the `players` table. Scores are
//! derived fields: they are written by the service on every mutation and never
//! read back from client input. Timestamps are Unix epoch milliseconds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// POSITION
// =============================================================================

/// Court position. Serialized as the uppercase abbreviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Point guard.
    #[serde(rename = "PG")]
    PointGuard,
    /// Shooting guard.
    #[serde(rename = "SG")]
    ShootingGuard,
    /// Small forward.
    #[serde(rename = "SF")]
    SmallForward,
    /// Power forward.
    #[serde(rename = "PF")]
    PowerForward,
    /// Center.
    #[serde(rename = "C")]
    Center,
}

impl Position {
    pub const ALL: [Self; 5] =
        [Self::PointGuard, Self::ShootingGuard, Self::SmallForward, Self::PowerForward, Self::Center];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PointGuard => "PG",
            Self::ShootingGuard => "SG",
            Self::SmallForward => "SF",
            Self::PowerForward => "PF",
            Self::Center => "C",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown position: {0}")]
pub struct UnknownPosition(pub String);

impl FromStr for Position {
    type Err = UnknownPosition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|position| position.as_str() == s)
            .ok_or_else(|| UnknownPosition(s.to_owned()))
    }
}

// =============================================================================
// STATS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffenseStats {
    pub shooting: u8,
    pub ball_handling: u8,
    pub passing: u8,
    pub speed: u8,
    pub finishing: u8,
}

impl OffenseStats {
    pub const FIELDS: [&'static str; 5] = ["shooting", "ball_handling", "passing", "speed", "finishing"];

    #[must_use]
    pub fn values(&self) -> [u8; 5] {
        [self.shooting, self.ball_handling, self.passing, self.speed, self.finishing]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefenseStats {
    pub perimeter_defense: u8,
    pub interior_defense: u8,
    pub steal: u8,
    pub block: u8,
    pub rebounding: u8,
}

impl DefenseStats {
    pub const FIELDS: [&'static str; 5] = ["perimeter_defense", "interior_defense", "steal", "block", "rebounding"];

    #[must_use]
    pub fn values(&self) -> [u8; 5] {
        [self.perimeter_defense, self.interior_defense, self.steal, self.block, self.rebounding]
    }
}

// =============================================================================
// PLAYER
// =============================================================================

/// Validated player input, before scores and identity are assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerDraft {
    pub name: String,
    pub team: String,
    pub position: Position,
    pub offense: OffenseStats,
    pub defense: DefenseStats,
}

/// Stored player. Mirrors the `players` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    pub team: String,
    pub position: Position,
    pub offense: OffenseStats,
    pub defense: DefenseStats,
    pub overall_score: f64,
    pub weighted_score: f64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
