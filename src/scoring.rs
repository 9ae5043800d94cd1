//! Player scoring.
//!
//! Two scores are derived from the ten stats:
//! - overall: mean of the offense average and the defense average
//! - weighted: mean of position-weighted offense and defense sums
//!
//! Both are rounded to two decimal places and stay within `0..=100` because
//! every weight row sums to 1.0.

use crate::model::{DefenseStats, OffenseStats, Position};

/// Per-position weights, in `OffenseStats::FIELDS` / `DefenseStats::FIELDS` order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionWeights {
    pub offense: [f64; 5],
    pub defense: [f64; 5],
}

const POINT_GUARD: PositionWeights = PositionWeights {
    offense: [0.2, 0.3, 0.3, 0.1, 0.1],
    defense: [0.4, 0.1, 0.3, 0.1, 0.1],
};

const SHOOTING_GUARD: PositionWeights = PositionWeights {
    offense: [0.4, 0.2, 0.1, 0.2, 0.1],
    defense: [0.4, 0.1, 0.3, 0.1, 0.1],
};

const SMALL_FORWARD: PositionWeights = PositionWeights {
    offense: [0.3, 0.2, 0.1, 0.2, 0.2],
    defense: [0.3, 0.2, 0.2, 0.1, 0.2],
};

const POWER_FORWARD: PositionWeights = PositionWeights {
    offense: [0.2, 0.15, 0.15, 0.2, 0.3],
    defense: [0.1, 0.3, 0.1, 0.2, 0.3],
};

const CENTER: PositionWeights = PositionWeights {
    offense: [0.2, 0.1, 0.2, 0.1, 0.4],
    defense: [0.05, 0.3, 0.05, 0.3, 0.3],
};

/// Weight table for a position.
#[must_use]
pub fn weights_for(position: Position) -> &'static PositionWeights {
    match position {
        Position::PointGuard => &POINT_GUARD,
        Position::ShootingGuard => &SHOOTING_GUARD,
        Position::SmallForward => &SMALL_FORWARD,
        Position::PowerForward => &POWER_FORWARD,
        Position::Center => &CENTER,
    }
}

/// Unweighted score: average of the offense and defense averages.
#[must_use]
pub fn overall_score(offense: &OffenseStats, defense: &DefenseStats) -> f64 {
    let offense_avg = average(&offense.values());
    let defense_avg = average(&defense.values());
    round2((offense_avg + defense_avg) / 2.0)
}

/// Score weighted by what matters for the player's position.
#[must_use]
pub fn position_weighted_score(offense: &OffenseStats, defense: &DefenseStats, position: Position) -> f64 {
    let weights = weights_for(position);
    let offense_score = weighted_sum(&offense.values(), &weights.offense);
    let defense_score = weighted_sum(&defense.values(), &weights.defense);
    round2((offense_score + defense_score) / 2.0)
}

fn average(values: &[u8; 5]) -> f64 {
    let total: u32 = values.iter().map(|&v| u32::from(v)).sum();
    f64::from(total) / 5.0
}

fn weighted_sum(values: &[u8; 5], weights: &[f64; 5]) -> f64 {
    values
        .iter()
        .zip(weights)
        .map(|(&value, weight)| f64::from(value) * weight)
        .sum()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
#[path = "scoring_test.rs"]
mod tests;
