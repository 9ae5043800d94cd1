//! Request body validation for player writes.
//!
//! DESIGN
//! ======
//! Bodies are validated from raw `serde_json::Value` rather than through
//! `Deserialize` so every problem is reported at once, keyed by field, with
//! stat errors nested under `offense` / `defense`. The first error per field
//! wins; fields are independent of each other.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::model::{DefenseStats, OffenseStats, PlayerDraft, Position};

pub const MSG_MISSING: &str = "Missing data for required field.";
pub const MSG_NOT_STRING: &str = "Not a valid string.";
pub const MSG_NOT_INTEGER: &str = "Not a valid integer.";
pub const MSG_STAT_RANGE: &str = "Must be greater than or equal to 0 and less than or equal to 100.";
pub const MSG_NAME_LENGTH: &str = "Length must be between 2 and 50.";
pub const MSG_TEAM_BLANK: &str = "Shorter than minimum length 1.";
pub const MSG_POSITION: &str = "Must be one of: PG, SG, SF, PF, C.";
pub const MSG_INVALID_TYPE: &str = "Invalid input type.";
pub const MSG_UNKNOWN_FIELD: &str = "Unknown field.";

/// Key used for errors that concern the body as a whole.
pub const SCHEMA_KEY: &str = "_schema";

const NAME_MIN_CHARS: usize = 2;
const NAME_MAX_CHARS: usize = 50;
const STAT_MAX: i64 = 100;

/// Fields a client may echo back from a GET response; they are ignored.
const READ_ONLY_FIELDS: [&str; 5] = ["id", "overall_score", "weighted_score", "created_at", "updated_at"];
const PLAYER_FIELDS: [&str; 5] = ["name", "team", "position", "offense", "defense"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldError {
    Message(String),
    Nested(BTreeMap<String, String>),
}

/// Field-keyed validation failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(pub BTreeMap<String, FieldError>);

impl ValidationErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn message(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_owned())
            .or_insert_with(|| FieldError::Message(message.to_owned()));
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields = self.0.keys().map(String::as_str).collect::<Vec<_>>();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Validate a player write body.
///
/// # Errors
///
/// Returns every field-level problem found in `body`.
pub fn validate_player(body: &Value) -> Result<PlayerDraft, ValidationErrors> {
    let mut errors = ValidationErrors::default();
    let Some(map) = body.as_object() else {
        errors.message(SCHEMA_KEY, MSG_INVALID_TYPE);
        return Err(errors);
    };

    for key in map.keys() {
        if !PLAYER_FIELDS.contains(&key.as_str()) && !READ_ONLY_FIELDS.contains(&key.as_str()) {
            errors.message(key, MSG_UNKNOWN_FIELD);
        }
    }

    let name = required_string(map, "name", &mut errors).and_then(|name| {
        let len = name.chars().count();
        if (NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len) {
            Some(name)
        } else {
            errors.message("name", MSG_NAME_LENGTH);
            None
        }
    });

    let team = required_string(map, "team", &mut errors).and_then(|team| {
        if team.trim().is_empty() {
            errors.message("team", MSG_TEAM_BLANK);
            None
        } else {
            Some(team)
        }
    });

    let position = required_string(map, "position", &mut errors).and_then(|position| {
        let parsed = position.parse::<Position>().ok();
        if parsed.is_none() {
            errors.message("position", MSG_POSITION);
        }
        parsed
    });

    let offense = stat_block(map, "offense", &OffenseStats::FIELDS, &mut errors).map(|[a, b, c, d, e]| {
        OffenseStats { shooting: a, ball_handling: b, passing: c, speed: d, finishing: e }
    });
    let defense = stat_block(map, "defense", &DefenseStats::FIELDS, &mut errors).map(|[a, b, c, d, e]| {
        DefenseStats { perimeter_defense: a, interior_defense: b, steal: c, block: d, rebounding: e }
    });

    match (name, team, position, offense, defense) {
        (Some(name), Some(team), Some(position), Some(offense), Some(defense)) if errors.is_empty() => {
            Ok(PlayerDraft { name: name.to_owned(), team: team.to_owned(), position, offense, defense })
        }
        _ => Err(errors),
    }
}

fn required_string<'a>(map: &'a Map<String, Value>, field: &str, errors: &mut ValidationErrors) -> Option<&'a str> {
    match map.get(field) {
        None | Some(Value::Null) => {
            errors.message(field, MSG_MISSING);
            None
        }
        Some(Value::String(s)) => Some(s.as_str()),
        Some(_) => {
            errors.message(field, MSG_NOT_STRING);
            None
        }
    }
}

/// Validate one nested stat object. Values come back in `fields` order.
fn stat_block(
    map: &Map<String, Value>,
    block: &str,
    fields: &[&'static str; 5],
    errors: &mut ValidationErrors,
) -> Option<[u8; 5]> {
    let stats = match map.get(block) {
        None | Some(Value::Null) => {
            errors.message(block, MSG_MISSING);
            return None;
        }
        Some(Value::Object(stats)) => stats,
        Some(_) => {
            errors.message(block, MSG_INVALID_TYPE);
            return None;
        }
    };

    let mut nested = BTreeMap::new();
    for key in stats.keys() {
        if !fields.contains(&key.as_str()) {
            nested.insert(key.clone(), MSG_UNKNOWN_FIELD.to_owned());
        }
    }

    let mut values = [0_u8; 5];
    for (slot, field) in values.iter_mut().zip(fields) {
        match stats.get(*field).map(parse_stat) {
            None => {
                nested.insert((*field).to_owned(), MSG_MISSING.to_owned());
            }
            Some(Ok(value)) => *slot = value,
            Some(Err(message)) => {
                nested.insert((*field).to_owned(), message.to_owned());
            }
        }
    }

    if nested.is_empty() {
        Some(values)
    } else {
        errors.0.insert(block.to_owned(), FieldError::Nested(nested));
        None
    }
}

#[allow(clippy::cast_possible_truncation)]
fn parse_stat(value: &Value) -> Result<u8, &'static str> {
    let Value::Number(number) = value else {
        return Err(if value.is_null() { MSG_MISSING } else { MSG_NOT_INTEGER });
    };
    let integer = match number.as_i64() {
        Some(integer) => integer,
        None => match number.as_f64() {
            Some(float) if float.fract() == 0.0 && float.abs() < 1e15 => float as i64,
            // Huge whole numbers (including u64 beyond i64::MAX) are integers, just out of range.
            Some(float) if float.fract() == 0.0 => return Err(MSG_STAT_RANGE),
            _ => return Err(MSG_NOT_INTEGER),
        },
    };
    if (0..=STAT_MAX).contains(&integer) {
        u8::try_from(integer).map_err(|_| MSG_STAT_RANGE)
    } else {
        Err(MSG_STAT_RANGE)
    }
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
