use super::*;

#[test]
fn position_parses_each_abbreviation() {
    for position in Position::ALL {
        assert_eq!(position.as_str().parse::<Position>(), Ok(position));
    }
}

#[test]
fn position_rejects_lowercase_and_unknown() {
    assert_eq!("pg".parse::<Position>(), Err(UnknownPosition("pg".into())));
    assert!("INVALID".parse::<Position>().is_err());
    assert!("".parse::<Position>().is_err());
}

#[test]
fn position_serializes_as_abbreviation() {
    let json = serde_json::to_string(&Position::SmallForward).unwrap();
    assert_eq!(json, "\"SF\"");
    let restored: Position = serde_json::from_str("\"C\"").unwrap();
    assert_eq!(restored, Position::Center);
}

#[test]
fn position_display_matches_as_str() {
    assert_eq!(Position::PowerForward.to_string(), "PF");
}

#[test]
fn stat_values_follow_field_order() {
    let offense = OffenseStats { shooting: 1, ball_handling: 2, passing: 3, speed: 4, finishing: 5 };
    assert_eq!(offense.values(), [1, 2, 3, 4, 5]);
    assert_eq!(OffenseStats::FIELDS[4], "finishing");

    let defense = DefenseStats { perimeter_defense: 6, interior_defense: 7, steal: 8, block: 9, rebounding: 10 };
    assert_eq!(defense.values(), [6, 7, 8, 9, 10]);
    assert_eq!(DefenseStats::FIELDS[0], "perimeter_defense");
}

#[test]
fn player_json_uses_snake_case_fields() {
    let player = Player {
        id: Uuid::nil(),
        name: "Stephen Curry".into(),
        team: "Warriors".into(),
        position: Position::PointGuard,
        offense: OffenseStats { shooting: 95, ball_handling: 90, passing: 90, speed: 85, finishing: 85 },
        defense: DefenseStats { perimeter_defense: 80, interior_defense: 70, steal: 85, block: 70, rebounding: 75 },
        overall_score: 81.5,
        weighted_score: 84.0,
        created_at: 1,
        updated_at: 2,
    };
    let value = serde_json::to_value(&player).unwrap();
    assert_eq!(value["position"], "PG");
    assert_eq!(value["offense"]["ball_handling"], 90);
    assert_eq!(value["defense"]["perimeter_defense"], 80);
    assert_eq!(value["overall_score"], 81.5);
    assert_eq!(value["updated_at"], 2);
}
