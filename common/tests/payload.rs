use common::{AnalysisResult, PlayerRecord, StatField, TeamQuery};

use pretty_assertions::assert_eq;

#[test]
fn parses_backend_payload() {
    let body = r#"{
        "batsmen": [
            {"name": "V Kohli", "team": "Royal Challengers Bangalore", "battingScore": 87.42, "bowlingScore": 0.0, "averageRuns": 512.4, "averageWickets": 0.0},
            {"name": "RG Sharma", "team": "Mumbai Indians", "battingScore": 84.1, "bowlingScore": 2.5, "averageRuns": 489.0, "averageWickets": 0.2}
        ],
        "bowlers": [
            {"name": "JJ Bumrah", "team": "Mumbai Indians", "battingScore": 4.0, "bowlingScore": 91.3, "averageRuns": 12.0, "averageWickets": 19.5}
        ],
        "allrounders": [
            {"name": "HH Pandya", "team": "Mumbai Indians", "battingScore": 61.0, "bowlingScore": 55.2, "allRounderScore": 58.0, "averageRuns": 210.0, "averageWickets": 9.0}
        ]
    }"#;

    let result: AnalysisResult = serde_json::from_str(body).unwrap();

    assert_eq!(result.batsmen.len(), 2);
    assert_eq!(result.bowlers.len(), 1);
    assert_eq!(result.allrounders.len(), 1);

    // server ordering is kept as-is
    assert_eq!(result.batsmen[0].name, "V Kohli");
    assert_eq!(result.batsmen[1].name, "RG Sharma");

    assert_eq!(result.batsmen[0].team, "Royal Challengers Bangalore");
    assert_eq!(result.batsmen[0].batting_score, Some(87.42));
    assert_eq!(result.batsmen[0].average_runs, Some(512.4));
    assert_eq!(result.batsmen[0].all_rounder_score, None);

    assert_eq!(result.allrounders[0].all_rounder_score, Some(58.0));
    assert_eq!(result.allrounders[0].average_wickets, Some(9.0));
}

#[test]
fn missing_stats_deserialize_to_none() {
    let record: PlayerRecord =
        serde_json::from_str(r#"{"name": "A", "team": "Mumbai Indians", "battingScore": 90.0}"#)
            .unwrap();

    assert_eq!(record.batting_score, Some(90.0));
    assert_eq!(record.bowling_score, None);
    assert_eq!(record.all_rounder_score, None);
    assert_eq!(record.average_runs, None);
    assert_eq!(record.average_wickets, None);
}

#[test]
fn tolerates_unknown_keys() {
    let body = r#"{
        "batsmen": [{"name": "A", "team": "X", "battingScore": 90.0, "strikeRate": 141.2}],
        "bowlers": [],
        "allrounders": []
    }"#;

    let result: AnalysisResult = serde_json::from_str(body).unwrap();

    assert_eq!(result.batsmen.len(), 1);
    assert_eq!(result.bowlers, Vec::<PlayerRecord>::new());
    assert_eq!(result.allrounders, Vec::<PlayerRecord>::new());
}

#[test]
fn team_query_body_shape() {
    let query = TeamQuery {
        team1: "Mumbai Indians".to_owned(),
        team2: "Chennai Super Kings".to_owned(),
    };

    assert_eq!(
        serde_json::to_string(&query).unwrap(),
        r#"{"team1":"Mumbai Indians","team2":"Chennai Super Kings"}"#
    );
}

#[test]
fn stat_field_lookup_and_labels() {
    let record: PlayerRecord = serde_json::from_str(
        r#"{"name": "B", "team": "X", "battingScore": 50.0, "bowlingScore": 20.0, "allRounderScore": 70.0, "averageRuns": 30.0, "averageWickets": 5.0}"#,
    )
    .unwrap();

    assert_eq!(StatField::BattingScore.value_of(&record), Some(50.0));
    assert_eq!(StatField::BowlingScore.value_of(&record), Some(20.0));
    assert_eq!(StatField::AllRounderScore.value_of(&record), Some(70.0));
    assert_eq!(StatField::AverageRuns.value_of(&record), Some(30.0));
    assert_eq!(StatField::AverageWickets.value_of(&record), Some(5.0));

    assert_eq!(StatField::BattingScore.key(), "battingScore");
    assert_eq!(StatField::BattingScore.label(), "BattingScore");
    assert_eq!(StatField::AllRounderScore.label(), "AllRounderScore");
    assert_eq!(StatField::AverageWickets.label(), "AverageWickets");
}
