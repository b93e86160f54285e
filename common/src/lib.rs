/// Request body for the analysis service. Team names are opaque labels,
/// forwarded exactly as the user typed them.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TeamQuery {
    pub team1: String,
    pub team2: String,
}

/// One ranked player as returned by the analysis service. Which of the
/// numeric stats are present depends on the category the player was
/// ranked under.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord {
    pub name: String,
    pub team: String,
    pub batting_score: Option<f64>,
    pub bowling_score: Option<f64>,
    pub all_rounder_score: Option<f64>,
    pub average_runs: Option<f64>,
    pub average_wickets: Option<f64>,
}

/// The full analysis response. Each list is pre-ranked by the server and
/// kept in the order it arrived.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnalysisResult {
    pub batsmen: Vec<PlayerRecord>,
    pub bowlers: Vec<PlayerRecord>,
    pub allrounders: Vec<PlayerRecord>,
}

/// Selector over the numeric stats of a [`PlayerRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatField {
    BattingScore,
    BowlingScore,
    AllRounderScore,
    AverageRuns,
    AverageWickets,
}

impl StatField {
    /// The field name as it appears on the wire.
    pub fn key(&self) -> &'static str {
        match self {
            Self::BattingScore => "battingScore",
            Self::BowlingScore => "bowlingScore",
            Self::AllRounderScore => "allRounderScore",
            Self::AverageRuns => "averageRuns",
            Self::AverageWickets => "averageWickets",
        }
    }

    /// The wire name with its first letter upper-cased, used as the
    /// heading of a stat line.
    pub fn label(&self) -> &'static str {
        match self {
            Self::BattingScore => "BattingScore",
            Self::BowlingScore => "BowlingScore",
            Self::AllRounderScore => "AllRounderScore",
            Self::AverageRuns => "AverageRuns",
            Self::AverageWickets => "AverageWickets",
        }
    }

    pub fn value_of(&self, player: &PlayerRecord) -> Option<f64> {
        match self {
            Self::BattingScore => player.batting_score,
            Self::BowlingScore => player.bowling_score,
            Self::AllRounderScore => player.all_rounder_score,
            Self::AverageRuns => player.average_runs,
            Self::AverageWickets => player.average_wickets,
        }
    }
}
