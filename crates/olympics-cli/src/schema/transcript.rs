use chrono::{DateTime, Utc};
use olympics_engine::MatchHeader;
use olympics_evaluator::{aggregator::Choice, decision::Decision};
use serde::{Deserialize, Serialize};

/// Everything the agent saw and decided during a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub recorded_at: DateTime<Utc>,
    pub header: Option<MatchHeader>,
    pub turns: Vec<TurnRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based turn number.
    pub turn: usize,
    pub score_info: Vec<String>,
    pub game_lines: Vec<String>,
    /// Empty when the turn could not be parsed.
    pub decisions: Vec<Decision>,
    pub choice: Choice,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    #[must_use]
    pub fn new() -> Self {
        Self {
            recorded_at: Utc::now(),
            header: None,
            turns: vec![],
        }
    }
}
