//! Turn evaluation: from the raw game lines of a turn to one action.
//!
//! ```text
//! game lines ──parse──▶ GameSnapshot ×4 ──GameEvaluators──▶ Decision ×4 ──aggregate──▶ Choice
//! ```
//!
//! Lines are matched to games by position. Lines past the fourth game have no
//! evaluator and are ignored.
//!
//! # Failure handling
//!
//! - A line that cannot be parsed fails the whole turn with a [`TurnError`];
//!   the caller is expected to play [`Choice::DEFAULT`] and carry on.
//! - An evaluator that cannot read its board only loses its own vote: the game
//!   is recorded as [`Decision::abstain`] and the other games still decide.

use arrayvec::ArrayVec;
use olympics_engine::{GameKind, GameSnapshot, ParseSnapshotError};
use serde::{Deserialize, Serialize};

use crate::{
    aggregator::{self, Choice},
    config::EvaluatorConfig,
    decision::Decision,
    game_evaluator::GameEvaluators,
};

/// Decisions of one turn, at most one per game.
pub type TurnDecisions = ArrayVec<Decision, { GameKind::LEN }>;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum TurnError {
    #[display("invalid {game} line {line:?}")]
    InvalidGameLine {
        game: GameKind,
        line: String,
        source: ParseSnapshotError,
    },
}

/// Everything decided during one turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub decisions: TurnDecisions,
    pub choice: Choice,
}

#[derive(Debug, Clone, Default)]
pub struct TurnEvaluator {
    evaluators: GameEvaluators,
}

impl TurnEvaluator {
    #[must_use]
    pub fn new(config: &EvaluatorConfig) -> Self {
        Self {
            evaluators: GameEvaluators::new(config),
        }
    }

    /// Parses the game lines of a turn into snapshots, in game order.
    pub fn parse_snapshots<S>(
        game_lines: &[S],
    ) -> Result<ArrayVec<GameSnapshot, { GameKind::LEN }>, TurnError>
    where
        S: AsRef<str>,
    {
        let mut snapshots = ArrayVec::new();
        for (index, line) in game_lines.iter().enumerate() {
            let line = line.as_ref();
            let Some(game) = GameKind::from_index(index) else {
                tracing::debug!(index, line, "ignoring game line without evaluator");
                continue;
            };
            let snapshot =
                GameSnapshot::parse(game, line).map_err(|source| TurnError::InvalidGameLine {
                    game,
                    line: line.to_owned(),
                    source,
                })?;
            snapshots.push(snapshot);
        }
        Ok(snapshots)
    }

    /// Evaluates every snapshot, turning evaluator failures into abstentions.
    #[must_use]
    pub fn evaluate_snapshots(&self, snapshots: &[GameSnapshot]) -> TurnDecisions {
        snapshots
            .iter()
            .take(GameKind::LEN)
            .map(|snapshot| {
                let decision = self.evaluators.evaluate(snapshot).unwrap_or_else(|err| {
                    tracing::warn!(%err, "evaluator failed, game abstains this turn");
                    Decision::abstain(snapshot.kind())
                });
                if tracing::enabled!(tracing::Level::DEBUG) {
                    tracing::debug!(decision = %decision_json(&decision), "game decision");
                }
                decision
            })
            .collect()
    }

    /// Runs the whole turn: parse, evaluate every game, aggregate.
    pub fn evaluate_turn<S>(&self, game_lines: &[S]) -> Result<TurnOutcome, TurnError>
    where
        S: AsRef<str>,
    {
        let snapshots = Self::parse_snapshots(game_lines)?;
        let decisions = self.evaluate_snapshots(&snapshots);
        let choice = aggregator::aggregate(&decisions);
        tracing::info!(action = %choice.action, verdict = ?choice.verdict, "turn decided");
        Ok(TurnOutcome { decisions, choice })
    }
}

/// Renders a decision as a single JSON line for the debug log.
fn decision_json(decision: &Decision) -> String {
    serde_json::to_string(decision).unwrap_or_else(|err| format!("{decision:?} ({err})"))
}
