use olympics_engine::{Action, GameKind, SkatingSnapshot};

use crate::decision::{self, Decision, Rank};

use super::{EvaluateError, GameEvaluator};

/// Index of the risk-reducing letter in the risk order.
const SAFE_LETTER: usize = 0;
/// Index of the fastest letter in the risk order.
const FAST_LETTER: usize = 3;

/// Skates fast until collisions and accumulated risk make it dangerous.
#[derive(Debug, Clone, Copy)]
pub struct SkatingEvaluator {
    risk_threshold: i32,
    collision_risk: i32,
}

impl SkatingEvaluator {
    #[must_use]
    pub fn new(risk_threshold: i32, collision_risk: i32) -> Self {
        Self {
            risk_threshold,
            collision_risk,
        }
    }

    /// Risk added when a rival is on our cell of the 10-cell loop.
    fn collision_risk(&self, spaces: &[i32; 3]) -> i32 {
        let own = spaces[0].rem_euclid(10);
        if decision::rivals(spaces)
            .iter()
            .any(|rival| rival.rem_euclid(10) == own)
        {
            self.collision_risk
        } else {
            0
        }
    }
}

impl GameEvaluator for SkatingEvaluator {
    type Snapshot = SkatingSnapshot;

    fn evaluate(&self, snapshot: &SkatingSnapshot) -> Result<Decision, EvaluateError> {
        let SkatingSnapshot {
            board,
            spaces,
            risks,
            turns_left,
        } = snapshot;
        let game_over = board.is_game_over();
        let rank = Rank::by_highest(spaces[0].into(), decision::rivals(spaces).map(i64::from));

        let action = if risks[0] < 0 || game_over {
            None
        } else {
            let risk = i64::from(risks[0]) + i64::from(self.collision_risk(spaces));
            let index = if risk >= i64::from(self.risk_threshold) {
                SAFE_LETTER
            } else {
                FAST_LETTER
            };
            tracing::debug!(risk, index, "skating risk");
            let letter = board
                .letter(index)
                .ok_or_else(|| EvaluateError::MissingBoardLetter {
                    game: GameKind::Skating,
                    board: board.as_str().to_owned(),
                    index,
                })?;
            Some(Action::from_letter(letter))
        };

        Ok(Decision {
            game: GameKind::Skating,
            action,
            score: spaces[0].into(),
            rank: Some(rank),
            remaining_turns: (!game_over)
                .then(|| usize::try_from(*turns_left).ok())
                .flatten(),
            forced_priority: !game_over && rank == Rank::Third,
        })
    }
}
