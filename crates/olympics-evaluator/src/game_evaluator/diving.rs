use olympics_engine::{Action, DivingSnapshot, GameKind};

use crate::decision::{self, Decision, Rank};

use super::{EvaluateError, GameEvaluator};

/// Follows the combo sequence and claims priority whenever diving is not
/// comfortably won.
///
/// A combo is only kept by matching every letter in order, so a single turn
/// spent on another game costs more here than anywhere else.
#[derive(Debug, Clone, Copy)]
pub struct DivingEvaluator {
    priority_turns: usize,
}

impl DivingEvaluator {
    #[must_use]
    pub fn new(priority_turns: usize) -> Self {
        Self { priority_turns }
    }
}

impl GameEvaluator for DivingEvaluator {
    type Snapshot = DivingSnapshot;

    fn evaluate(&self, snapshot: &DivingSnapshot) -> Result<Decision, EvaluateError> {
        let DivingSnapshot {
            board,
            points,
            combos,
            ..
        } = snapshot;
        let game_over = board.is_game_over();
        let rank = Rank::by_highest(points[0].into(), decision::rivals(points).map(i64::from));
        let remaining_turns = decision::turns_left_on_board(board);

        let action = if game_over {
            None
        } else {
            let letter = board
                .letter(0)
                .ok_or_else(|| EvaluateError::MissingBoardLetter {
                    game: GameKind::Diving,
                    board: board.as_str().to_owned(),
                    index: 0,
                })?;
            Some(Action::from_letter(letter))
        };

        let behind = |values: &[i32; 3]| {
            decision::rivals(values)
                .iter()
                .any(|&rival| values[0] <= rival)
        };
        let forced_priority = !game_over
            && (behind(combos)
                || behind(points)
                || remaining_turns.is_some_and(|turns| turns <= self.priority_turns)
                || rank == Rank::Third);

        Ok(Decision {
            game: GameKind::Diving,
            action,
            score: points[0].into(),
            rank: Some(rank),
            remaining_turns,
            forced_priority,
        })
    }
}
