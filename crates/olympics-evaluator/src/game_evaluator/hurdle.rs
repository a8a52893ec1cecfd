use olympics_engine::{Action, GameKind, HurdleSnapshot};

use crate::decision::{self, Decision, Rank};

use super::{EvaluateError, GameEvaluator};

const HURDLE: u8 = b'#';

/// Times jumps so that the hurdle is cleared without slowing down.
///
/// UP jumps two cells, LEFT moves one, DOWN two and RIGHT three, so the
/// action depends on how far away the next hurdle is.
#[derive(Debug, Clone, Copy, Default)]
pub struct HurdleEvaluator;

impl GameEvaluator for HurdleEvaluator {
    type Snapshot = HurdleSnapshot;

    fn evaluate(&self, snapshot: &HurdleSnapshot) -> Result<Decision, EvaluateError> {
        let HurdleSnapshot {
            board,
            positions,
            stuns,
            ..
        } = snapshot;
        let game_over = board.is_game_over();
        let position = positions[0];
        let rank = Rank::by_highest(position.into(), decision::rivals(positions).map(i64::from));

        let action = if game_over || stuns[0] > 0 {
            None
        } else {
            let distance = distance_to_next_hurdle(board.as_str(), position);
            tracing::debug!(?distance, "distance to next hurdle");
            Some(action_for_distance(distance))
        };

        Ok(Decision {
            game: GameKind::Hurdle,
            action,
            score: position.into(),
            rank: Some(rank),
            remaining_turns: decision::turns_left_on_board(board),
            forced_priority: !game_over && rank == Rank::Third,
        })
    }
}

/// Cells between `position` and the next hurdle at or after it.
///
/// Positions outside the track find nothing.
fn distance_to_next_hurdle(track: &str, position: i32) -> Option<usize> {
    let start = usize::try_from(position).ok()?;
    track
        .as_bytes()
        .get(start..)?
        .iter()
        .position(|&cell| cell == HURDLE)
}

fn action_for_distance(distance: Option<usize>) -> Action {
    match distance {
        Some(1) => Action::Up,
        Some(2) => Action::Left,
        Some(3) => Action::Down,
        _ => Action::Right,
    }
}
