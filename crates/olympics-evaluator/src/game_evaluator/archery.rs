use olympics_engine::{Action, ArcherySnapshot, Board, GameKind, Offset};

use crate::decision::{self, Decision, Rank};

use super::{EvaluateError, GameEvaluator};

/// Steers the cursor back toward the target center against the wind.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArcheryEvaluator;

impl GameEvaluator for ArcheryEvaluator {
    type Snapshot = ArcherySnapshot;

    fn evaluate(&self, snapshot: &ArcherySnapshot) -> Result<Decision, EvaluateError> {
        let ArcherySnapshot { board, cursors, .. } = snapshot;
        let game_over = board.is_game_over();
        let distance = cursors[0].manhattan();
        let rank = Rank::by_lowest(distance, decision::rivals(cursors).map(Offset::manhattan));

        let action = (!game_over).then(|| steer(current_wind(board), cursors[0]));

        Ok(Decision {
            game: GameKind::Archery,
            action,
            score: distance,
            rank: Some(rank),
            remaining_turns: decision::turns_left_on_board(board),
            forced_priority: !game_over && rank == Rank::Third,
        })
    }
}

/// Wind strength of the current turn, 0 when the board does not start with a digit.
fn current_wind(board: &Board) -> i64 {
    board
        .letter(0)
        .and_then(|c| c.to_digit(10))
        .map_or(0, i64::from)
}

/// Chooses a move along the axis with the larger offset; ties go to the y axis.
fn steer(wind: i64, cursor: Offset) -> Action {
    let (dx, dy) = (-i64::from(cursor.x), -i64::from(cursor.y));
    tracing::debug!(wind, dx, dy, "archery offset from center");

    if dx.abs() > dy.abs() {
        if wind - dx >= 0 {
            Action::Left
        } else {
            Action::Right
        }
    } else if wind - dy >= 0 {
        Action::Up
    } else {
        Action::Down
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(wind: &str, cursors: [(i32, i32); 3]) -> ArcherySnapshot {
        ArcherySnapshot {
            board: Board::new(wind),
            cursors: cursors.map(|(x, y)| Offset::new(x, y)),
            reg7: 0,
        }
    }

    fn evaluate(wind: &str, cursors: [(i32, i32); 3]) -> Decision {
        ArcheryEvaluator.evaluate(&snapshot(wind, cursors)).unwrap()
    }

    #[test]
    fn test_x_axis_against_strong_offset() {
        // dx = 5, dy = -1: 2 - 5 < 0
        let decision = evaluate("2345", [(-5, 1), (0, 0), (0, 0)]);
        assert_eq!(decision.action, Some(Action::Right));
    }

    #[test]
    fn test_x_axis_with_wind_covering_offset() {
        // dx = -3: 1 + 3 >= 0
        let decision = evaluate("1", [(3, 1), (0, 0), (0, 0)]);
        assert_eq!(decision.action, Some(Action::Left));
    }

    #[test]
    fn test_y_axis_branches() {
        // dy = 4: 2 - 4 < 0
        assert_eq!(
            evaluate("2", [(1, -4), (0, 0), (0, 0)]).action,
            Some(Action::Down)
        );
        // dy = -4: 2 + 4 >= 0
        assert_eq!(
            evaluate("2", [(1, 4), (0, 0), (0, 0)]).action,
            Some(Action::Up)
        );
    }

    #[test]
    fn test_tie_uses_y_axis() {
        // |dx| == |dy| == 3, dy = 3: 1 - 3 < 0
        assert_eq!(
            evaluate("1", [(-3, -3), (0, 0), (0, 0)]).action,
            Some(Action::Down)
        );
    }

    #[test]
    fn test_non_numeric_wind_counts_as_zero() {
        assert_eq!(current_wind(&Board::new("X12")), 0);
        assert_eq!(current_wind(&Board::new("")), 0);
        assert_eq!(current_wind(&Board::new("7")), 7);
        // dy = 0 with zero wind: 0 - 0 >= 0
        assert_eq!(
            evaluate("", [(0, 0), (0, 0), (0, 0)]).action,
            Some(Action::Up)
        );
    }

    #[test]
    fn test_rank_by_distance_to_center() {
        let decision = evaluate("3", [(2, 2), (1, 0), (0, 3)]);
        assert_eq!(decision.score, 4);
        assert_eq!(decision.rank, Some(Rank::Third));
        assert!(decision.forced_priority);

        let decision = evaluate("3", [(1, 1), (1, 1), (5, 5)]);
        assert_eq!(decision.rank, Some(Rank::First));
        assert!(!decision.forced_priority);

        let decision = evaluate("3", [(2, 1), (1, 1), (5, 5)]);
        assert_eq!(decision.rank, Some(Rank::Second));
    }

    #[test]
    fn test_extreme_cursor_does_not_overflow() {
        // dx = 2^31 does not fit in i32
        let decision = evaluate("3", [(i32::MIN, 0), (0, 0), (0, 0)]);
        assert_eq!(decision.score, 1 << 31);
        assert_eq!(decision.action, Some(Action::Right));
        assert_eq!(decision.rank, Some(Rank::Third));

        let decision = evaluate("9", [(1, i32::MIN), (i32::MAX, i32::MAX), (0, 0)]);
        assert_eq!(decision.action, Some(Action::Down));
        assert_eq!(decision.rank, Some(Rank::Second));
    }

    #[test]
    fn test_game_over() {
        let decision = evaluate("GAME_OVER", [(9, 9), (0, 0), (0, 0)]);
        assert_eq!(decision.action, None);
        assert!(!decision.forced_priority);
    }
}
