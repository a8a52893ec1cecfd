//! Per-game evaluation: one recommendation per mini-game.
//!
//! Each mini-game has its own [`GameEvaluator`] that reads only that game's
//! snapshot and answers with a [`Decision`]: the action it would play if it
//! were the only game, how well we are doing, and whether its action should
//! override the other games this turn.
//!
//! | game    | action rule                                  | forced priority              |
//! |---------|----------------------------------------------|------------------------------|
//! | hurdle  | distance to next hurdle (1 UP, 2 LEFT, 3 DOWN) | last place                  |
//! | archery | steer along the axis furthest from center    | last place                   |
//! | skating | board letter 0 when risky, letter 3 otherwise | last place                  |
//! | diving  | always board letter 0                        | any combo/points deficit, endgame, last place |
//!
//! "No opinion" is an `Ok` decision whose action is `None` (finished event,
//! stunned player). An [`EvaluateError`] is reserved for boards that are too
//! short to read.

use olympics_engine::{GameKind, GameSnapshot};

use crate::{config::EvaluatorConfig, decision::Decision};

pub use self::{
    archery::ArcheryEvaluator, diving::DivingEvaluator, hurdle::HurdleEvaluator,
    skating::SkatingEvaluator,
};

mod archery;
mod diving;
mod hurdle;
mod skating;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EvaluateError {
    #[display("{game} board {board:?} has no letter at index {index}")]
    MissingBoardLetter {
        game: GameKind,
        board: String,
        index: usize,
    },
}

/// Derives a [`Decision`] from one mini-game's snapshot.
pub trait GameEvaluator: std::fmt::Debug {
    type Snapshot;

    /// Evaluates this turn's snapshot of the game.
    fn evaluate(&self, snapshot: &Self::Snapshot) -> Result<Decision, EvaluateError>;
}

/// The four evaluators, dispatched by the snapshot's game.
#[derive(Debug, Clone)]
pub struct GameEvaluators {
    hurdle: HurdleEvaluator,
    archery: ArcheryEvaluator,
    skating: SkatingEvaluator,
    diving: DivingEvaluator,
}

impl GameEvaluators {
    #[must_use]
    pub fn new(config: &EvaluatorConfig) -> Self {
        Self {
            hurdle: HurdleEvaluator,
            archery: ArcheryEvaluator,
            skating: SkatingEvaluator::new(
                config.skating_risk_threshold,
                config.skating_collision_risk,
            ),
            diving: DivingEvaluator::new(config.diving_priority_turns),
        }
    }

    /// Evaluates a snapshot with the evaluator of its game.
    pub fn evaluate(&self, snapshot: &GameSnapshot) -> Result<Decision, EvaluateError> {
        match snapshot {
            GameSnapshot::Hurdle(s) => self.hurdle.evaluate(s),
            GameSnapshot::Archery(s) => self.archery.evaluate(s),
            GameSnapshot::Skating(s) => self.skating.evaluate(s),
            GameSnapshot::Diving(s) => self.diving.evaluate(s),
        }
    }
}

impl Default for GameEvaluators {
    fn default() -> Self {
        Self::new(&EvaluatorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use olympics_engine::{Action, GameKind, GameSnapshot};

    use super::*;

    #[test]
    fn test_dispatches_by_game() {
        let evaluators = GameEvaluators::default();
        let lines = [
            (GameKind::Hurdle, "..#..... 0 0 0 0 0 0 0", Action::Left),
            (GameKind::Archery, "2 -5 1 0 0 0 0 0", Action::Right),
            (GameKind::Skating, "URDL 1 11 5 1 0 0 9", Action::Up),
            (GameKind::Diving, "LRUD 0 0 0 2 3 0 0", Action::Left),
        ];
        for (game, line, expected) in lines {
            let snapshot = GameSnapshot::parse(game, line).unwrap();
            let decision = evaluators.evaluate(&snapshot).unwrap();
            assert_eq!(decision.game, game);
            assert_eq!(decision.action, Some(expected), "{game}");
        }
    }

    #[test]
    fn test_game_over_everywhere_has_no_opinion() {
        let evaluators = GameEvaluators::default();
        for game in GameKind::ALL {
            let snapshot = GameSnapshot::parse(game, "GAME_OVER 0 0 0 0 0 0 0").unwrap();
            let decision = evaluators.evaluate(&snapshot).unwrap();
            assert_eq!(decision.action, None, "{game}");
            assert_eq!(decision.remaining_turns, None, "{game}");
            assert!(!decision.forced_priority, "{game}");
        }
    }
}
