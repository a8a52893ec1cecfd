use olympics_engine::{Action, Board, GameKind};
use serde::{Deserialize, Serialize};

/// Placement among the three players of a mini-game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Rank {
    First = 1,
    Second = 2,
    Third = 3,
}

impl Rank {
    /// Ranks a score where higher is better: first if at least both rivals,
    /// third if below both.
    #[must_use]
    pub fn by_highest(own: i64, rivals: [i64; 2]) -> Self {
        if rivals.iter().all(|&rival| own >= rival) {
            Self::First
        } else if rivals.iter().all(|&rival| own < rival) {
            Self::Third
        } else {
            Self::Second
        }
    }

    /// Ranks a score where lower is better: first if at most both rivals,
    /// third if above both.
    #[must_use]
    pub fn by_lowest(own: i64, rivals: [i64; 2]) -> Self {
        if rivals.iter().all(|&rival| own <= rival) {
            Self::First
        } else if rivals.iter().all(|&rival| own > rival) {
            Self::Third
        } else {
            Self::Second
        }
    }

    /// Returns the 1-based place.
    #[must_use]
    pub const fn place(self) -> u8 {
        self as u8
    }
}

impl From<Rank> for u8 {
    fn from(rank: Rank) -> Self {
        rank.place()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("rank must be 1, 2 or 3, got {_0}")]
pub struct InvalidRankError(#[error(not(source))] u8);

impl TryFrom<u8> for Rank {
    type Error = InvalidRankError;

    fn try_from(place: u8) -> Result<Self, Self::Error> {
        match place {
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            3 => Ok(Self::Third),
            _ => Err(InvalidRankError(place)),
        }
    }
}

/// One mini-game's verdict for the current turn.
///
/// Decisions are created fresh every turn by a
/// [`GameEvaluator`](crate::game_evaluator::GameEvaluator) and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub game: GameKind,
    /// Recommended action, `None` when the game has no opinion this turn.
    pub action: Option<Action>,
    /// Raw game score. Higher is better except for archery (distance to center).
    pub score: i64,
    pub rank: Option<Rank>,
    pub remaining_turns: Option<usize>,
    /// This game's action overrides the majority vote.
    pub forced_priority: bool,
}

impl Decision {
    /// A decision carrying no information, used when a game could not be evaluated.
    #[must_use]
    pub fn abstain(game: GameKind) -> Self {
        Self {
            game,
            action: None,
            score: 0,
            rank: None,
            remaining_turns: None,
            forced_priority: false,
        }
    }
}

/// Remaining turns estimated from the board length, `None` once the game is over.
pub(crate) fn turns_left_on_board(board: &Board) -> Option<usize> {
    (!board.is_game_over()).then(|| board.len())
}

/// Splits per-player values into the rivals' values (players 1 and 2).
pub(crate) fn rivals<T>(values: &[T; 3]) -> [T; 2]
where
    T: Copy,
{
    [values[1], values[2]]
}
