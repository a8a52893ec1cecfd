use serde::{Deserialize, Serialize};

/// One of the four mini-games played in parallel.
///
/// The harness always sends the games in the same order, so the line index
/// within a turn identifies the game (see [`GameKind::from_index`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameKind {
    #[display("HURDLE")]
    Hurdle,
    #[display("ARCHERY")]
    Archery,
    #[display("SKATING")]
    Skating,
    #[display("DIVING")]
    Diving,
}

impl GameKind {
    /// Number of mini-games with an evaluator.
    pub const LEN: usize = 4;

    /// All games in input order.
    pub const ALL: [Self; Self::LEN] = [Self::Hurdle, Self::Archery, Self::Skating, Self::Diving];

    /// Returns the game occupying the given line index of a turn.
    ///
    /// Indices past the fourth game have no evaluator and return `None`.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::LEN {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Returns the line index of this game within a turn.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}
