use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A directional action sent to the harness once per turn.
///
/// The same action is applied to all four mini-games at once. Ordinals are
/// fixed: `UP = 0`, `LEFT = 1`, `DOWN = 2`, `RIGHT = 3`.
///
/// # Example
///
/// ```
/// use olympics_engine::Action;
///
/// assert_eq!(Action::DEFAULT, Action::Right);
/// assert_eq!(Action::from_letter('U'), Action::Up);
/// assert_eq!(Action::from_letter('?'), Action::Right);
/// assert_eq!(Action::Down.to_string(), "DOWN");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    #[display("UP")]
    Up = 0,
    #[display("LEFT")]
    Left = 1,
    #[display("DOWN")]
    Down = 2,
    #[display("RIGHT")]
    Right = 3,
}

impl Action {
    /// Number of distinct actions.
    pub const LEN: usize = 4;

    /// All actions in ordinal order.
    pub const ALL: [Self; Self::LEN] = [Self::Up, Self::Left, Self::Down, Self::Right];

    /// Action emitted when no mini-game has an opinion.
    pub const DEFAULT: Self = Self::Right;

    /// Returns the fixed ordinal (`0..4`).
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Returns the action with the given ordinal, if any.
    #[must_use]
    pub const fn from_ordinal(ordinal: usize) -> Option<Self> {
        if ordinal < Self::LEN {
            Some(Self::ALL[ordinal])
        } else {
            None
        }
    }

    /// Maps a board letter (`U`, `R`, `D`, `L`) to its action.
    ///
    /// Unrecognized letters fall back to [`Action::DEFAULT`].
    #[must_use]
    pub const fn from_letter(letter: char) -> Self {
        match letter {
            'U' => Self::Up,
            'L' => Self::Left,
            'D' => Self::Down,
            'R' => Self::Right,
            _ => Self::DEFAULT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown action: {_0:?}")]
pub struct ParseActionError(#[error(not(source))] String);

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.to_string() == s)
            .ok_or_else(|| ParseActionError(s.to_owned()))
    }
}
