//! Typed per-game snapshots parsed from the harness' game lines.
//!
//! Every game line has the same shape: a board string followed by seven
//! integer registers. What the board and registers mean depends on the game,
//! so a [`GameLine`] is first parsed generically and then interpreted by
//! [`GameSnapshot::new`] according to its [`GameKind`].
//!
//! ```text
//! board  r1 r2 r3  r4 r5 r6  r7
//! .....#...#  3  5  2   0  1  0   0     <- hurdle: positions, stuns
//! ```
//!
//! Register order for the per-player games is "player 0, 1, 2" for the first
//! triple and again for the second triple. Archery interleaves coordinates
//! instead: `x0 y0 x1 y1 x2 y2`.

use std::{num::ParseIntError, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::GameKind;

/// Board value sent for an event that has already finished.
pub const GAME_OVER: &str = "GAME_OVER";

/// Number of integer registers following the board on every game line.
pub const REGISTER_COUNT: usize = 7;

/// Number of players in each mini-game. Index 0 is always this agent.
pub const PLAYER_COUNT: usize = 3;

/// The textual board of a mini-game (track, wind schedule, risk order or combo sequence).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board(String);

impl Board {
    #[must_use]
    pub fn new(board: impl Into<String>) -> Self {
        Self(board.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when the event has ended for this game.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.0 == GAME_OVER
    }

    /// Returns the letter at `index`, counted in characters.
    #[must_use]
    pub fn letter(&self, index: usize) -> Option<char> {
        self.0.chars().nth(index)
    }

    /// Number of characters on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSnapshotError {
    #[display("expected a board and {} registers, found {found} fields", REGISTER_COUNT)]
    FieldCount { found: usize },
    #[display("register {index} is not an integer: {value:?}")]
    InvalidRegister {
        index: usize,
        value: String,
        source: ParseIntError,
    },
}

/// A game line split into its board and raw integer registers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameLine {
    pub board: Board,
    pub registers: [i32; REGISTER_COUNT],
}

impl FromStr for GameLine {
    type Err = ParseSnapshotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = s.split_whitespace().collect::<Vec<_>>();
        let [board, rest @ ..] = fields.as_slice() else {
            return Err(ParseSnapshotError::FieldCount { found: 0 });
        };
        if rest.len() != REGISTER_COUNT {
            return Err(ParseSnapshotError::FieldCount {
                found: fields.len(),
            });
        }

        let mut registers = [0; REGISTER_COUNT];
        for (i, (register, value)) in registers.iter_mut().zip(rest).enumerate() {
            *register = value
                .parse()
                .map_err(|source| ParseSnapshotError::InvalidRegister {
                    index: i + 1,
                    value: (*value).to_owned(),
                    source,
                })?;
        }

        Ok(Self {
            board: Board::new(*board),
            registers,
        })
    }
}

/// Hurdle race: a track of `.` and `#` cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HurdleSnapshot {
    pub board: Board,
    pub positions: [i32; PLAYER_COUNT],
    /// Turns each player remains stunned after hitting a hurdle.
    pub stuns: [i32; PLAYER_COUNT],
    pub reg7: i32,
}

/// Cursor offset from the archery target center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to the target center.
    ///
    /// Computed in `i64` so that extreme register values cannot overflow.
    #[must_use]
    pub fn manhattan(self) -> i64 {
        i64::from(self.x).abs() + i64::from(self.y).abs()
    }
}

/// Archery: the board is the wind schedule, index 0 being the current wind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArcherySnapshot {
    pub board: Board,
    pub cursors: [Offset; PLAYER_COUNT],
    pub reg7: i32,
}

/// Roller skating: the board is this turn's risk order (four letters).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkatingSnapshot {
    pub board: Board,
    pub spaces: [i32; PLAYER_COUNT],
    /// Risk counters; a negative value means the player is stunned.
    pub risks: [i32; PLAYER_COUNT],
    pub turns_left: i32,
}

/// Diving: the board is the upcoming combo sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivingSnapshot {
    pub board: Board,
    pub points: [i32; PLAYER_COUNT],
    pub combos: [i32; PLAYER_COUNT],
    pub reg7: i32,
}

/// One mini-game's state for the current turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "game", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameSnapshot {
    Hurdle(HurdleSnapshot),
    Archery(ArcherySnapshot),
    Skating(SkatingSnapshot),
    Diving(DivingSnapshot),
}

impl GameSnapshot {
    /// Interprets a generic game line as the snapshot of `kind`.
    #[must_use]
    pub fn new(kind: GameKind, line: GameLine) -> Self {
        let GameLine { board, registers: r } = line;
        match kind {
            GameKind::Hurdle => Self::Hurdle(HurdleSnapshot {
                board,
                positions: [r[0], r[1], r[2]],
                stuns: [r[3], r[4], r[5]],
                reg7: r[6],
            }),
            GameKind::Archery => Self::Archery(ArcherySnapshot {
                board,
                cursors: [
                    Offset::new(r[0], r[1]),
                    Offset::new(r[2], r[3]),
                    Offset::new(r[4], r[5]),
                ],
                reg7: r[6],
            }),
            GameKind::Skating => Self::Skating(SkatingSnapshot {
                board,
                spaces: [r[0], r[1], r[2]],
                risks: [r[3], r[4], r[5]],
                turns_left: r[6],
            }),
            GameKind::Diving => Self::Diving(DivingSnapshot {
                board,
                points: [r[0], r[1], r[2]],
                combos: [r[3], r[4], r[5]],
                reg7: r[6],
            }),
        }
    }

    /// Parses a raw game line as the snapshot of `kind`.
    pub fn parse(kind: GameKind, line: &str) -> Result<Self, ParseSnapshotError> {
        Ok(Self::new(kind, line.parse()?))
    }

    #[must_use]
    pub fn kind(&self) -> GameKind {
        match self {
            Self::Hurdle(_) => GameKind::Hurdle,
            Self::Archery(_) => GameKind::Archery,
            Self::Skating(_) => GameKind::Skating,
            Self::Diving(_) => GameKind::Diving,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        match self {
            Self::Hurdle(s) => &s.board,
            Self::Archery(s) => &s.board,
            Self::Skating(s) => &s.board,
            Self::Diving(s) => &s.board,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod game_line {
        use super::*;

        #[test]
        fn test_parses_board_and_registers() {
            let line: GameLine = ".....#...#...# 3 5 2 0 1 0 -1".parse().unwrap();
            assert_eq!(line.board.as_str(), ".....#...#...#");
            assert_eq!(line.registers, [3, 5, 2, 0, 1, 0, -1]);
        }

        #[test]
        fn test_tolerates_trailing_whitespace() {
            let line: GameLine = "GAME_OVER 0 0 0 0 0 0 0\r\n".parse().unwrap();
            assert!(line.board.is_game_over());
        }

        #[test]
        fn test_rejects_wrong_field_count() {
            assert_eq!(
                "URDL 1 2 3".parse::<GameLine>(),
                Err(ParseSnapshotError::FieldCount { found: 4 })
            );
            assert_eq!(
                "".parse::<GameLine>(),
                Err(ParseSnapshotError::FieldCount { found: 0 })
            );
        }

        #[test]
        fn test_rejects_non_integer_register() {
            let err = "URDL 1 2 x 0 0 0 0".parse::<GameLine>().unwrap_err();
            assert!(matches!(
                err,
                ParseSnapshotError::InvalidRegister { index: 3, ref value, .. } if value == "x"
            ));
        }
    }

    mod game_snapshot {
        use super::*;

        #[test]
        fn test_hurdle_register_layout() {
            let snapshot = GameSnapshot::parse(GameKind::Hurdle, "..#. 1 2 3 4 5 6 7").unwrap();
            let GameSnapshot::Hurdle(hurdle) = snapshot else {
                panic!("expected hurdle snapshot");
            };
            assert_eq!(hurdle.positions, [1, 2, 3]);
            assert_eq!(hurdle.stuns, [4, 5, 6]);
            assert_eq!(hurdle.reg7, 7);
        }

        #[test]
        fn test_archery_register_layout() {
            let snapshot = GameSnapshot::parse(GameKind::Archery, "93 -5 1 2 3 4 5 0").unwrap();
            let GameSnapshot::Archery(archery) = snapshot else {
                panic!("expected archery snapshot");
            };
            assert_eq!(
                archery.cursors,
                [Offset::new(-5, 1), Offset::new(2, 3), Offset::new(4, 5)]
            );
            assert_eq!(archery.cursors[0].manhattan(), 6);
            assert_eq!(Offset::new(i32::MIN, i32::MIN).manhattan(), 1 << 32);
        }

        #[test]
        fn test_skating_register_layout() {
            let snapshot = GameSnapshot::parse(GameKind::Skating, "URDL 11 1 7 1 0 -1 9").unwrap();
            assert_eq!(snapshot.kind(), GameKind::Skating);
            let GameSnapshot::Skating(skating) = snapshot else {
                panic!("expected skating snapshot");
            };
            assert_eq!(skating.spaces, [11, 1, 7]);
            assert_eq!(skating.risks, [1, 0, -1]);
            assert_eq!(skating.turns_left, 9);
        }

        #[test]
        fn test_diving_register_layout() {
            let snapshot = GameSnapshot::parse(GameKind::Diving, "LRUD 10 12 3 2 3 0 0").unwrap();
            assert_eq!(snapshot.board().as_str(), "LRUD");
            let GameSnapshot::Diving(diving) = snapshot else {
                panic!("expected diving snapshot");
            };
            assert_eq!(diving.points, [10, 12, 3]);
            assert_eq!(diving.combos, [2, 3, 0]);
        }
    }

    #[test]
    fn test_board_letters() {
        let board = Board::new("URDL");
        assert_eq!(board.letter(0), Some('U'));
        assert_eq!(board.letter(3), Some('L'));
        assert_eq!(board.letter(4), None);
        assert_eq!(board.len(), 4);
        assert!(!board.is_game_over());
        assert!(Board::new("").is_empty());
    }
}
