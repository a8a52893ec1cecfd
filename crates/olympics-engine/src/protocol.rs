//! Line protocol spoken with the competition harness.
//!
//! ```text
//! <player index>
//! <number of games>
//! loop {
//!     <score info>      x3
//!     <game line>       x number of games
//! }
//! ```
//!
//! [`TurnReader`] consumes the stream one turn at a time. End of stream is not
//! an error: both [`TurnReader::read_header`] and [`TurnReader::read_turn`]
//! return `Ok(None)` once the harness stops sending input.

use std::io::{self, BufRead};

use serde::{Deserialize, Serialize};

use crate::GameKind;

/// Number of score-info lines at the start of every turn.
pub const SCORE_INFO_LINES: usize = 3;

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ProtocolError {
    #[display("failed to read input")]
    Io(io::Error),
    #[display("invalid {field} line: {line:?}")]
    InvalidHeader {
        field: &'static str,
        line: String,
    },
}

/// The two lines sent once before the first turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchHeader {
    pub player_index: i32,
    pub game_count: usize,
}

/// The unparsed lines of one turn.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawTurn {
    pub score_info: Vec<String>,
    pub game_lines: Vec<String>,
}

#[derive(Debug)]
pub struct TurnReader<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R> TurnReader<R>
where
    R: BufRead,
{
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }

    /// Reads one line, replacing invalid UTF-8 with U+FFFD so that a single bad
    /// byte only affects the line it is on.
    fn next_line(&mut self) -> Result<Option<String>, ProtocolError> {
        self.buf.clear();
        let n = self
            .reader
            .read_until(b'\n', &mut self.buf)
            .map_err(ProtocolError::Io)?;
        if n == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&self.buf);
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }

    /// Reads the player index and the number of games.
    ///
    /// Returns `Ok(None)` if the stream ends before the header is complete.
    pub fn read_header(&mut self) -> Result<Option<MatchHeader>, ProtocolError> {
        let Some(player_line) = self.next_line()? else {
            return Ok(None);
        };
        let player_index =
            player_line
                .trim()
                .parse()
                .map_err(|_| ProtocolError::InvalidHeader {
                    field: "player index",
                    line: player_line.clone(),
                })?;

        let Some(count_line) = self.next_line()? else {
            return Ok(None);
        };
        let game_count = count_line
            .trim()
            .parse()
            .map_err(|_| ProtocolError::InvalidHeader {
                field: "game count",
                line: count_line.clone(),
            })?;

        Ok(Some(MatchHeader {
            player_index,
            game_count,
        }))
    }

    /// Reads the score-info lines and `header.game_count` game lines of the next turn.
    ///
    /// Returns `Ok(None)` when the stream is exhausted. A turn cut short by end
    /// of stream is dropped, since there is nothing left to answer it.
    pub fn read_turn(&mut self, header: &MatchHeader) -> Result<Option<RawTurn>, ProtocolError> {
        let Some(first) = self.next_line()? else {
            return Ok(None);
        };

        let mut turn = RawTurn {
            score_info: Vec::with_capacity(SCORE_INFO_LINES),
            // the count comes from the harness; only the known games are preallocated
            game_lines: Vec::with_capacity(header.game_count.min(GameKind::LEN)),
        };
        turn.score_info.push(first);

        while turn.score_info.len() < SCORE_INFO_LINES {
            let Some(line) = self.next_line()? else {
                tracing::warn!(
                    lines = turn.score_info.len(),
                    "input ended inside score info, dropping turn"
                );
                return Ok(None);
            };
            turn.score_info.push(line);
        }

        while turn.game_lines.len() < header.game_count {
            let Some(line) = self.next_line()? else {
                tracing::warn!(
                    lines = turn.game_lines.len(),
                    expected = header.game_count,
                    "input ended inside game lines, dropping turn"
                );
                return Ok(None);
            };
            turn.game_lines.push(line);
        }

        Ok(Some(turn))
    }
}
