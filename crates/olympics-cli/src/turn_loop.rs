//! The turn loop spoken with the harness.
//!
//! ```text
//! AWAITING_TURN_HEADER ─▶ READING_GAME_SNAPSHOTS ─▶ AGGREGATING ─▶ EMITTING ─┐
//!        ▲    │ end of input                                                  │
//!        │    ▼                                                               │
//!        │  STREAM_EXHAUSTED                                                  │
//!        └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Exactly one action line is written and flushed per turn before the next
//! turn is read. A turn whose game lines cannot be parsed is answered with the
//! default action; the loop itself only stops at end of input or on an I/O
//! error.

use std::io::{BufRead, Write};

use anyhow::Context as _;
use olympics_engine::{ProtocolError, RawTurn, TurnReader};
use olympics_evaluator::{
    aggregator::Choice, config::EvaluatorConfig, turn_evaluator::TurnEvaluator,
};

use crate::schema::transcript::{Transcript, TurnRecord};

#[derive(Debug)]
pub struct TurnLoop {
    turn_evaluator: TurnEvaluator,
    transcript: Option<Transcript>,
}

impl TurnLoop {
    pub fn new(config: &EvaluatorConfig) -> Self {
        Self {
            turn_evaluator: TurnEvaluator::new(config),
            transcript: None,
        }
    }

    /// Keeps a [`Transcript`] of every turn played.
    #[must_use]
    pub fn recording(mut self) -> Self {
        self.transcript = Some(Transcript::new());
        self
    }

    pub fn into_transcript(self) -> Option<Transcript> {
        self.transcript
    }

    /// Plays until `reader` is exhausted and returns the number of turns answered.
    pub fn run<R, W>(&mut self, reader: R, mut writer: W) -> anyhow::Result<usize>
    where
        R: BufRead,
        W: Write,
    {
        let mut reader = TurnReader::new(reader);
        let Some(header) = reader.read_header().context("Failed to read match header")? else {
            tracing::info!("input ended before the match header");
            return Ok(0);
        };
        tracing::info!(
            player = header.player_index,
            games = header.game_count,
            "match started"
        );
        if let Some(transcript) = &mut self.transcript {
            transcript.header = Some(header);
        }

        let mut turn = 0;
        while let Some(raw) = reader.read_turn(&header).map_err(turn_read_error)? {
            turn += 1;
            let _span = tracing::info_span!("turn", turn).entered();

            let record = self.play_turn(turn, raw);
            writeln!(writer, "{}", record.choice.action).context("Failed to write action")?;
            writer.flush().context("Failed to flush action")?;

            if let Some(transcript) = &mut self.transcript {
                transcript.turns.push(record);
            }
        }

        Ok(turn)
    }

    fn play_turn(&self, turn: usize, raw: RawTurn) -> TurnRecord {
        let RawTurn {
            score_info,
            game_lines,
        } = raw;

        let (decisions, choice, error) = match self.turn_evaluator.evaluate_turn(&game_lines) {
            Ok(outcome) => (outcome.decisions.to_vec(), outcome.choice, None),
            Err(err) => {
                tracing::warn!(%err, "turn failed, playing default action");
                (vec![], Choice::DEFAULT, Some(format!("{:#}", anyhow::Error::new(err))))
            }
        };

        TurnRecord {
            turn,
            score_info,
            game_lines,
            decisions,
            choice,
            error,
        }
    }
}

fn turn_read_error(err: ProtocolError) -> anyhow::Error {
    anyhow::Error::new(err).context("Failed to read turn")
}
