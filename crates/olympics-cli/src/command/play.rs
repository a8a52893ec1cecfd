use std::{io, path::PathBuf};

use crate::{turn_loop::TurnLoop, util};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Evaluator configuration file (JSON format)
    #[clap(long)]
    config: Option<PathBuf>,
    /// Save the turn transcript to this file when the input ends
    #[clap(long)]
    record: Option<PathBuf>,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg { config, record } = arg;

    let config = util::read_config_file(config.as_deref())?;
    let mut turn_loop = TurnLoop::new(&config);
    if record.is_some() {
        turn_loop = turn_loop.recording();
    }

    let turns = turn_loop.run(io::stdin().lock(), io::stdout().lock())?;
    tracing::info!(turns, "input exhausted");

    if let (Some(path), Some(transcript)) = (record, turn_loop.into_transcript()) {
        util::save_json(&transcript, Some(path.as_path()))?;
        tracing::info!(path = %path.display(), "transcript saved");
    }

    Ok(())
}
