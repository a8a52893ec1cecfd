use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
};

use anyhow::Context as _;

use crate::{turn_loop::TurnLoop, util};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ReplayArg {
    /// Raw harness input, exactly as it would arrive on stdin
    input_file: PathBuf,
    /// Evaluator configuration file (JSON format)
    #[clap(long)]
    config: Option<PathBuf>,
    /// Output file for the transcript (stdout if omitted)
    #[clap(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &ReplayArg) -> anyhow::Result<()> {
    let ReplayArg {
        input_file,
        config,
        output,
    } = arg;

    let config = util::read_config_file(config.as_deref())?;
    let file = File::open(input_file)
        .with_context(|| format!("Failed to open input file: {}", input_file.display()))?;

    eprintln!("Replaying {}", input_file.display());
    let mut turn_loop = TurnLoop::new(&config).recording();
    let turns = turn_loop.run(BufReader::new(file), io::sink())?;
    eprintln!("Replayed {turns} turns");

    let transcript = turn_loop
        .into_transcript()
        .context("Replay did not produce a transcript")?;
    util::save_json(&transcript, output.as_deref())
}
