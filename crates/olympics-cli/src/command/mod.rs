use clap::{Parser, Subcommand};

use self::{play::PlayArg, replay::ReplayArg};
use crate::logging;

mod play;
mod replay;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Log filter written to stderr (e.g. `debug`); overrides `RUST_LOG`
    #[arg(long, global = true)]
    log_level: Option<String>,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play against the harness on stdin/stdout
    Play(#[clap(flatten)] PlayArg),
    /// Run a saved input log offline and print the turn transcript
    Replay(#[clap(flatten)] ReplayArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    logging::init(args.log_level.as_deref())?;
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Replay(arg) => replay::run(&arg)?,
    }
    Ok(())
}
