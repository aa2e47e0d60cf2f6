use clap::{Parser, Subcommand};

use self::play::PlayArg;

mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
enum Mode {
    /// Play Connect Four against another person at this terminal (default)
    Play(#[clap(flatten)] PlayArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run(&arg)?,
    }
    Ok(())
}
