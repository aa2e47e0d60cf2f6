use std::{io, path::PathBuf};

use anyhow::bail;
use dropfour_engine::{Avatar, Board, MatchController};

use crate::{record::RecordingConsole, ui::style::Palette};

use self::console::TerminalConsole;

mod console;
mod input;

#[derive(Debug, Clone, PartialEq, Eq, clap::Args)]
pub(crate) struct PlayArg {
    /// Number of rows on the board
    #[clap(long, default_value_t = 6, value_parser = clap::value_parser!(u8).range(4..=32))]
    rows: u8,
    /// Number of columns on the board
    #[clap(long, default_value_t = 7, value_parser = clap::value_parser!(u8).range(4..=32))]
    columns: u8,
    /// Token shown for player 1
    #[clap(long, default_value_t = '●')]
    avatar1: char,
    /// Token shown for player 2
    #[clap(long, default_value_t = '◌')]
    avatar2: char,
    /// Print plain text without colors or screen clearing
    #[clap(long)]
    no_color: bool,
    /// Do not list the open column numbers under the board
    #[clap(long)]
    hide_hints: bool,
    /// Save the game recording to a file when the session ends
    #[clap(long)]
    save_recording: bool,
    /// Directory to save recording files
    #[clap(long, default_value = "./data/recordings/")]
    record_dir: PathBuf,
    /// Maximum number of games to keep in memory (oldest are discarded)
    #[clap(long, default_value_t = 1000)]
    history_size: usize,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            rows: 6,
            columns: 7,
            avatar1: '●',
            avatar2: '◌',
            no_color: false,
            hide_hints: false,
            save_recording: false,
            record_dir: PathBuf::from("./data/recordings/"),
            history_size: 1000,
        }
    }
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        rows,
        columns,
        avatar1,
        avatar2,
        no_color,
        hide_hints,
        save_recording,
        record_dir,
        history_size,
    } = arg;

    if avatar1 == avatar2 {
        bail!("players must have different avatars, both are {avatar1:?}");
    }
    let avatars = [Avatar::new(*avatar1), Avatar::new(*avatar2)];
    let board = Board::new(usize::from(*rows), usize::from(*columns));
    let palette = (!no_color).then(|| Palette::new(avatars));

    let mut console = TerminalConsole::new(io::stdin().lock(), io::stdout(), palette, !hide_hints);
    console.show_intro(&board);

    let mut console = RecordingConsole::new(console, *history_size);
    let Ok(mut controller) = MatchController::start(board, avatars, &mut console) else {
        eprintln!("Input closed before both players joined");
        return Ok(());
    };
    let Err(_) = controller.run_session(&mut console);

    let (mut console, history) = console.into_parts(controller.players());
    console.show_final_scores(controller.players());

    if *save_recording {
        let path = history.save(record_dir)?;
        eprintln!(
            "Saved recording after {} games to {}",
            history.games_played(),
            path.display()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct Cli {
        #[clap(flatten)]
        arg: PlayArg,
    }

    #[test]
    fn test_avatar_flags() {
        let cli = Cli::try_parse_from(["dropfour", "--avatar1", "X", "--avatar2", "O"]).unwrap();
        assert_eq!(
            cli.arg,
            PlayArg {
                avatar1: 'X',
                avatar2: 'O',
                ..PlayArg::default()
            }
        );
        assert!(Cli::try_parse_from(["dropfour", "--avatar1", "XY"]).is_err());
    }

    #[test]
    fn test_run_rejects_equal_avatars() {
        let arg = PlayArg {
            avatar1: 'X',
            avatar2: 'X',
            ..PlayArg::default()
        };
        let err = run(&arg).unwrap_err();
        assert!(err.to_string().contains("different avatars"));
    }
}
