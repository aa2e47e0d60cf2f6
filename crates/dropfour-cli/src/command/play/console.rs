use std::{
    fmt,
    io::{self, BufRead, Write},
};

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use dropfour_engine::{Avatar, Board, Console, InputClosed, Outcome, Player, PlayerId};

use crate::{
    command::play::input,
    ui::{BoardDisplay, ScoreboardDisplay, style::Palette},
};

/// Line-based [`Console`] over a reader and a writer.
///
/// With a palette, avatars are colored and the screen is cleared before
/// each turn. Without one, output is plain text suitable for pipes.
#[derive(Debug)]
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
    palette: Option<Palette>,
    show_hints: bool,
}

impl<R, W> TerminalConsole<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W, palette: Option<Palette>, show_hints: bool) -> Self {
        Self {
            input,
            output,
            palette,
            show_hints,
        }
    }

    pub fn show_intro(&mut self, board: &Board) {
        self.clear_screen();
        self.say(format_args!(
            "C O N N E C T   F O U R\n\n\
             Take turns dropping pieces into a {rows}x{columns} grid.\n\
             The first to line up four in a row, column or diagonal wins.\n",
            rows = board.rows(),
            columns = board.columns(),
        ));
    }

    pub fn show_final_scores(&mut self, players: &[Player; 2]) {
        let palette = self.palette;
        let scoreboard = ScoreboardDisplay::new(players).palette(palette.as_ref());
        self.say(format_args!("\nThanks for playing!\n\n{scoreboard}"));
    }

    #[cfg(test)]
    fn output(&self) -> &W {
        &self.output
    }

    fn read_line(&mut self) -> Result<String, InputClosed> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Err(InputClosed),
            Ok(_) => Ok(line),
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                Err(InputClosed)
            }
        }
    }

    fn say(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.output, "{args}").and_then(|()| self.output.flush()) {
            eprintln!("Failed to write output: {e}");
        }
    }

    fn clear_screen(&mut self) {
        if self.palette.is_none() {
            return;
        }
        let result: io::Result<()> = queue!(self.output, Clear(ClearType::All), MoveTo(0, 0));
        if let Err(e) = result {
            eprintln!("Failed to clear terminal: {e}");
        }
    }
}

impl<R, W> Console for TerminalConsole<R, W>
where
    R: BufRead,
    W: Write,
{
    fn request_name(&mut self, id: PlayerId, avatar: Avatar) -> Result<String, InputClosed> {
        self.say(format_args!("\nPlayer {id} ({avatar}):"));
        loop {
            self.say(format_args!("Enter a user name"));
            if let Some(name) = input::parse_name(&self.read_line()?) {
                return Ok(name);
            }
        }
    }

    fn request_column(&mut self, board: &Board, player: &Player) -> Result<usize, InputClosed> {
        self.clear_screen();
        let palette = self.palette;
        let rendered = board.render();
        let display = BoardDisplay::new(&rendered)
            .palette(palette.as_ref())
            .show_labels(self.show_hints);
        self.say(format_args!(
            "\nPlayer {} ({}): {} turn:\nEnter a column number: 0-{}.\n\n{display}",
            player.id(),
            player.avatar(),
            player.name(),
            board.columns() - 1,
        ));
        loop {
            match input::parse_column(&self.read_line()?, board) {
                Ok(column) => return Ok(column),
                Err(e) => self.say(format_args!("{e}")),
            }
        }
    }

    fn show_board(&mut self, board: &Board) {
        let palette = self.palette;
        let rendered = board.render();
        let display = BoardDisplay::new(&rendered).palette(palette.as_ref());
        self.say(format_args!("\n{display}"));
    }

    fn show_outcome(&mut self, outcome: Outcome, board: &Board, players: &[Player; 2]) {
        self.clear_screen();
        let palette = self.palette;
        let rendered = board.render();
        let display = BoardDisplay::new(&rendered).palette(palette.as_ref());
        let scoreboard = ScoreboardDisplay::new(players).palette(palette.as_ref());
        match outcome {
            Outcome::Win(id) => {
                let winner = &players[id.index()];
                self.say(format_args!(
                    "\n{display}\nCONNECT 4! Player {id}: {} ({}) wins!\n\n{scoreboard}",
                    winner.name(),
                    winner.avatar(),
                ));
            }
            Outcome::Draw => {
                self.say(format_args!("\n{display}\nIt's a draw!\n\n{scoreboard}"));
            }
        }
    }

    fn request_continue(&mut self) -> Result<(), InputClosed> {
        self.say(format_args!("Press Enter to continue playing."));
        self.read_line().map(|_| ())
    }
}
