use std::fmt;

use dropfour_engine::{Cell, RenderedBoard};

use crate::ui::style::{self, Palette};

const CELL_WIDTH: usize = 3;
const DIVIDER: &str = "║";
const ROW_JOINT: &str = "╬";
const BOTTOM_JOINT: &str = "╩";
const RULE: &str = "═";

/// Text rendering of a [`RenderedBoard`].
///
/// Cells are three characters wide, separated by `║`, with `═══╬` rules
/// between rows. When column labels are enabled, a footer lists the index
/// of every column that still accepts a piece.
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    board: &'a RenderedBoard,
    palette: Option<&'a Palette>,
    show_labels: bool,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(board: &'a RenderedBoard) -> Self {
        Self {
            board,
            palette: None,
            show_labels: false,
        }
    }

    pub fn palette(self, palette: Option<&'a Palette>) -> Self {
        Self { palette, ..self }
    }

    pub fn show_labels(self, show_labels: bool) -> Self {
        Self {
            show_labels,
            ..self
        }
    }

    fn rule(&self, joint: &str) -> String {
        vec![RULE.repeat(CELL_WIDTH); self.board.width()].join(joint)
    }

    fn fmt_cell(&self, f: &mut fmt::Formatter<'_>, cell: Cell) -> fmt::Result {
        match cell.avatar() {
            None => write!(f, "{:w$}", "", w = CELL_WIDTH),
            Some(avatar) => {
                let text = format!("{avatar:>w$}", w = CELL_WIDTH);
                let style = self
                    .palette
                    .map_or_else(Default::default, |palette| palette.avatar_style(avatar));
                write!(f, "{}", style::paint(self.palette, style, text))
            }
        }
    }
}

impl fmt::Display for BoardDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let divider = style::paint(self.palette, style::grid(), DIVIDER);

        for (i, row) in self.board.rows().enumerate() {
            if i > 0 {
                writeln!(
                    f,
                    "{}",
                    style::paint(self.palette, style::grid(), self.rule(ROW_JOINT))
                )?;
            }
            for (j, &cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, "{divider}")?;
                }
                self.fmt_cell(f, cell)?;
            }
            writeln!(f)?;
        }

        if self.show_labels {
            writeln!(
                f,
                "{}",
                style::paint(self.palette, style::grid(), self.rule(BOTTOM_JOINT))
            )?;
            let labels = self
                .board
                .column_labels()
                .iter()
                .map(|label| match label {
                    Some(column) => format!("{column:>w$}", w = CELL_WIDTH),
                    None => " ".repeat(CELL_WIDTH),
                })
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", style::paint(self.palette, style::label(), labels))?;
        }

        Ok(())
    }
}
