use std::fmt;

use serde::{Deserialize, Serialize};

/// The token identifying which player occupies a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Avatar(char);

impl Avatar {
    #[must_use]
    pub const fn new(token: char) -> Self {
        Self(token)
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl From<char> for Avatar {
    fn from(token: char) -> Self {
        Self(token)
    }
}

impl fmt::Display for Avatar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A single cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Avatar),
}

impl Cell {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    #[must_use]
    pub fn avatar(self) -> Option<Avatar> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(avatar) => Some(avatar),
        }
    }

    #[must_use]
    pub fn is_occupied_by(self, avatar: Avatar) -> bool {
        self == Cell::Occupied(avatar)
    }
}

/// Grid coordinates. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    row: usize,
    column: usize,
}

impl Point {
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    #[must_use]
    pub const fn column(self) -> usize {
        self.column
    }
}

impl From<(usize, usize)> for Point {
    fn from((row, column): (usize, usize)) -> Self {
        Self { row, column }
    }
}
