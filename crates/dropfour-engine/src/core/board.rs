use crate::PlacementError;

use super::{
    cell::{Avatar, Cell, Point},
    line::{CONNECT_LENGTH, DiagonalLines, longest_run},
    rendered_board::RenderedBoard,
};

/// The Connect Four grid.
///
/// `Board` owns the cells and the precomputed diagonal lines of a fixed-size
/// grid. Every read and write of a cell goes through its methods.
///
/// # Layout
///
/// - **Default dimensions**: 6 rows × 7 columns
/// - **Row 0** is the top row; row `rows - 1` is the bottom row, where dropped
///   pieces settle first
///
/// # Win Detection
///
/// A win is any line (row, column or diagonal) whose [`longest_run`] for an
/// avatar reaches [`CONNECT_LENGTH`]. The whole board is rescanned on every
/// query, so the result never depends on where the last piece landed.
///
/// # Example
///
/// ```
/// use dropfour_engine::{Avatar, Board};
///
/// let x = Avatar::new('x');
/// let mut board = Board::default();
///
/// for _ in 0..4 {
///     board.drop_piece(3, x);
/// }
///
/// assert!(board.has_vertical_win(x));
/// assert!(board.is_game_over(&[x]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Vec<Cell>>,
    diagonals: DiagonalLines,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ROWS, Self::DEFAULT_COLUMNS)
    }
}

impl Board {
    pub const DEFAULT_ROWS: usize = 6;
    pub const DEFAULT_COLUMNS: usize = 7;

    /// Creates an empty board.
    ///
    /// # Panics
    ///
    /// Panics if `rows` or `columns` is smaller than [`CONNECT_LENGTH`].
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        assert!(
            rows >= CONNECT_LENGTH && columns >= CONNECT_LENGTH,
            "board must be at least {CONNECT_LENGTH}x{CONNECT_LENGTH}, got {rows}x{columns}",
        );
        Self {
            rows,
            columns,
            cells: vec![vec![Cell::Empty; columns]; rows],
            diagonals: DiagonalLines::new(rows, columns),
        }
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn diagonals(&self) -> &DiagonalLines {
        &self.diagonals
    }

    /// Empties every cell. The diagonal lines are kept.
    pub fn reset(&mut self) {
        for row in &mut self.cells {
            row.fill(Cell::Empty);
        }
    }

    /// Returns the cell at `point`, or `None` outside the board.
    #[must_use]
    pub fn cell(&self, point: Point) -> Option<Cell> {
        self.cells.get(point.row())?.get(point.column()).copied()
    }

    /// Returns an iterator over the rows, top to bottom.
    pub fn row_cells(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Returns the cells of `column`, top to bottom.
    pub fn column_cells(&self, column: usize) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().filter_map(move |row| row.get(column).copied())
    }

    #[must_use]
    pub fn is_inside(&self, point: Point) -> bool {
        point.row() < self.rows && point.column() < self.columns
    }

    /// Returns whether a piece can be dropped into `column`.
    #[must_use]
    pub fn is_valid_move(&self, column: usize) -> bool {
        self.landing_row(column).is_some()
    }

    /// Returns the row a piece dropped into `column` would settle on.
    ///
    /// Returns `None` if the column is full or outside the board.
    #[must_use]
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        if column >= self.columns {
            return None;
        }
        (0..self.rows)
            .rev()
            .find(|&row| self.cells[row][column].is_empty())
    }

    /// Emits the column indices where moves are legal.
    pub fn available_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.columns).filter(|&column| self.is_valid_move(column))
    }

    /// Drops `avatar` into `column`; it settles in the lowest empty cell.
    ///
    /// Invalid moves (full or out-of-range columns) are ignored. Callers are
    /// expected to check [`is_valid_move`](Self::is_valid_move) first.
    pub fn drop_piece(&mut self, column: usize, avatar: Avatar) {
        if let Some(row) = self.landing_row(column) {
            self.cells[row][column] = Cell::Occupied(avatar);
        }
    }

    /// Places `avatar` directly at `point`, ignoring gravity.
    pub fn set_cell(&mut self, point: Point, avatar: Avatar) -> Result<(), PlacementError> {
        let cell = self.cell(point).ok_or(PlacementError::OutOfBounds)?;
        if !cell.is_empty() {
            return Err(PlacementError::Occupied);
        }
        self.cells[point.row()][point.column()] = Cell::Occupied(avatar);
        Ok(())
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    #[must_use]
    pub fn has_horizontal_win(&self, avatar: Avatar) -> bool {
        self.cells
            .iter()
            .any(|row| longest_run(row.iter().copied(), avatar) >= CONNECT_LENGTH)
    }

    #[must_use]
    pub fn has_vertical_win(&self, avatar: Avatar) -> bool {
        (0..self.columns)
            .any(|column| longest_run(self.column_cells(column), avatar) >= CONNECT_LENGTH)
    }

    #[must_use]
    pub fn has_diagonal_win(&self, avatar: Avatar) -> bool {
        self.diagonals.iter().any(|line| {
            let cells = line
                .iter()
                .map(|point| self.cells[point.row()][point.column()]);
            longest_run(cells, avatar) >= CONNECT_LENGTH
        })
    }

    /// Check if `avatar` has four in a row in any direction.
    #[must_use]
    pub fn has_win(&self, avatar: Avatar) -> bool {
        self.has_horizontal_win(avatar)
            || self.has_vertical_win(avatar)
            || self.has_diagonal_win(avatar)
    }

    /// Returns the first avatar in `avatars` that has a win.
    #[must_use]
    pub fn winner(&self, avatars: &[Avatar]) -> Option<Avatar> {
        avatars.iter().copied().find(|&avatar| self.has_win(avatar))
    }

    /// Returns whether any of `avatars` has won or the board is full.
    #[must_use]
    pub fn is_game_over(&self, avatars: &[Avatar]) -> bool {
        self.winner(avatars).is_some() || self.is_full()
    }

    /// Takes a structural snapshot of the board for display.
    #[must_use]
    pub fn render(&self) -> RenderedBoard {
        let open_columns = (0..self.columns)
            .map(|column| self.is_valid_move(column).then_some(column))
            .collect();
        RenderedBoard::new(self.cells.clone(), open_columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Avatar = Avatar::new('x');
    const O: Avatar = Avatar::new('o');

    /// Builds a board from rows written top to bottom; `.` is an empty cell.
    fn board_from(rows: &[&str]) -> Board {
        let columns = rows[0].chars().count();
        let mut board = Board::new(rows.len(), columns);
        for (row, line) in rows.iter().enumerate() {
            for (column, token) in line.chars().enumerate() {
                if token != '.' {
                    board.set_cell(Point::new(row, column), Avatar::new(token)).unwrap();
                }
            }
        }
        board
    }

    #[test]
    fn test_new_board_is_empty() {
        for (rows, columns) in [(6, 7), (4, 4), (5, 9), (10, 4)] {
            let board = Board::new(rows, columns);
            assert_eq!(board.row_cells().count(), rows);
            for row in board.row_cells() {
                assert_eq!(row.len(), columns);
                assert!(row.iter().all(|cell| cell.is_empty()));
            }
        }
    }

    #[test]
    fn test_default_board_dimensions() {
        let board = Board::default();
        assert_eq!(board.rows(), 6);
        assert_eq!(board.columns(), 7);
    }

    #[test]
    #[should_panic(expected = "board must be at least 4x4")]
    fn test_new_board_too_small() {
        let _ = Board::new(3, 7);
    }

    #[test]
    fn test_reset_twice_equals_fresh_board() {
        let mut board = board_from(&[
            ".......", ".......", ".......", "x......", "oox....", "xxoo...",
        ]);
        board.reset();
        board.reset();
        assert_eq!(board, Board::new(6, 7));
    }

    #[test]
    fn test_is_inside() {
        let board = Board::new(6, 7);
        assert!(board.is_inside(Point::new(0, 0)));
        assert!(board.is_inside(Point::new(5, 6)));
        assert!(!board.is_inside(Point::new(6, 0)));
        assert!(!board.is_inside(Point::new(0, 7)));
    }

    #[test]
    fn test_is_valid_move() {
        let mut board = Board::new(6, 7);
        assert!((0..7).all(|column| board.is_valid_move(column)));
        assert!(!board.is_valid_move(7));
        assert!(!board.is_valid_move(usize::MAX));

        for i in 0..6 {
            assert!(board.is_valid_move(2), "column should accept piece #{i}");
            board.drop_piece(2, X);
        }
        assert!(!board.is_valid_move(2));
        assert_eq!(board.available_columns().collect::<Vec<_>>(), [0, 1, 3, 4, 5, 6]);
    }

    #[test]
    fn test_drop_piece_stacks_from_bottom() {
        let mut board = Board::new(6, 7);
        for k in 0..6 {
            assert_eq!(board.landing_row(4), Some(6 - 1 - k));
            board.drop_piece(4, if k % 2 == 0 { X } else { O });
            assert_eq!(
                board.cell(Point::new(6 - 1 - k, 4)),
                Some(Cell::Occupied(if k % 2 == 0 { X } else { O })),
            );
        }
        assert_eq!(board.landing_row(4), None);
    }

    #[test]
    fn test_drop_piece_changes_exactly_one_cell() {
        let mut board = board_from(&[
            ".......", ".......", ".......", "x......", "oox....", "xxoo...",
        ]);
        let before = board.clone();
        board.drop_piece(2, O);

        let changed = (0..6)
            .flat_map(|row| (0..7).map(move |column| Point::new(row, column)))
            .filter(|&point| board.cell(point) != before.cell(point))
            .collect::<Vec<_>>();
        assert_eq!(changed, [Point::new(3, 2)]);
    }

    #[test]
    fn test_drop_piece_into_full_or_invalid_column_is_ignored() {
        let mut board = Board::new(4, 4);
        for _ in 0..4 {
            board.drop_piece(0, X);
        }
        let full = board.clone();

        board.drop_piece(0, O);
        assert_eq!(board, full);

        board.drop_piece(4, O);
        assert_eq!(board, full);
    }

    #[test]
    fn test_drops_read_back() {
        let mut board = Board::new(6, 7);
        let moves = [(3, X), (3, O), (2, X), (4, O), (3, X), (6, O)];
        for (column, avatar) in moves {
            board.drop_piece(column, avatar);
        }

        let expected = board_from(&[
            ".......", ".......", ".......", "...x...", "...o...", "..xxo.o",
        ]);
        assert_eq!(board, expected);
    }

    #[test]
    fn test_set_cell() {
        let mut board = Board::new(6, 7);
        assert_eq!(board.set_cell(Point::new(0, 0), X), Ok(()));
        assert_eq!(board.cell(Point::new(0, 0)), Some(Cell::Occupied(X)));

        assert_eq!(
            board.set_cell(Point::new(0, 0), O),
            Err(PlacementError::Occupied)
        );
        assert_eq!(board.cell(Point::new(0, 0)), Some(Cell::Occupied(X)));

        assert_eq!(
            board.set_cell(Point::new(6, 0), O),
            Err(PlacementError::OutOfBounds)
        );
        assert_eq!(
            board.set_cell(Point::new(0, 7), O),
            Err(PlacementError::OutOfBounds)
        );
    }

    #[test]
    fn test_horizontal_win() {
        let board = board_from(&[
            ".......", ".......", ".......", "xxxx...", "ooxo...", "xxoo..o",
        ]);
        assert!(board.has_horizontal_win(X));
        assert!(board.has_win(X));
        assert!(!board.has_horizontal_win(O));

        let board = board_from(&[
            ".......", ".......", ".......", "xoxx...", "ooxo...", "xxox..o",
        ]);
        assert!(!board.has_horizontal_win(X));
    }

    #[test]
    fn test_horizontal_win_at_right_edge() {
        let board = board_from(&["....", "....", "....", "oooo"]);
        assert!(board.has_horizontal_win(O));
        assert!(!board.has_vertical_win(O));
        assert!(!board.has_diagonal_win(O));
    }

    #[test]
    fn test_vertical_win() {
        let board = board_from(&[
            ".......", ".......", "..o....", "xxoxx..", "ooooxx.", "xxooxo.",
        ]);
        assert!(board.has_vertical_win(O));
        let column = [Cell::Empty, Cell::Empty].into_iter().chain([Cell::Occupied(O); 4]);
        assert!(board.column_cells(2).eq(column));

        let board = board_from(&[
            ".......", ".......", "..o.o..", "xxoxx..", "ooxoxx.", "xxooxo.",
        ]);
        assert!(!board.has_vertical_win(O));
    }

    #[test]
    fn test_ascending_diagonal_win() {
        let board = board_from(&[
            ".......", ".......", "......x", ".....xo", "....xoo", "...xooo",
        ]);
        assert!(board.has_diagonal_win(X));
        assert!(board.has_win(X));
        assert!(!board.has_diagonal_win(O));
        assert!(!board.has_win(O));
    }

    #[test]
    fn test_ascending_diagonal_win_from_bottom_left() {
        let board = board_from(&[
            ".......", ".......", "...o...", "..ox...", ".oxx...", "oxxx...",
        ]);
        assert!(board.has_diagonal_win(O));
        assert!(!board.has_horizontal_win(O));
        assert!(!board.has_vertical_win(O));
        assert!(!board.has_win(X));
    }

    #[test]
    fn test_descending_diagonal_win() {
        let board = board_from(&[
            "...x...", "...ox..", "...oox.", "...ooox", "...xxxx", "...xoxo",
        ]);
        assert!(board.has_diagonal_win(X));
        assert!(!board.has_diagonal_win(O));
    }

    #[test]
    fn test_broken_diagonal_is_not_a_win() {
        let board = board_from(&[
            "x......", ".x.....", "..o....", "...x...", "....x..", ".....x.",
        ]);
        assert!(!board.has_diagonal_win(X));
        assert!(!board.has_win(X));
    }

    #[test]
    fn test_diagonal_win_on_tall_and_wide_boards() {
        let tall = board_from(&["....", "....", "...x", "..x.", ".x..", "x...", "...."]);
        assert!(tall.has_diagonal_win(X));

        let wide = board_from(&["....x....", ".....x...", "......x..", ".......x."]);
        assert!(wide.has_diagonal_win(X));
    }

    #[test]
    fn test_game_over_on_full_board_without_winner() {
        let board = board_from(&[
            "oxooxoo", "xoxxoxx", "oxooxoo", "xoxxoxx", "oxooxoo", "xoxxoxx",
        ]);
        assert!(board.is_full());
        assert!(!board.has_win(X));
        assert!(!board.has_win(O));
        assert_eq!(board.winner(&[O, X]), None);
        assert!(board.is_game_over(&[O, X]));
    }

    #[test]
    fn test_game_over_as_soon_as_someone_wins() {
        let mut board = Board::new(6, 7);
        for column in 0..3 {
            board.drop_piece(column, X);
            assert!(!board.is_game_over(&[X, O]));
        }
        board.drop_piece(3, X);
        assert!(!board.is_full());
        assert!(board.is_game_over(&[X, O]));
        assert!(board.is_game_over(&[O, X]));
        assert!(!board.is_game_over(&[O]));
        assert_eq!(board.winner(&[O, X]), Some(X));
    }

    #[test]
    fn test_winner_respects_caller_order() {
        let board = board_from(&["....", "....", "oooo", "xxxx"]);
        assert_eq!(board.winner(&[X, O]), Some(X));
        assert_eq!(board.winner(&[O, X]), Some(O));
    }

    #[test]
    fn test_reset_keeps_diagonals() {
        let mut board = Board::new(5, 8);
        let diagonals = board.diagonals().clone();
        board.drop_piece(0, X);
        board.reset();
        assert_eq!(board.diagonals(), &diagonals);
        assert_eq!(board, Board::new(5, 8));
    }
}
