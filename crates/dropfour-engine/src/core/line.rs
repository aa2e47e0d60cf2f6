use super::cell::{Avatar, Cell, Point};

/// Number of pieces in a row needed to win.
///
/// Win detection only ever compares run lengths against this value, so a
/// different run length would only need this constant and the board size
/// precondition to change.
pub const CONNECT_LENGTH: usize = 4;

/// Returns the length of the longest contiguous run of `avatar` in `cells`.
///
/// Empty cells and cells held by any other avatar reset the running count.
///
/// # Example
///
/// ```
/// use dropfour_engine::{Avatar, Cell, longest_run};
///
/// let x = Avatar::new('x');
/// let o = Avatar::new('o');
/// let cells = [x, x, o, x, x, x].map(Cell::Occupied);
///
/// assert_eq!(longest_run(cells, x), 3);
/// ```
pub fn longest_run<I>(cells: I, avatar: Avatar) -> usize
where
    I: IntoIterator<Item = Cell>,
{
    let mut count = 0;
    let mut longest = 0;
    for cell in cells {
        if cell.is_occupied_by(avatar) {
            count += 1;
            longest = longest.max(count);
        } else {
            count = 0;
        }
    }
    longest
}

/// Every maximal diagonal of a `rows × columns` grid, in both directions.
///
/// - **Descending** lines run top-left to bottom-right and are seeded from the
///   top edge and the left edge.
/// - **Ascending** lines run bottom-left to top-right and are seeded from the
///   left edge and the bottom edge.
///
/// Each line lists its points from the seed square outwards. The corner
/// shared by two seed edges seeds a single line, so each family holds exactly
/// `rows + columns - 1` lines and covers every cell once. Lines shorter than
/// [`CONNECT_LENGTH`] are kept; they can never hold a win.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagonalLines {
    descending: Vec<Vec<Point>>,
    ascending: Vec<Vec<Point>>,
}

impl DiagonalLines {
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        if rows == 0 || columns == 0 {
            return Self {
                descending: vec![],
                ascending: vec![],
            };
        }

        let bottom = rows - 1;

        let descending = (0..columns)
            .map(|column| Point::new(0, column))
            .chain((1..rows).map(|row| Point::new(row, 0)))
            .map(|seed| {
                (0..rows)
                    .map_while(|step| {
                        let row = seed.row() + step;
                        let column = seed.column() + step;
                        (row < rows && column < columns).then(|| Point::new(row, column))
                    })
                    .collect()
            })
            .collect();

        let ascending = (0..rows)
            .map(|row| Point::new(row, 0))
            .chain((1..columns).map(|column| Point::new(bottom, column)))
            .map(|seed| {
                (0..rows)
                    .map_while(|step| {
                        let row = seed.row().checked_sub(step)?;
                        let column = seed.column() + step;
                        (column < columns).then(|| Point::new(row, column))
                    })
                    .collect()
            })
            .collect();

        Self {
            descending,
            ascending,
        }
    }

    #[must_use]
    pub fn descending(&self) -> &[Vec<Point>] {
        &self.descending
    }

    #[must_use]
    pub fn ascending(&self) -> &[Vec<Point>] {
        &self.ascending
    }

    /// Returns an iterator over the lines of both families.
    pub fn iter(&self) -> impl Iterator<Item = &[Point]> {
        self.descending
            .iter()
            .chain(&self.ascending)
            .map(Vec::as_slice)
    }
}
