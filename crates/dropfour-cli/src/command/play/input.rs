use dropfour_engine::Board;

/// Why a typed column was rejected. Displays as the re-prompt shown to the
/// player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ColumnInputError {
    /// Not a number, or not a column of the board.
    #[display("Invalid input. Enter a column number: 0-{last_column}.")]
    Invalid { last_column: usize },
    /// The column is full.
    #[display("You cannot move there. Enter a column number: 0-{last_column}.")]
    Unavailable { last_column: usize },
}

/// Parses a player name, rejecting blank input.
pub fn parse_name(line: &str) -> Option<String> {
    let name = line.trim();
    (!name.is_empty()).then(|| name.to_owned())
}

/// Parses a column index and checks that `board` accepts a piece there.
///
/// Only plain digits are accepted: signs, blanks and anything else are
/// invalid.
pub fn parse_column(line: &str, board: &Board) -> Result<usize, ColumnInputError> {
    let last_column = board.columns() - 1;
    let text = line.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ColumnInputError::Invalid { last_column });
    }
    let column = text
        .parse::<usize>()
        .ok()
        .filter(|&column| column <= last_column)
        .ok_or(ColumnInputError::Invalid { last_column })?;
    if !board.is_valid_move(column) {
        return Err(ColumnInputError::Unavailable { last_column });
    }
    Ok(column)
}

#[cfg(test)]
mod tests {
    use dropfour_engine::Avatar;

    use super::*;

    #[test]
    fn test_parse_name() {
        assert_eq!(parse_name("Ada\n"), Some("Ada".to_owned()));
        assert_eq!(parse_name("  Grace Hopper  "), Some("Grace Hopper".to_owned()));
        assert_eq!(parse_name(""), None);
        assert_eq!(parse_name("   \n"), None);
    }

    #[test]
    fn test_parse_column_accepts_open_columns() {
        let board = Board::default();
        for column in 0..7 {
            assert_eq!(parse_column(&format!("{column}\n"), &board), Ok(column));
        }
        assert_eq!(parse_column(" 3 ", &board), Ok(3));
        assert_eq!(parse_column("003", &board), Ok(3));
    }

    #[test]
    fn test_parse_column_rejects_malformed_input() {
        let board = Board::default();
        let invalid = Err(ColumnInputError::Invalid { last_column: 6 });
        for line in ["", "\n", "abc", "-1", "+2", "1.5", "3 4", "99999999999999999999999"] {
            assert_eq!(parse_column(line, &board), invalid, "input {line:?}");
        }
    }

    #[test]
    fn test_parse_column_rejects_out_of_range() {
        let board = Board::new(6, 5);
        assert_eq!(
            parse_column("5", &board),
            Err(ColumnInputError::Invalid { last_column: 4 })
        );
        assert_eq!(parse_column("4", &board), Ok(4));
    }

    #[test]
    fn test_parse_column_rejects_full_column() {
        let mut board = Board::default();
        for _ in 0..6 {
            board.drop_piece(2, Avatar::new('x'));
        }
        assert_eq!(
            parse_column("2", &board),
            Err(ColumnInputError::Unavailable { last_column: 6 })
        );
    }

    #[test]
    fn test_column_input_error_messages() {
        assert_eq!(
            ColumnInputError::Invalid { last_column: 6 }.to_string(),
            "Invalid input. Enter a column number: 0-6."
        );
        assert_eq!(
            ColumnInputError::Unavailable { last_column: 6 }.to_string(),
            "You cannot move there. Enter a column number: 0-6."
        );
    }
}
