//! Parsing of typed console input.

use derive_more::{Display, Error};
use tris_engine::Cell;

/// A line typed at the move prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place a mark on this cell.
    Cell(Cell),
    /// Leave the match.
    Quit,
}

/// Reason a typed line was not understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Nothing but whitespace.
    #[display("Type a move: `row col` (0-2) or a key 1-9")]
    Empty,

    /// Coordinates outside the grid.
    #[display("({row}, {col}) is off the board, rows and columns run 0-2")]
    OffGrid {
        /// Typed row.
        row: usize,
        /// Typed column.
        col: usize,
    },

    /// Anything else.
    #[display("Can't read `{text}` as a move")]
    Unrecognized {
        /// The typed text.
        text: String,
    },
}

/// Parses a prompt line.
///
/// Accepts `q`/`quit`, a keypad digit `1`-`9` (row-major from the top left) or
/// zero-based `row col` coordinates separated by whitespace or a comma.
pub fn parse_input(line: &str) -> Result<Input, InputError> {
    let text = line.trim();
    if text.is_empty() {
        return Err(InputError::Empty);
    }
    if text.eq_ignore_ascii_case("q") || text.eq_ignore_ascii_case("quit") {
        return Ok(Input::Quit);
    }

    let unrecognized = || InputError::Unrecognized {
        text: text.to_string(),
    };
    let parts: Vec<&str> = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [key] => {
            let key: usize = key.parse().map_err(|_| unrecognized())?;
            key.checked_sub(1)
                .and_then(Cell::from_index)
                .map(Input::Cell)
                .ok_or_else(unrecognized)
        }
        [row, col] => {
            let row: usize = row.parse().map_err(|_| unrecognized())?;
            let col: usize = col.parse().map_err(|_| unrecognized())?;
            Cell::new(row, col)
                .map(Input::Cell)
                .map_err(|_| InputError::OffGrid { row, col })
        }
        _ => Err(unrecognized()),
    }
}
