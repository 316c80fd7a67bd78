//! Human-facing cell labels
//!
//! A label is a column letter `A`-`C` followed by a row digit `1`-`3`, so
//! `"A1"` is the top-left cell (0, 0) and `"C2"` is (1, 2).

use std::fmt;
use std::str::FromStr;

use crate::{
    board::{Position, BOARD_SIZE},
    GameError, Result,
};

const COLUMNS: [char; BOARD_SIZE] = ['A', 'B', 'C'];
const ROWS: [char; BOARD_SIZE] = ['1', '2', '3'];

impl Position {
    /// Parses a label such as `"B2"`; lowercase letters and surrounding
    /// whitespace are accepted
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidLookup`] for anything that is not one of
    /// the nine labels.
    pub fn from_label(label: &str) -> Result<Self> {
        let invalid = || GameError::InvalidLookup(label.to_string());

        let mut chars = label.trim().chars();
        let (Some(letter), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let col = COLUMNS
            .iter()
            .position(|c| *c == letter.to_ascii_uppercase())
            .ok_or_else(invalid)?;
        let row = ROWS.iter().position(|r| *r == digit).ok_or_else(invalid)?;

        Position::new(row, col)
    }

    /// Returns the label of this position, e.g. `"C2"` for (1, 2)
    pub fn label(&self) -> String {
        format!("{}{}", COLUMNS[self.col()], ROWS[self.row()])
    }
}

impl FromStr for Position {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Position::from_label(s)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
