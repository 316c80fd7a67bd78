//! The Tic-Tac-Toe board model
//!
//! A [`Board`] is a small `Copy` value. Every rule is a pure function of the
//! board contents: whose turn it is and who has won are always derived from
//! the cells, never stored alongside them.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::{
    game_state::{self, GameState},
    GameError, Result,
};

/// Width and height of the board
pub const BOARD_SIZE: usize = 3;

/// The symbol a player places on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// The first player, who always opens the game
    X,
    /// The second player
    O,
}

impl Mark {
    /// Returns the other mark
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl game_state::Player for Mark {
    fn is_maximizer(&self) -> bool {
        *self == Mark::X
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// A cell on the board, addressed by row and column
///
/// Positions are always inside the 3x3 grid; the constructor rejects
/// anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position, failing if either coordinate is off the board
    pub fn new(row: usize, col: usize) -> Result<Self> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(GameError::InvalidLookup(format!("({}, {})", row, col)));
        }
        Ok(Position { row, col })
    }

    pub(crate) const fn from_index(index: usize) -> Self {
        Position {
            row: index / BOARD_SIZE,
            col: index % BOARD_SIZE,
        }
    }

    /// Row index, 0 at the top
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column index, 0 on the left
    pub fn col(&self) -> usize {
        self.col
    }

    /// Row-major index in `0..9`
    pub fn index(&self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// Iterates over all nine positions in row-major order
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE * BOARD_SIZE).map(Position::from_index)
    }
}

impl TryFrom<(usize, usize)> for Position {
    type Error = GameError;

    fn try_from((row, col): (usize, usize)) -> Result<Self> {
        Position::new(row, col)
    }
}

impl game_state::Action for Position {}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The given mark completed a line
    Win(Mark),
    /// The board filled up with no line completed
    Draw,
}

/// A 3x3 Tic-Tac-Toe position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Option<Mark>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Returns the empty starting board
    pub fn initial_state() -> Self {
        Board::default()
    }

    /// Builds a board from explicit rows, top row first
    ///
    /// The board is taken as given: no check is made that it is reachable
    /// through alternating play.
    pub fn from_rows(cells: [[Option<Mark>; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Board { cells }
    }

    /// Returns the rows of the board, top row first
    pub fn rows(&self) -> &[[Option<Mark>; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Returns the content of a cell
    pub fn get(&self, position: Position) -> Option<Mark> {
        self.cells[position.row][position.col]
    }

    /// Counts the cells holding the given mark
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Some(mark))
            .count()
    }

    /// Returns true if no cell is empty
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    /// Returns the mark that moves next
    ///
    /// X opens the game and the players alternate, so X moves whenever both
    /// marks have been played equally often and O moves otherwise. The board
    /// is assumed to come from legal alternating play.
    pub fn player(&self) -> Mark {
        if self.count(Mark::X) == self.count(Mark::O) {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// Returns the set of empty cells
    pub fn actions(&self) -> HashSet<Position> {
        self.empty_cells().into_iter().collect()
    }

    /// Returns the empty cells in row-major order
    pub fn empty_cells(&self) -> Vec<Position> {
        Position::all().filter(|p| self.get(*p).is_none()).collect()
    }

    /// Returns the board after the player to move occupies `action`
    ///
    /// The receiver is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidMove`] if the cell is already occupied.
    pub fn result(&self, action: Position) -> Result<Board> {
        if self.get(action).is_some() {
            return Err(GameError::InvalidMove {
                row: action.row,
                col: action.col,
            });
        }

        let mut next = *self;
        next.cells[action.row][action.col] = Some(self.player());
        Ok(next)
    }

    /// Returns the mark holding a complete row, column or diagonal
    ///
    /// X is checked before O. For each mark, row `i` and column `i` are
    /// checked together for each index, then both diagonals. This order only
    /// matters on boards where both marks hold a line, which legal play
    /// cannot produce.
    pub fn winner(&self) -> Option<Mark> {
        let c = &self.cells;
        [Mark::X, Mark::O].into_iter().find(|&mark| {
            let owned = |row: usize, col: usize| c[row][col] == Some(mark);
            let line = (0..BOARD_SIZE).any(|i| {
                (0..BOARD_SIZE).all(|j| owned(i, j)) || (0..BOARD_SIZE).all(|j| owned(j, i))
            });
            line || (0..BOARD_SIZE).all(|i| owned(i, i))
                || (0..BOARD_SIZE).all(|i| owned(i, BOARD_SIZE - 1 - i))
        })
    }

    /// Returns true if someone has won or the board is full
    pub fn terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Scores the board from X's perspective: 1 if X won, -1 if O won, 0 otherwise
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Mark::X) => 1,
            Some(Mark::O) => -1,
            None => 0,
        }
    }

    /// Returns how the game ended, or `None` while it is still in progress
    pub fn outcome(&self) -> Option<Outcome> {
        match self.winner() {
            Some(mark) => Some(Outcome::Win(mark)),
            None if self.is_full() => Some(Outcome::Draw),
            None => None,
        }
    }
}

impl GameState for Board {
    type Action = Position;
    type Player = Mark;

    fn get_legal_actions(&self) -> Vec<Self::Action> {
        if self.winner().is_some() {
            return vec![];
        }
        self.empty_cells()
    }

    fn apply_action(&self, action: &Self::Action) -> Result<Self> {
        self.result(*action)
    }

    fn is_terminal(&self) -> bool {
        self.terminal()
    }

    fn utility(&self) -> i32 {
        Board::utility(self)
    }

    fn get_current_player(&self) -> Self::Player {
        self.player()
    }
}

impl FromStr for Board {
    type Err = GameError;

    /// Parses nine cells in row-major order
    ///
    /// `X` and `O` (either case) are marks, `.`, `-` and `_` are empty
    /// cells, and `/` or whitespace may separate rows.
    fn from_str(s: &str) -> Result<Self> {
        let mut cells = Vec::with_capacity(BOARD_SIZE * BOARD_SIZE);
        for ch in s.chars().filter(|ch| *ch != '/' && !ch.is_whitespace()) {
            let cell = match ch {
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                '.' | '-' | '_' => None,
                other => {
                    return Err(GameError::InvalidBoard(format!(
                        "unexpected character {:?}",
                        other
                    )))
                }
            };
            cells.push(cell);
        }

        if cells.len() != BOARD_SIZE * BOARD_SIZE {
            return Err(GameError::InvalidBoard(format!(
                "expected {} cells, found {}",
                BOARD_SIZE * BOARD_SIZE,
                cells.len()
            )));
        }

        let mut board = Board::default();
        for (index, cell) in cells.into_iter().enumerate() {
            let position = Position::from_index(index);
            board.cells[position.row][position.col] = cell;
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "      | A | B | C |")?;
        writeln!(f, "   ----------------")?;
        for (row, cells) in self.cells.iter().enumerate() {
            write!(f, "    {} |", row + 1)?;
            for cell in cells {
                match cell {
                    Some(mark) => write!(f, " {} |", mark)?,
                    None => write!(f, "   |")?,
                }
            }
            writeln!(f)?;
            writeln!(f, "   ----------------")?;
        }
        Ok(())
    }
}
