//! # tictactoe-minimax
//!
//! A perfect-play Tic-Tac-Toe engine: minimax search with alpha-beta pruning
//! over a small, immutable board model.
//!
//! The crate has two layers:
//!
//! - The **board model** ([`Board`]) holds the rules as pure functions: the
//!   initial state, whose turn it is, the legal actions, the state transition,
//!   win detection, the terminal check and the terminal score.
//! - The **search engine** ([`Minimax`]) explores the full game tree below a
//!   position and returns a move that is optimal for the player to move.
//!
//! The engine is written against the [`GameState`] trait, so it can search any
//! finite two-player zero-sum game, but `Board` is the one this crate ships.
//!
//! ## Basic Usage
//!
//! ```
//! use tictactoe_minimax::{Board, Minimax, MinimaxConfig, Outcome};
//!
//! fn main() -> Result<(), tictactoe_minimax::GameError> {
//!     // A fixed seed makes the choice among equally good moves repeatable
//!     let config = MinimaxConfig::default().with_seed(7);
//!     let mut engine = Minimax::new(config);
//!
//!     // Let the engine play both sides
//!     let mut board = Board::initial_state();
//!     while let Some(action) = engine.search(&board)? {
//!         println!("{} plays {}", board.player(), action);
//!         board = board.result(action)?;
//!     }
//!
//!     // Perfect play from both sides always ends in a draw
//!     assert_eq!(board.outcome(), Some(Outcome::Draw));
//!     println!("{}", board);
//!     println!("{}", engine.get_statistics().summary());
//!     Ok(())
//! }
//! ```
//!
//! ## How It Works
//!
//! Two mutually recursive procedures compute the value of a position for the
//! maximizing player (X) and the minimizing player (O). Terminal positions are
//! scored +1 for an X win, -1 for an O win and 0 for a draw. Alpha and beta
//! bounds record what each side can already guarantee elsewhere, and a branch
//! is abandoned as soon as it is proven unable to affect the result.
//!
//! Legal actions are shuffled before they are explored and the first best
//! action wins ties, so the engine does not always answer the same position
//! with the same move. The shuffle can be seeded or turned off through
//! [`MinimaxConfig`].
//!
//! ## Examples
//!
//! A console game against the engine is included:
//!
//! ```bash
//! cargo run --example console
//! ```

pub mod board;
pub mod config;
pub mod game_state;
pub mod minimax;
pub mod notation;
pub mod stats;

pub use board::{Board, Mark, Outcome, Position, BOARD_SIZE};
pub use config::MinimaxConfig;
pub use game_state::{Action, GameState, Player};
pub use minimax::{minimax, Minimax, ScoredAction};
pub use stats::SearchStatistics;

/// Error types for the game engine
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The targeted cell is already occupied
    #[error("Invalid move: cell ({row}, {col}) is already occupied")]
    InvalidMove {
        /// Row of the targeted cell
        row: usize,
        /// Column of the targeted cell
        col: usize,
    },

    /// A cell label or coordinate pair outside the 3x3 board
    #[error("Invalid lookup: {0} is not a cell on the board")]
    InvalidLookup(String),

    /// Text that does not describe a board
    #[error("Invalid board: {0}")]
    InvalidBoard(String),
}

/// Result type for game engine operations
pub type Result<T> = std::result::Result<T, GameError>;
