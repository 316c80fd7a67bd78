//! Configuration options for the minimax search
//!
//! This module defines the parameters that control how the search engine
//! orders and prunes the game tree. None of them affect the value of the
//! move that is returned, only which of several equally good moves is found
//! first and how much of the tree is visited.

/// Configuration for the minimax search
///
/// # Example
///
/// ```
/// use tictactoe_minimax::MinimaxConfig;
///
/// let config = MinimaxConfig::default()
///     .with_seed(42)
///     .with_shuffle(true)
///     .with_pruning(true);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimaxConfig {
    /// Seed for the action-shuffling RNG
    ///
    /// `None` seeds from operating system entropy, so repeated searches may
    /// return different moves of equal value.
    pub seed: Option<u64>,

    /// Whether legal actions are shuffled before they are explored
    ///
    /// When disabled, actions are explored in row-major order and ties are
    /// always broken the same way.
    pub shuffle_actions: bool,

    /// Whether alpha-beta cutoffs are applied
    ///
    /// Disabling pruning gives plain minimax, which visits the whole tree.
    pub use_pruning: bool,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        MinimaxConfig {
            seed: None,
            shuffle_actions: true,
            use_pruning: true,
        }
    }
}

impl MinimaxConfig {
    /// Sets the RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets whether actions are shuffled
    pub fn with_shuffle(mut self, shuffle_actions: bool) -> Self {
        self.shuffle_actions = shuffle_actions;
        self
    }

    /// Sets whether alpha-beta pruning is used
    pub fn with_pruning(mut self, use_pruning: bool) -> Self {
        self.use_pruning = use_pruning;
        self
    }
}
