//! Minimax search with alpha-beta pruning
//!
//! The engine explores the complete game tree below a position. Two mutually
//! recursive procedures, `max_value` and `min_value`, compute the value of a position for the
//! maximizing and minimizing player while carrying the alpha and beta bounds:
//!
//! - **alpha** is the best value the maximizer can already guarantee elsewhere
//! - **beta** is the best value the minimizer can already guarantee elsewhere
//!
//! Once a node's running value crosses the opposite bound its remaining
//! siblings cannot change the decision above it and are skipped. Pruning never
//! changes the value found, only how much of the tree is visited.
//!
//! Legal actions are shuffled before being explored at every node and the
//! root keeps the first best action it meets, so equally good moves vary
//! from one search to the next. Fix the seed in [`MinimaxConfig`] to make
//! searches repeatable.

use std::time::Instant;

use log::{debug, trace};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::{
    board::{Board, Position},
    config::MinimaxConfig,
    game_state::{GameState, Player},
    stats::SearchStatistics,
    Result,
};

/// Bound larger than any utility
const INFINITY: i32 = i32::MAX;

/// A root action together with its minimax value
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredAction<A> {
    /// The action taken from the root
    pub action: A,
    /// Value of the resulting position under optimal play by both sides
    pub value: i32,
}

/// The minimax search engine
///
/// The engine holds no game state between searches, only its configuration,
/// its random source and the statistics of the last search.
pub struct Minimax<R: Rng = StdRng> {
    /// Configuration for the search
    config: MinimaxConfig,

    /// Source of randomness for action ordering
    rng: R,

    /// Statistics gathered during the last search
    statistics: SearchStatistics,
}

impl Minimax<StdRng> {
    /// Creates a new engine, seeding its RNG from the configuration
    pub fn new(config: MinimaxConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl Default for Minimax<StdRng> {
    fn default() -> Self {
        Self::new(MinimaxConfig::default())
    }
}

impl<R: Rng> Minimax<R> {
    /// Creates a new engine drawing its action ordering from `rng`
    ///
    /// The `seed` field of the configuration is ignored.
    pub fn with_rng(config: MinimaxConfig, rng: R) -> Self {
        Minimax {
            config,
            rng,
            statistics: SearchStatistics::new(),
        }
    }

    /// Returns the configuration
    pub fn config(&self) -> &MinimaxConfig {
        &self.config
    }

    /// Returns the statistics of the last search
    pub fn get_statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Returns the optimal action for the player to move
    ///
    /// Returns `Ok(None)` without searching when the state is terminal.
    /// Among actions of equal value the first one explored wins.
    pub fn search<S: GameState>(&mut self, state: &S) -> Result<Option<S::Action>> {
        if state.is_terminal() {
            debug!("Search requested on a terminal position, no action to return");
            self.statistics = SearchStatistics::new();
            return Ok(None);
        }

        let maximizing = state.get_current_player().is_maximizer();
        let scored = self.score_actions(state)?;

        let mut best: Option<ScoredAction<S::Action>> = None;
        for candidate in scored {
            let improves = match &best {
                None => true,
                Some(current) if maximizing => candidate.value > current.value,
                Some(current) => candidate.value < current.value,
            };
            if improves {
                best = Some(candidate);
            }
        }

        if let Some(best) = &best {
            debug!(
                "Selected {:?} with value {} after {} nodes in {:.3} ms",
                best.action,
                best.value,
                self.statistics.nodes_visited,
                self.statistics.total_time.as_secs_f64() * 1000.0
            );
        }

        Ok(best.map(|scored| scored.action))
    }

    /// Scores every legal action from the root in exploration order
    ///
    /// Each action is searched with a full window, so every value reported
    /// is exact. Returns an empty list on terminal states.
    pub fn score_actions<S: GameState>(
        &mut self,
        state: &S,
    ) -> Result<Vec<ScoredAction<S::Action>>> {
        self.statistics = SearchStatistics::new();
        if state.is_terminal() {
            return Ok(Vec::new());
        }

        let start_time = Instant::now();
        let maximizing = state.get_current_player().is_maximizer();
        let actions = self.ordered_actions(state);
        debug!(
            "Searching {} actions for {:?}",
            actions.len(),
            state.get_current_player()
        );

        let mut scored = Vec::with_capacity(actions.len());
        for action in actions {
            let next = state.apply_action(&action)?;
            let value = if maximizing {
                self.min_value(&next, -INFINITY, INFINITY, 1)?
            } else {
                self.max_value(&next, -INFINITY, INFINITY, 1)?
            };
            scored.push(ScoredAction { action, value });
        }

        self.statistics.total_time = start_time.elapsed();
        Ok(scored)
    }

    /// Returns the value of a position under optimal play by both sides
    pub fn evaluate<S: GameState>(&mut self, state: &S) -> Result<i32> {
        self.statistics = SearchStatistics::new();
        let start_time = Instant::now();

        let value = if state.get_current_player().is_maximizer() {
            self.max_value(state, -INFINITY, INFINITY, 0)?
        } else {
            self.min_value(state, -INFINITY, INFINITY, 0)?
        };

        self.statistics.total_time = start_time.elapsed();
        Ok(value)
    }

    /// Value of `state` when the maximizer is to move
    fn max_value<S: GameState>(
        &mut self,
        state: &S,
        mut alpha: i32,
        beta: i32,
        depth: usize,
    ) -> Result<i32> {
        self.statistics.record_node(depth);
        if state.is_terminal() {
            self.statistics.terminal_nodes += 1;
            return Ok(state.utility());
        }

        let mut value = -INFINITY;
        for action in self.ordered_actions(state) {
            let next = state.apply_action(&action)?;
            value = value.max(self.min_value(&next, alpha, beta, depth + 1)?);

            if self.config.use_pruning && value >= beta {
                trace!("Beta cutoff at depth {} ({} >= {})", depth, value, beta);
                self.statistics.cutoffs += 1;
                break;
            }
            alpha = alpha.max(value);
        }

        Ok(value)
    }

    /// Value of `state` when the minimizer is to move
    fn min_value<S: GameState>(
        &mut self,
        state: &S,
        alpha: i32,
        mut beta: i32,
        depth: usize,
    ) -> Result<i32> {
        self.statistics.record_node(depth);
        if state.is_terminal() {
            self.statistics.terminal_nodes += 1;
            return Ok(state.utility());
        }

        let mut value = INFINITY;
        for action in self.ordered_actions(state) {
            let next = state.apply_action(&action)?;
            value = value.min(self.max_value(&next, alpha, beta, depth + 1)?);

            if self.config.use_pruning && value <= alpha {
                trace!("Alpha cutoff at depth {} ({} <= {})", depth, value, alpha);
                self.statistics.cutoffs += 1;
                break;
            }
            beta = beta.min(value);
        }

        Ok(value)
    }

    fn ordered_actions<S: GameState>(&mut self, state: &S) -> Vec<S::Action> {
        let mut actions = state.get_legal_actions();
        if self.config.shuffle_actions {
            actions.shuffle(&mut self.rng);
        }
        actions
    }
}

/// Returns the optimal move on `board` using a default engine
///
/// Returns `Ok(None)` if the game is already over.
///
/// # Example
///
/// ```
/// use tictactoe_minimax::{minimax, Board, Position};
///
/// // X to move, completing the middle row wins
/// let board: Board = "OOX/XX./O..".parse().unwrap();
/// assert_eq!(minimax(&board).unwrap(), Some(Position::new(1, 2).unwrap()));
/// ```
pub fn minimax(board: &Board) -> Result<Option<Position>> {
    Minimax::default().search(board)
}
