//! Traits defining game state representation for minimax search.
//!
//! The GameState trait is the interface the search engine is written against.
//! [`Board`](crate::board::Board) is the implementation this crate ships, but any
//! finite, two-player, zero-sum game with perfect information can be searched.

use std::fmt::Debug;

use crate::Result;

/// Trait for actions that can be taken in a game
///
/// Actions represent the moves that can be made from a given state.
pub trait Action: Clone + Debug + PartialEq + Send + Sync {}

/// Trait for players in a game
pub trait Player: Clone + Debug + PartialEq + Send + Sync {
    /// Returns true if this player tries to maximize the utility
    ///
    /// Utility is always reported from the maximizer's perspective, so the
    /// other player tries to minimize it.
    fn is_maximizer(&self) -> bool;
}

/// Trait defining the game state interface required for minimax search
pub trait GameState: Clone + Send + Sync {
    /// The type of actions that can be taken in this game
    type Action: Action;

    /// The type of players in this game
    type Player: Player;

    /// Returns the list of legal actions from this state
    ///
    /// Terminal states should return an empty list.
    fn get_legal_actions(&self) -> Vec<Self::Action>;

    /// Applies an action to the current state, returning the new state
    ///
    /// This method must be pure: the search explores many hypothetical
    /// futures from a shared ancestor and the original state is reused for
    /// each sibling.
    ///
    /// # Errors
    ///
    /// Returns an error if the action is not legal in this state.
    fn apply_action(&self, action: &Self::Action) -> Result<Self>;

    /// Returns true if this state is terminal (game over)
    fn is_terminal(&self) -> bool;

    /// Returns the score of the state from the maximizer's perspective
    ///
    /// Only meaningful on terminal states.
    fn utility(&self) -> i32;

    /// Returns the player whose turn it is in this state
    fn get_current_player(&self) -> Self::Player;
}
