use tictactoe_minimax::{Action, GameError, GameState, Minimax, MinimaxConfig, Player};

/// Subtraction game: players alternately take one or two stones and whoever
/// takes the last stone wins
#[derive(Clone, Debug)]
struct Nim {
    pile: u32,
    to_move: NimPlayer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NimPlayer {
    First,
    Second,
}

impl Player for NimPlayer {
    fn is_maximizer(&self) -> bool {
        *self == NimPlayer::First
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Take(u32);

impl Action for Take {}

impl GameState for Nim {
    type Action = Take;
    type Player = NimPlayer;

    fn get_legal_actions(&self) -> Vec<Self::Action> {
        (1..=2).filter(|n| *n <= self.pile).map(Take).collect()
    }

    fn apply_action(&self, action: &Self::Action) -> tictactoe_minimax::Result<Self> {
        if action.0 > self.pile {
            return Err(GameError::InvalidMove {
                row: 0,
                col: action.0 as usize,
            });
        }
        Ok(Nim {
            pile: self.pile - action.0,
            to_move: match self.to_move {
                NimPlayer::First => NimPlayer::Second,
                NimPlayer::Second => NimPlayer::First,
            },
        })
    }

    fn is_terminal(&self) -> bool {
        self.pile == 0
    }

    fn utility(&self) -> i32 {
        // The player who just moved took the last stone
        match self.to_move {
            NimPlayer::First => -1,
            NimPlayer::Second => 1,
        }
    }

    fn get_current_player(&self) -> Self::Player {
        self.to_move
    }
}

/// A game whose move generator offers a move its rules reject
#[derive(Clone, Debug)]
struct Broken;

impl GameState for Broken {
    type Action = Take;
    type Player = NimPlayer;

    fn get_legal_actions(&self) -> Vec<Self::Action> {
        vec![Take(1)]
    }

    fn apply_action(&self, action: &Self::Action) -> tictactoe_minimax::Result<Self> {
        Err(GameError::InvalidMove {
            row: 0,
            col: action.0 as usize,
        })
    }

    fn is_terminal(&self) -> bool {
        false
    }

    fn utility(&self) -> i32 {
        0
    }

    fn get_current_player(&self) -> Self::Player {
        NimPlayer::First
    }
}

fn engine(seed: u64) -> Minimax {
    Minimax::new(MinimaxConfig::default().with_seed(seed))
}

#[test]
fn test_nim_leaves_a_multiple_of_three() {
    for (pile, take) in [(1, 1), (2, 2), (4, 1), (5, 2), (7, 1), (8, 2), (10, 1)] {
        let state = Nim {
            pile,
            to_move: NimPlayer::First,
        };
        assert_eq!(engine(pile as u64).search(&state).unwrap(), Some(Take(take)));
    }
}

#[test]
fn test_nim_values_from_both_sides() {
    let mut engine = engine(0);
    for pile in 1..=9 {
        let expected = if pile % 3 == 0 { -1 } else { 1 };

        let first = Nim {
            pile,
            to_move: NimPlayer::First,
        };
        assert_eq!(engine.evaluate(&first).unwrap(), expected, "pile {}", pile);

        let second = Nim {
            pile,
            to_move: NimPlayer::Second,
        };
        assert_eq!(engine.evaluate(&second).unwrap(), -expected, "pile {}", pile);
    }
}

#[test]
fn test_nim_minimizer_picks_the_lowest_value() {
    let state = Nim {
        pile: 4,
        to_move: NimPlayer::Second,
    };
    let mut engine = engine(3);
    assert_eq!(engine.search(&state).unwrap(), Some(Take(1)));

    let scored = engine.score_actions(&state).unwrap();
    let take_one = scored.iter().find(|s| s.action == Take(1)).unwrap();
    let take_two = scored.iter().find(|s| s.action == Take(2)).unwrap();
    assert_eq!(take_one.value, -1);
    assert_eq!(take_two.value, 1);
}

#[test]
fn test_nim_empty_pile_is_terminal() {
    let state = Nim {
        pile: 0,
        to_move: NimPlayer::First,
    };
    assert_eq!(engine(0).search(&state).unwrap(), None);
    assert_eq!(engine(0).evaluate(&state).unwrap(), -1);
}

#[test]
fn test_transition_errors_are_propagated() {
    let mut engine = engine(0);
    assert_eq!(
        engine.search(&Broken),
        Err(GameError::InvalidMove { row: 0, col: 1 })
    );
    assert!(engine.evaluate(&Broken).is_err());
}
