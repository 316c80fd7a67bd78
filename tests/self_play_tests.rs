use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use tictactoe_minimax::{Board, Mark, Minimax, MinimaxConfig, Outcome};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Plays a full game, asking `choose` for every move
fn play_out<F>(mut choose: F) -> Board
where
    F: FnMut(&Board) -> tictactoe_minimax::Position,
{
    let mut board = Board::initial_state();
    let mut moves = 0;
    while !board.terminal() {
        let action = choose(&board);
        board = board.result(action).unwrap();
        moves += 1;
        assert!(moves <= 9, "game did not end after nine moves");
    }
    board
}

#[test]
fn test_self_play_always_draws() {
    init_logging();

    for seed in 0..8 {
        let mut engine = Minimax::new(MinimaxConfig::default().with_seed(seed));
        let board = play_out(|b| engine.search(b).unwrap().expect("game in progress"));

        assert_eq!(
            board.outcome(),
            Some(Outcome::Draw),
            "seed {} ended with\n{}",
            seed,
            board
        );
        assert!(board.is_full());
    }
}

#[test]
fn test_self_play_with_separate_engines_draws() {
    init_logging();

    let mut x_engine = Minimax::new(MinimaxConfig::default().with_seed(21));
    let mut o_engine = Minimax::new(MinimaxConfig::default().with_seed(42).with_pruning(false));

    let board = play_out(|b| {
        let engine = match b.player() {
            Mark::X => &mut x_engine,
            Mark::O => &mut o_engine,
        };
        engine.search(b).unwrap().expect("game in progress")
    });
    assert_eq!(board.outcome(), Some(Outcome::Draw));
}

#[test]
fn test_engine_never_loses_to_random_play() {
    init_logging();

    for (seed, engine_mark) in (0..6).zip([Mark::X, Mark::O].into_iter().cycle()) {
        let mut engine = Minimax::new(MinimaxConfig::default().with_seed(seed));
        let mut rng = StdRng::seed_from_u64(1000 + seed);

        let board = play_out(|b| {
            if b.player() == engine_mark {
                engine.search(b).unwrap().expect("game in progress")
            } else {
                *b.empty_cells().choose(&mut rng).unwrap()
            }
        });

        assert_ne!(
            board.outcome(),
            Some(Outcome::Win(engine_mark.opponent())),
            "engine playing {} lost:\n{}",
            engine_mark,
            board
        );
    }
}

#[test]
fn test_engine_exploits_a_blunder() {
    // X opens in the corner and O answers on an edge, which loses
    let board: Board = "XO./.../...".parse().unwrap();
    let mut engine = Minimax::new(MinimaxConfig::default().with_seed(17));

    assert_eq!(engine.evaluate(&board).unwrap(), 1);

    let mut current = board;
    while !current.terminal() {
        let action = engine.search(&current).unwrap().unwrap();
        current = current.result(action).unwrap();
    }
    assert_eq!(current.outcome(), Some(Outcome::Win(Mark::X)));
}
