//! Tic-Tac-Toe against the minimax engine in the console
//!
//! Run with `cargo run --example console`, optionally followed by a seed
//! to make the computer's choices repeatable.

use std::io::{self, BufRead, Write};

use tictactoe_minimax::{Board, Mark, Minimax, MinimaxConfig, Outcome, Position};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let mut config = MinimaxConfig::default();
    if let Some(seed) = std::env::args().nth(1) {
        config = config.with_seed(seed.parse()?);
    }
    let mut engine = Minimax::new(config);

    println!("\nTic-Tac-Toe - Human vs A.I.\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Who starts the game? Human (h) or Computer (c) ?");
    let human = loop {
        let answer = prompt(&mut lines, "Please enter \"h\" or \"c\": ")?;
        match answer.as_str() {
            "h" => break Mark::X,
            "c" => break Mark::O,
            _ => continue,
        }
    };
    let computer = human.opponent();

    let mut board = Board::initial_state();
    let mut turn = 1;

    while !board.terminal() {
        println!("\n-------- Turn {} --------", turn);
        println!("Human: {} --- Computer: {}", human, computer);
        println!("\n{}", board);

        let player = board.player();
        let mut legal: Vec<String> = board.actions().iter().map(Position::label).collect();
        legal.sort();
        println!("Player {}, please choose a cell among: ", player);
        println!("{}", legal.join(", "));

        let action = if player == human {
            let action = loop {
                let input = prompt(&mut lines, "Please enter a valid cell: ")?;
                match input.parse::<Position>() {
                    Ok(position) if board.get(position).is_none() => break position,
                    _ => continue,
                }
            };
            println!("Human choose {}", action);
            action
        } else {
            let Some(action) = engine.search(&board)? else {
                break;
            };
            println!("Computer choose {}", action);
            log::debug!("{}", engine.get_statistics().summary());
            action
        };

        board = board.result(action)?;
        turn += 1;
    }

    println!("\n------ Game Over -------");
    println!("Human: {} --- Computer: {}", human, computer);
    println!("\n{}", board);
    match board.outcome() {
        Some(Outcome::Win(mark)) => println!("The winner is {}\n", mark),
        _ => println!("Tie\n"),
    }

    Ok(())
}

/// Prints `message` and reads one trimmed line, failing on end of input
fn prompt<B: BufRead>(lines: &mut io::Lines<B>, message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(line?.trim().to_lowercase()),
        None => Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input closed before the game finished",
        )),
    }
}
