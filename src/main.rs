use anyhow::Result;
use rand::Rng;

use std::io::{stdin, stdout, Stdin, Write};

use four_in_row_ai::board::{Board, Side};
use four_in_row_ai::evaluator::{evaluate, Outcome};
use four_in_row_ai::selector::{select_move, Difficulty};
use four_in_row_ai::WIDTH;

mod display;

fn main() -> Result<()> {
    let mut board = Board::new();
    let stdin = stdin();

    println!("Welcome to Four in a Row\n");

    loop {
        // choose the difficulty for this game
        let difficulty = loop {
            print!("Enter difficulty: 1 -> Super Easy, 2 -> Easy, 3 -> Medium, 4 -> Hard, 5 -> Impossible: ");
            stdout().flush().expect("failed to flush to stdout!");

            let mut buffer = String::new();
            stdin.read_line(&mut buffer)?;

            let tier = match buffer.trim().parse::<u8>() {
                Err(_) => {
                    println!("Invalid number: {}", buffer.trim());
                    continue;
                }
                Ok(tier) => tier,
            };
            match Difficulty::from_tier(tier) {
                Err(err) => println!("{}", err),
                Ok(difficulty) => break difficulty,
            }
        };

        // hand out the first move at random
        let mut player_turn = rand::thread_rng().gen_bool(0.5);

        // game loop
        let outcome = loop {
            display::draw(&board).expect("failed to draw board!");

            match evaluate(&board) {
                Outcome::Continue => {}
                outcome => break outcome,
            }

            if player_turn {
                player_move(&stdin, &mut board)?;
            } else {
                println!("AI is thinking...");
                stdout().flush().expect("failed to flush to stdout!");

                let ai_move = select_move(&mut board, difficulty)?;
                board.drop_piece(ai_move.column, Side::Computer)?;
                println!("AI drops into column {}", ai_move.column + 1);
            }
            player_turn = !player_turn;
        };

        match outcome {
            Outcome::Win(Side::Player) => println!("You Win!"),
            Outcome::Win(Side::Computer) => println!("You Lost!"),
            _ => println!("It's A Draw"),
        }

        // offer a rematch
        let mut play_again = false;
        loop {
            print!("Play again? y/n: ");
            stdout().flush().expect("failed to flush to stdout!");

            let mut buffer = String::new();
            stdin.read_line(&mut buffer)?;

            match buffer.to_lowercase().chars().next() {
                Some(_letter @ 'y') => {
                    play_again = true;
                    break;
                }
                Some(_letter @ 'n') => break,
                _ => println!("Unknown answer given"),
            }
        }
        if !play_again {
            break;
        }
        board.reset();
    }
    Ok(())
}

// read columns from the human until one of them is a legal drop
fn player_move(stdin: &Stdin, board: &mut Board) -> Result<()> {
    loop {
        print!("Move input > ");
        stdout().flush().expect("failed to flush to stdout!");

        let mut buffer = String::new();
        stdin.read_line(&mut buffer)?;

        let column = match buffer.trim().parse::<usize>() {
            Err(_) => {
                println!("Invalid number: {}", buffer.trim());
                continue;
            }
            Ok(column) => column,
        };
        if column < 1 || column > WIDTH {
            println!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column, WIDTH
            );
            continue;
        }

        if board.drop_piece(column - 1, Side::Player).is_err() {
            println!("Invalid move, column {} full", column);
            continue;
        }
        return Ok(());
    }
}
