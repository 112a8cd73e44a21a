//! Interactive dice chess in the terminal: roll, pick a numbered move,
//! repeat until a king falls.

use std::io::{self, BufRead, Write};

use chess_core::{Color, RulesProfile, board_ascii, san};
use dice_core::DiceGame;

fn color_name(c: Color) -> &'static str {
    match c {
        Color::White => "White",
        Color::Black => "Black",
    }
}

fn dice_names(game: &DiceGame) -> String {
    game.dice()
        .as_slice()
        .iter()
        .map(|k| k.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Prompt until the user enters a number in 1..=n. None on end of input.
fn read_choice(lines: &mut impl Iterator<Item = io::Result<String>>, n: usize) -> Option<usize> {
    loop {
        print!("Choose a move (1-{}): ", n);
        io::stdout().flush().ok();
        let line = lines.next()?.ok()?;
        match line.trim().parse::<usize>() {
            Ok(choice) if (1..=n).contains(&choice) => return Some(choice),
            _ => continue,
        }
    }
}

fn main() {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut game = DiceGame::new();

    println!("Dice chess: three dice name the piece kinds you may move this");
    println!("turn, and you must play as many of them as the position allows.");
    println!("Castling spends the King and the Rook die together. The game");
    println!("ends when a king is captured.");

    loop {
        game.start_turn();
        println!();
        println!("{} rolls: {}", color_name(game.active_color()), dice_names(&game));

        loop {
            let moves = game.legal_moves_now().to_vec();
            if moves.is_empty() {
                if game.end_turn_if_forced() {
                    println!(
                        "{} has no move for the remaining dice; the turn passes.",
                        color_name(game.active_color())
                    );
                }
                break;
            }

            println!();
            print!("{}", board_ascii(game.position()));
            println!("Remaining dice: {}", dice_names(&game));
            println!("Available moves:");
            for (i, &mv) in moves.iter().enumerate() {
                println!(
                    "\t{} {}",
                    i + 1,
                    san(game.position(), mv, RulesProfile::CHECKLESS)
                );
            }

            let choice = match read_choice(&mut lines, moves.len()) {
                Some(c) => c,
                None => return,
            };

            match game.choose_move(moves[choice - 1]) {
                Ok(out) => {
                    if let Some(winner) = out.game_result {
                        println!();
                        print!("{}", board_ascii(game.position()));
                        println!("{} wins.", color_name(winner));
                        return;
                    }
                    if !out.turn_continues {
                        break;
                    }
                }
                Err(e) => println!("{}", e),
            }
        }

        game.next_turn();
    }
}
