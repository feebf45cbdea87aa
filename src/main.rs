//! Demo harness: plays random legal moves from the starting position and
//! prints the board after each one.

use clap::Parser;
use log::info;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use chess_core::move_generation::legal_move_apply::make_move;
use chess_core::move_generation::legal_move_checks::is_king_in_check;
use chess_core::move_generation::move_generator::{LegalMoveGenerator, MoveGenerator};
use chess_core::utils::render_game_state::render_game_state;
use chess_core::{ChessResult, GameState};

#[derive(Debug, Parser)]
#[command(about = "Play random legal chess moves and print the board")]
struct Args {
    /// Number of half-moves to play.
    #[arg(long, default_value_t = 12)]
    plies: u32,

    /// Seed for the move picker; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Print only the final position.
    #[arg(long)]
    quiet: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> ChessResult<()> {
    let seed = args.seed.unwrap_or_else(rand::random);
    info!("seed {seed}");
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = GameState::new_game();

    println!("{}", render_game_state(&game));

    for ply in 1..=args.plies {
        let moves = LegalMoveGenerator.generate_legal_moves(&game)?;
        let Some(chess_move) = moves.choose(&mut rng).copied() else {
            let in_check = is_king_in_check(&game, game.side_to_move)?;
            println!(
                "{:?} has no legal move (in check: {in_check})",
                game.side_to_move
            );
            break;
        };

        let outcome = make_move(&mut game, chess_move)?;
        if !args.quiet {
            println!(
                "\n{ply}. {:?} {:?} -> {:?}{}",
                outcome.moved_piece.color,
                chess_move.from,
                chess_move.to,
                if outcome.gives_check { " check" } else { "" }
            );
            println!("{}", render_game_state(&game));
        }
    }

    if args.quiet {
        println!("{}", render_game_state(&game));
    }
    Ok(())
}
