use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use chess_core::move_generation::legal_move_apply::make_move;
use chess_core::move_generation::legal_move_checks::is_king_in_check;
use chess_core::move_generation::move_generator::{LegalMoveGenerator, MoveGenerator};
use chess_core::{Color, GameState, Piece, PieceKind};

const PLIES: usize = 80;

#[test]
fn random_games_keep_one_king_per_side_and_alternate_turns() {
    for seed in 0..8u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = GameState::new_game();

        for _ in 0..PLIES {
            let moves = LegalMoveGenerator
                .generate_legal_moves(&game)
                .expect("kings are always present");
            let Some(chess_move) = moves.choose(&mut rng).copied() else {
                break;
            };

            let mover = game.side_to_move;

            make_move(&mut game, chess_move).expect("generated moves are legal");
            assert_eq!(game.side_to_move, mover.opposite());
            assert!(
                !is_king_in_check(&game, mover).expect("one king per side"),
                "seed {seed}: {mover:?} left its king in check"
            );

            for color in [Color::White, Color::Black] {
                assert_eq!(
                    game.board.find_piece(Piece::new(PieceKind::King, color)).len(),
                    1,
                    "seed {seed}"
                );
            }
        }
    }
}
