//! Leaf-node enumeration for validating the generator against published
//! reference counts.

use std::sync::Arc;
use std::thread;

use crate::chess_errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_validated_move;
use crate::move_generation::move_generator::{LegalMoveGenerator, MoveGenerator};
use crate::moves::move_descriptions::MoveOutcome;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
    }

    fn record_leaf(&mut self, outcome: &MoveOutcome) {
        self.nodes += 1;
        if outcome.captured_piece.is_some() {
            self.captures += 1;
        }
        if outcome.en_passant {
            self.en_passant += 1;
        }
        if outcome.castling.is_some() {
            self.castles += 1;
        }
        if outcome.promotion.is_some() {
            self.promotions += 1;
        }
        if outcome.gives_check {
            self.checks += 1;
        }
    }
}

pub fn perft_legal(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    perft(&LegalMoveGenerator, game_state, depth)
}

pub fn perft<G: MoveGenerator + ?Sized>(generator: &G, game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    let mut total = PerftCounts::default();
    if depth == 0 {
        total.nodes = 1;
        return Ok(total);
    }
    perft_recurse(generator, game_state, depth, &mut total)?;
    Ok(total)
}

/// Splits the root moves across one thread each.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    game_state: &GameState,
    depth: u8,
) -> ChessResult<PerftCounts> {
    if depth <= 1 {
        return perft(generator.as_ref(), game_state, depth);
    }

    let root_moves = generator.generate_legal_moves(game_state)?;
    let mut handles = Vec::with_capacity(root_moves.len());

    for mv in root_moves {
        let (child, _) = apply_validated_move(game_state, mv)?;
        let generator_ref = Arc::clone(&generator);
        handles.push(thread::spawn(move || {
            let mut local = PerftCounts::default();
            let result = perft_recurse(generator_ref.as_ref(), &child, depth - 1, &mut local);
            result.map(|_| local)
        }));
    }

    let mut total = PerftCounts::default();
    for handle in handles {
        match handle.join() {
            Ok(local) => total.merge(local?),
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }

    Ok(total)
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
    counts: &mut PerftCounts,
) -> ChessResult<()> {
    for mv in generator.generate_legal_moves(game_state)? {
        let (next, outcome) = apply_validated_move(game_state, mv)?;
        if depth == 1 {
            counts.record_leaf(&outcome);
        } else {
            perft_recurse(generator, &next, depth - 1, counts)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_zero_counts_single_node() {
        let game = GameState::new_game();
        let counts = perft_legal(&game, 0).expect("perft should run");
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn start_position_depth_two() {
        let game = GameState::new_game();
        let counts = perft_legal(&game, 2).expect("perft should run");
        assert_eq!(counts.nodes, 400);
        assert_eq!(counts.captures, 0);
        assert_eq!(counts.checks, 0);
    }

    #[test]
    fn threaded_perft_matches_single_threaded() {
        let game = GameState::new_game();
        let single = perft_legal(&game, 2).expect("perft should run");
        let threaded =
            perft_multi_threaded(Arc::new(LegalMoveGenerator), &game, 2).expect("perft should run");
        assert_eq!(single, threaded);
    }
}
