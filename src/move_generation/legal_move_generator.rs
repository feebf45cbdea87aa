//! Legal move filtering.
//!
//! Each pseudo-legal destination is tried on a private copy of the position
//! through a `SimulatedMove` guard; the candidate is dropped when the mover's
//! king is attacked afterwards. The caller's `GameState` is only ever read,
//! and the copy is restored by the guard after every candidate, error paths
//! included.

use std::collections::BTreeMap;

use log::trace;

use crate::chess_errors::ChessResult;
use crate::game_state::{chess_types::*, game_state::GameState, undo_state::SimulatedMove};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::generate_pseudo_legal_moves;

/// Square-keyed legal destinations together with the piece that moves.
pub type LegalMoveMap = BTreeMap<Square, (Piece, Vec<Square>)>;

/// Legal destinations for the piece on `square`, whichever side it belongs to.
pub fn generate_legal_moves(game_state: &GameState, square: Square) -> ChessResult<Vec<Square>> {
    let Some(piece) = game_state.board.piece_at(square) else {
        return Ok(Vec::new());
    };

    let candidates = generate_pseudo_legal_moves(game_state, square, false);
    let mut scratch = *game_state;
    let mut legal = Vec::with_capacity(candidates.len());

    for to in candidates {
        if leaves_king_in_check(&mut scratch, square, to, piece.color)? {
            trace!("{piece:?} {square:?} -> {to:?} pruned: king left in check");
            continue;
        }
        legal.push(to);
    }

    debug_assert_eq!(scratch, *game_state);
    Ok(legal)
}

fn leaves_king_in_check(scratch: &mut GameState, from: Square, to: Square, color: Color) -> ChessResult<bool> {
    let simulated = SimulatedMove::apply(scratch, from, to);
    is_king_in_check(&simulated, color)
}

/// Legal destinations for every occupied square on the board.
pub fn all_legal_moves(game_state: &GameState) -> ChessResult<LegalMoveMap> {
    collect_moves(game_state, game_state.board.pieces())
}

pub fn legal_moves_for_color(game_state: &GameState, color: Color) -> ChessResult<LegalMoveMap> {
    collect_moves(game_state, game_state.board.pieces_of(color))
}

fn collect_moves(
    game_state: &GameState,
    pieces: impl Iterator<Item = (Square, Piece)>,
) -> ChessResult<LegalMoveMap> {
    let mut map = LegalMoveMap::new();
    for (square, piece) in pieces {
        map.insert(square, (piece, generate_legal_moves(game_state, square)?));
    }
    Ok(map)
}

/// Number of legal moves for `color`, counting each destination once.
pub fn count_legal_moves(game_state: &GameState, color: Color) -> ChessResult<usize> {
    Ok(legal_moves_for_color(game_state, color)?
        .values()
        .map(|(_, destinations)| destinations.len())
        .sum())
}
