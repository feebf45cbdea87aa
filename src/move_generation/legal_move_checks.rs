//! Attack and check detection.
//!
//! Attack sets are built from attack-only pseudo-legal generation of every
//! piece of the attacking colour and recomputed on each query. Nothing is
//! cached, so every call reflects the board as it is right now.

use std::collections::BTreeSet;

use log::warn;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::move_generator::generate_pseudo_legal_moves;

/// Every square threatened by at least one `attacker` piece.
pub fn squares_attacked_by(game_state: &GameState, attacker: Color) -> BTreeSet<Square> {
    let mut attacked = BTreeSet::new();
    for (from, _) in game_state.board.pieces_of(attacker) {
        attacked.extend(generate_pseudo_legal_moves(game_state, from, true));
    }
    attacked
}

pub fn is_square_attacked(game_state: &GameState, square: Square, attacker: Color) -> bool {
    game_state
        .board
        .pieces_of(attacker)
        .any(|(from, _)| generate_pseudo_legal_moves(game_state, from, true).contains(&square))
}

pub fn are_all_squares_attacked(
    game_state: &GameState,
    squares: impl IntoIterator<Item = Square>,
    attacker: Color,
) -> bool {
    let attacked = squares_attacked_by(game_state, attacker);
    squares.into_iter().all(|square| attacked.contains(&square))
}

pub fn is_any_square_attacked(
    game_state: &GameState,
    squares: impl IntoIterator<Item = Square>,
    attacker: Color,
) -> bool {
    let attacked = squares_attacked_by(game_state, attacker);
    squares.into_iter().any(|square| attacked.contains(&square))
}

/// The square of `color`'s king. Anything other than exactly one king is a
/// corrupted position.
pub fn king_square(game_state: &GameState, color: Color) -> ChessResult<Square> {
    let kings = game_state
        .board
        .find_piece(Piece::new(PieceKind::King, color));
    match kings.as_slice() {
        [king] => Ok(*king),
        _ => {
            warn!("{color:?} has {} kings on the board", kings.len());
            Err(ChessErrors::KingCount {
                color,
                found: kings.len(),
            })
        }
    }
}

pub fn is_king_in_check(game_state: &GameState, color: Color) -> ChessResult<bool> {
    let king = king_square(game_state, color)?;
    Ok(is_square_attacked(game_state, king, color.opposite()))
}
