//! Rook move generation: orthogonal rays cut at the first occupied square.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::rook_moves::{slide, ROOK_DIRECTIONS};

pub fn generate_rook_moves(game_state: &GameState, from: Square, color: Color, out: &mut Vec<Square>) {
    slide(&game_state.board, from, color, &ROOK_DIRECTIONS, out);
}
