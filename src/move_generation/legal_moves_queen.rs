use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::queen_moves::QUEEN_DIRECTIONS;
use crate::moves::rook_moves::slide;

pub fn generate_queen_moves(game_state: &GameState, from: Square, color: Color, out: &mut Vec<Square>) {
    slide(&game_state.board, from, color, &QUEEN_DIRECTIONS, out);
}
