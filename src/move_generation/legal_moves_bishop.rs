use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::rook_moves::slide;

pub fn generate_bishop_moves(game_state: &GameState, from: Square, color: Color, out: &mut Vec<Square>) {
    slide(&game_state.board, from, color, &BISHOP_DIRECTIONS, out);
}
