use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_steps;
use crate::moves::knight_moves::knight_targets;

pub fn generate_knight_moves(game_state: &GameState, from: Square, color: Color, out: &mut Vec<Square>) {
    push_steps(&game_state.board, color, knight_targets(from), out);
}
