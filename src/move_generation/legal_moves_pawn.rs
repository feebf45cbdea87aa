//! Pawn move generation.
//!
//! Forward pushes are quiet moves only and never appear in attack-only
//! output. Diagonals are captures: in full mode they need an enemy piece or
//! the en-passant target, in attack-only mode both diagonals are threatened
//! whatever they hold. Promotion is not decided here.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::holds_enemy_of;
use crate::moves::pawn_moves::{pawn_attack_targets, pawn_direction, pawn_home_row};

pub fn generate_pawn_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    attacks_only: bool,
    out: &mut Vec<Square>,
) {
    let board = &game_state.board;

    if attacks_only {
        out.extend(pawn_attack_targets(color, from));
        return;
    }

    let direction = pawn_direction(color);
    if let Some(one_step) = from.offset(direction, 0) {
        if board.is_empty_square(one_step) {
            out.push(one_step);

            if from.row() == pawn_home_row(color) {
                if let Some(two_step) = one_step.offset(direction, 0) {
                    if board.is_empty_square(two_step) {
                        out.push(two_step);
                    }
                }
            }
        }
    }

    for to in pawn_attack_targets(color, from) {
        if holds_enemy_of(board, to, color) || game_state.en_passant == Some(to) {
            out.push(to);
        }
    }
}
