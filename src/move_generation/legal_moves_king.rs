//! King move generation, castling included.
//!
//! Castling is offered only in full mode and only from the home square. The
//! right flag alone is not enough: the rook must still stand in its corner,
//! the squares between must be empty and none of the squares the king stands
//! on or crosses may be attacked.

use log::trace;

use crate::game_state::chess_rules::{castling_path, king_home, CastlingPath, CASTLING_SIDES};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_any_square_attacked;
use crate::move_generation::legal_move_shared::push_steps;
use crate::moves::king_moves::king_targets;

pub fn generate_king_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    attacks_only: bool,
    out: &mut Vec<Square>,
) {
    push_steps(&game_state.board, color, king_targets(from), out);

    if attacks_only || from != king_home(color) {
        return;
    }

    for side in CASTLING_SIDES {
        let path = castling_path(color, side);
        if can_castle(game_state, color, &path) {
            trace!("castling {side:?} available for {color:?}");
            out.push(path.king_to);
        }
    }
}

fn can_castle(game_state: &GameState, color: Color, path: &CastlingPath) -> bool {
    let board = &game_state.board;
    let row = path.king_from.row();

    if !game_state.castling_rights.has(color, path.side) {
        return false;
    }
    if board.piece_at(path.rook_from) != Some(Piece::new(PieceKind::Rook, color)) {
        return false;
    }
    if !path
        .between
        .iter()
        .all(|col| board.is_empty_square(Square::at(row, *col)))
    {
        return false;
    }

    let transit = path.king_transit.iter().map(|col| Square::at(row, *col));
    !is_any_square_attacked(game_state, transit, color.opposite())
}
