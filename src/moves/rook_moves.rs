//! Orthogonal ray geometry and the shared ray walker used by every slider.

use crate::game_state::chess_types::{Color, Square};
use crate::game_state::game_state::Board;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Walks from `from` along `(d_row, d_col)` until the edge or the first
/// occupied square. That square is included only when it holds a piece not
/// owned by `color`.
pub fn trace_ray(
    board: &Board,
    from: Square,
    color: Color,
    (d_row, d_col): (i8, i8),
    out: &mut Vec<Square>,
) {
    let mut current = from;
    while let Some(next) = current.offset(d_row, d_col) {
        match board.piece_at(next) {
            None => out.push(next),
            Some(blocker) => {
                if blocker.is_enemy_of(color) {
                    out.push(next);
                }
                break;
            }
        }
        current = next;
    }
}

pub fn slide(board: &Board, from: Square, color: Color, directions: &[(i8, i8)], out: &mut Vec<Square>) {
    for direction in directions {
        trace_ray(board, from, color, *direction, out);
    }
}
