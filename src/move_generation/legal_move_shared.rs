use crate::game_state::{chess_types::*, game_state::Board};

/// Empty, or held by a piece `color` may capture.
#[inline]
pub fn is_open_for(board: &Board, square: Square, color: Color) -> bool {
    board
        .piece_at(square)
        .map_or(true, |occupant| occupant.is_enemy_of(color))
}

#[inline]
pub fn holds_enemy_of(board: &Board, square: Square, color: Color) -> bool {
    board
        .piece_at(square)
        .is_some_and(|occupant| occupant.is_enemy_of(color))
}

/// Pushes every square from `targets` that `color` may step onto.
#[inline]
pub fn push_steps(
    board: &Board,
    color: Color,
    targets: impl Iterator<Item = Square>,
    out: &mut Vec<Square>,
) {
    out.extend(targets.filter(|to| is_open_for(board, *to, color)));
}
