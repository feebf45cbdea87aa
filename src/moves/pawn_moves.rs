use crate::game_state::chess_types::{Color, Square};

/// Row step of a forward pawn move: white runs toward row 0.
#[inline]
pub const fn pawn_direction(color: Color) -> i8 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}

#[inline]
pub const fn pawn_home_row(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

#[inline]
pub const fn promotion_row(color: Color) -> u8 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}

/// The forward diagonals of a pawn on `square`, whatever they hold.
#[inline]
pub fn pawn_attack_targets(color: Color, square: Square) -> impl Iterator<Item = Square> {
    let d_row = pawn_direction(color);
    [-1i8, 1]
        .into_iter()
        .filter_map(move |d_col| square.offset(d_row, d_col))
}
