use crate::game_state::chess_types::Square;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[inline]
pub fn king_targets(square: Square) -> impl Iterator<Item = Square> {
    KING_OFFSETS
        .into_iter()
        .filter_map(move |(d_row, d_col)| square.offset(d_row, d_col))
}

#[cfg(test)]
mod tests {
    use super::king_targets;
    use crate::game_state::chess_types::Square;

    #[test]
    fn king_targets_from_centre_and_edge() {
        assert_eq!(king_targets(Square::at(4, 4)).count(), 8);
        assert_eq!(king_targets(Square::at(7, 4)).count(), 5);
        assert_eq!(king_targets(Square::at(0, 0)).count(), 3);
    }
}
