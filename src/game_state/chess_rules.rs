//! Canonical chess-rule constants.
//!
//! Home squares and rows for both colours, and the squares each castling wing
//! needs empty or unattacked.

use crate::game_state::chess_types::{CastlingSide, Color, PieceKind, Square};

/// Back-rank layout from the a-file to the h-file.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[inline]
pub const fn back_row(color: Color) -> u8 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

#[inline]
pub const fn king_home(color: Color) -> Square {
    Square::at(back_row(color), 4)
}

/// Static description of one castling wing for one colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingPath {
    pub side: CastlingSide,
    pub king_from: Square,
    pub king_to: Square,
    pub rook_from: Square,
    pub rook_to: Square,
    /// Squares strictly between king and rook; all must be empty.
    pub between: &'static [u8],
    /// Columns the king occupies on its way, start and destination included;
    /// none may be attacked.
    pub king_transit: &'static [u8],
}

const KING_SIDE_BETWEEN: [u8; 2] = [5, 6];
const KING_SIDE_TRANSIT: [u8; 3] = [4, 5, 6];
const QUEEN_SIDE_BETWEEN: [u8; 3] = [1, 2, 3];
const QUEEN_SIDE_TRANSIT: [u8; 3] = [4, 3, 2];

pub fn castling_path(color: Color, side: CastlingSide) -> CastlingPath {
    let row = back_row(color);
    match side {
        CastlingSide::KingSide => CastlingPath {
            side,
            king_from: Square::at(row, 4),
            king_to: Square::at(row, 6),
            rook_from: Square::at(row, 7),
            rook_to: Square::at(row, 5),
            between: &KING_SIDE_BETWEEN,
            king_transit: &KING_SIDE_TRANSIT,
        },
        CastlingSide::QueenSide => CastlingPath {
            side,
            king_from: Square::at(row, 4),
            king_to: Square::at(row, 2),
            rook_from: Square::at(row, 0),
            rook_to: Square::at(row, 3),
            between: &QUEEN_SIDE_BETWEEN,
            king_transit: &QUEEN_SIDE_TRANSIT,
        },
    }
}

pub const CASTLING_SIDES: [CastlingSide; 2] = [CastlingSide::KingSide, CastlingSide::QueenSide];

/// Which castling right, if any, is tied to a rook starting on `square`.
pub fn castling_right_for_rook_home(square: Square) -> Option<(Color, CastlingSide)> {
    for color in [Color::White, Color::Black] {
        for side in CASTLING_SIDES {
            if castling_path(color, side).rook_from == square {
                return Some((color, side));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_king_side_path_lands_on_g1() {
        let path = castling_path(Color::White, CastlingSide::KingSide);
        assert_eq!(path.king_from, Square::at(7, 4));
        assert_eq!(path.king_to, Square::at(7, 6));
        assert_eq!(path.rook_from, Square::at(7, 7));
        assert_eq!(path.rook_to, Square::at(7, 5));
    }

    #[test]
    fn queen_side_transit_stops_at_c_file() {
        let path = castling_path(Color::Black, CastlingSide::QueenSide);
        assert_eq!(path.between, &[1, 2, 3]);
        assert!(!path.king_transit.contains(&1));
    }

    #[test]
    fn rook_corners_map_to_their_rights() {
        assert_eq!(
            castling_right_for_rook_home(Square::at(0, 0)),
            Some((Color::Black, CastlingSide::QueenSide))
        );
        assert_eq!(
            castling_right_for_rook_home(Square::at(7, 7)),
            Some((Color::White, CastlingSide::KingSide))
        );
        assert_eq!(castling_right_for_rook_home(Square::at(4, 4)), None);
    }
}
