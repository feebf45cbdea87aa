//! Core value types shared by the board, the generators and the move
//! application routine.
//!
//! A square's content is `Option<Piece>`: `None` is an empty square, so an
//! empty square never carries a colour.

use crate::chess_errors::{ChessErrors, ChessResult};

/// Side to move, or owner of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Pieces a pawn may promote to, strongest last.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
    ];

    #[inline]
    pub const fn is_promotion_choice(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }
}

/// A coloured piece. Equality is structural on `(kind, color)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    #[inline]
    pub const fn white(kind: PieceKind) -> Self {
        Self::new(kind, Color::White)
    }

    #[inline]
    pub const fn black(kind: PieceKind) -> Self {
        Self::new(kind, Color::Black)
    }

    #[inline]
    pub fn is_enemy_of(self, color: Color) -> bool {
        self.color != color
    }
}

/// A `(row, col)` board coordinate, both in `0..8`.
///
/// Row 0 is black's back rank and row 7 is white's; column 0 is the a-file.
/// A `Square` can only be built from in-range coordinates, so anything that
/// accepts one needs no further bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    pub const BOARD_SIZE: i32 = 8;

    pub fn new(row: i32, col: i32) -> ChessResult<Self> {
        if (0..Self::BOARD_SIZE).contains(&row) && (0..Self::BOARD_SIZE).contains(&col) {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(ChessErrors::OutOfRange { row, col })
        }
    }

    /// Compile-time constructor for rule constants. Panics on bad input, so
    /// only use it with literals.
    pub const fn at(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8, "square literal out of range");
        Self { row, col }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// The square `(row + d_row, col + d_col)`, or `None` past the edge.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..8).flat_map(|row| (0u8..8).map(move |col| Square { row, col }))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastlingSide {
    KingSide,
    QueenSide,
}

/// The four independent castling flags, packed in a bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRights(u8);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights(0);
    pub const ALL: CastlingRights = CastlingRights(0b1111);

    const fn bit(color: Color, side: CastlingSide) -> u8 {
        match (color, side) {
            (Color::White, CastlingSide::KingSide) => 1 << 0,
            (Color::White, CastlingSide::QueenSide) => 1 << 1,
            (Color::Black, CastlingSide::KingSide) => 1 << 2,
            (Color::Black, CastlingSide::QueenSide) => 1 << 3,
        }
    }

    #[inline]
    pub const fn has(self, color: Color, side: CastlingSide) -> bool {
        self.0 & Self::bit(color, side) != 0
    }

    #[inline]
    pub fn grant(&mut self, color: Color, side: CastlingSide) {
        self.0 |= Self::bit(color, side);
    }

    #[inline]
    pub fn revoke(&mut self, color: Color, side: CastlingSide) {
        self.0 &= !Self::bit(color, side);
    }

    #[inline]
    pub fn revoke_all(&mut self, color: Color) {
        self.revoke(color, CastlingSide::KingSide);
        self.revoke(color, CastlingSide::QueenSide);
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_new_rejects_out_of_range_coordinates() {
        assert!(Square::new(0, 0).is_ok());
        assert!(Square::new(7, 7).is_ok());
        assert_eq!(
            Square::new(8, 0),
            Err(ChessErrors::OutOfRange { row: 8, col: 0 })
        );
        assert_eq!(
            Square::new(3, -1),
            Err(ChessErrors::OutOfRange { row: 3, col: -1 })
        );
    }

    #[test]
    fn offset_stops_at_the_edge() {
        let a8 = Square::at(0, 0);
        assert_eq!(a8.offset(-1, 0), None);
        assert_eq!(a8.offset(1, 2), Some(Square::at(1, 2)));
    }

    #[test]
    fn all_squares_are_row_major() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::at(0, 0));
        assert_eq!(squares[9], Square::at(1, 1));
        assert_eq!(squares[63], Square::at(7, 7));
    }

    #[test]
    fn castling_flags_are_independent() {
        let mut rights = CastlingRights::ALL;
        rights.revoke(Color::Black, CastlingSide::QueenSide);
        assert!(rights.has(Color::White, CastlingSide::QueenSide));
        assert!(rights.has(Color::Black, CastlingSide::KingSide));
        assert!(!rights.has(Color::Black, CastlingSide::QueenSide));

        rights.revoke_all(Color::White);
        assert!(!rights.has(Color::White, CastlingSide::KingSide));
        assert!(rights.has(Color::Black, CastlingSide::KingSide));
    }

    #[test]
    fn piece_equality_covers_kind_and_color() {
        assert_eq!(Piece::white(PieceKind::Rook), Piece::white(PieceKind::Rook));
        assert_ne!(Piece::white(PieceKind::Rook), Piece::black(PieceKind::Rook));
        assert_ne!(Piece::white(PieceKind::Rook), Piece::white(PieceKind::Queen));
    }
}
