//! Move values exchanged between callers and the move-application routine.

use crate::game_state::chess_types::{CastlingSide, Piece, PieceKind, Square};

/// A requested move: source, destination and an optional promotion choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl ChessMove {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(from: Square, to: Square, promotion: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
        }
    }
}

/// What a successfully applied move did to the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub chess_move: ChessMove,
    pub moved_piece: Piece,
    pub captured_piece: Option<Piece>,
    pub castling: Option<CastlingSide>,
    pub en_passant: bool,
    pub promotion: Option<PieceKind>,
    /// The side now on move is in check.
    pub gives_check: bool,
}
