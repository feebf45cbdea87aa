//! Errors used throughout the chess core.
//!
//! `ChessErrors` is the single error type returned by board access, move
//! generation and move application. Every variant falls into one of three
//! categories exposed through [`ChessErrors::kind`]:
//! - out-of-range: a coordinate outside the 8x8 extent;
//! - invalid-argument: a request the rules reject (empty source square,
//!   wrong side to move, illegal destination, bad promotion choice);
//! - internal-consistency: the position itself is corrupted, for example a
//!   side with zero or several kings.
//!
//! None of these are transient. Operations that fail leave the game state
//! exactly as it was, so callers can keep using it after matching the error.

use thiserror::Error;

use crate::game_state::chess_types::{Color, PieceKind, Square};

/// Coarse classification of [`ChessErrors`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    OutOfRange,
    InvalidArgument,
    InternalConsistency,
}

/// Unified error type for the chess core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// A row or column outside `0..8` was supplied.
    #[error("invalid row {row} or col {col} specified (board size: 8x8)")]
    OutOfRange { row: i32, col: i32 },

    #[error("no piece on source square {0:?}")]
    EmptySourceSquare(Square),

    /// The piece on the source square belongs to the side not on move.
    #[error("piece on {square:?} is {color:?} but it is not {color:?}'s turn")]
    WrongSideToMove { square: Square, color: Color },

    #[error("source and destination are both {0:?}")]
    SameSourceAndDestination(Square),

    #[error("illegal move from {from:?} to {to:?}")]
    IllegalMove { from: Square, to: Square },

    /// A pawn reached its last row and no promotion piece was selected.
    #[error("move from {from:?} to {to:?} requires a promotion piece")]
    MissingPromotion { from: Square, to: Square },

    #[error("move from {from:?} to {to:?} is not a promotion")]
    UnexpectedPromotion { from: Square, to: Square },

    /// Only knight, bishop, rook and queen are valid promotion choices.
    #[error("cannot promote to {0:?}")]
    InvalidPromotionPiece(PieceKind),

    /// Check status was requested for a side that does not have exactly one
    /// king on the board.
    #[error("expected exactly one {color:?} king, found {found}")]
    KingCount { color: Color, found: usize },
}

impl ChessErrors {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ChessErrors::OutOfRange { .. } => ErrorKind::OutOfRange,
            ChessErrors::EmptySourceSquare(_)
            | ChessErrors::WrongSideToMove { .. }
            | ChessErrors::SameSourceAndDestination(_)
            | ChessErrors::IllegalMove { .. }
            | ChessErrors::MissingPromotion { .. }
            | ChessErrors::UnexpectedPromotion { .. }
            | ChessErrors::InvalidPromotionPiece(_) => ErrorKind::InvalidArgument,
            ChessErrors::KingCount { .. } => ErrorKind::InternalConsistency,
        }
    }
}

pub type ChessResult<T> = Result<T, ChessErrors>;
