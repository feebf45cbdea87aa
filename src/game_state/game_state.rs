//! Board and game state.
//!
//! `Board` owns the 8x8 grid and nothing else: reads, writes, raw relocation
//! and piece lookup. `GameState` wraps a board with the side to move, the
//! castling flags, the en-passant target and the move clocks. Generators read
//! a `GameState`; only move application updates its non-board fields.

use std::fmt;

use crate::chess_errors::ChessResult;
use crate::game_state::chess_rules::{back_row, BACK_RANK};
use crate::game_state::chess_types::*;
use crate::utils::render_game_state::render_board;

/// 8x8 grid of square contents, row-major, row 0 = black's back rank.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[None; 8]; 8],
        }
    }

    /// Standard starting placement.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            let back = back_row(color) as usize;
            let pawns = match color {
                Color::White => back - 1,
                Color::Black => back + 1,
            };
            for (col, kind) in BACK_RANK.iter().enumerate() {
                board.cells[back][col] = Some(Piece::new(*kind, color));
                board.cells[pawns][col] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn put_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.row() as usize][square.col() as usize] = piece;
    }

    /// Bounds-checked read by raw coordinates.
    pub fn get_piece(&self, row: i32, col: i32) -> ChessResult<Option<Piece>> {
        Ok(self.piece_at(Square::new(row, col)?))
    }

    /// Bounds-checked unconditional write by raw coordinates.
    pub fn set_piece(&mut self, row: i32, col: i32, piece: Option<Piece>) -> ChessResult<()> {
        self.put_piece(Square::new(row, col)?, piece);
        Ok(())
    }

    /// Moves whatever is on `src` to `dst` and empties `src`.
    ///
    /// No rules are applied: no en-passant removal, no rook relocation, no
    /// promotion. Returns the previous content of `dst`.
    pub fn make_move_raw(&mut self, src: Square, dst: Square) -> Option<Piece> {
        let moving = self.piece_at(src);
        let replaced = self.piece_at(dst);
        self.put_piece(src, None);
        self.put_piece(dst, moving);
        replaced
    }

    /// Every square holding exactly `piece`, in row-major order.
    pub fn find_piece(&self, piece: Piece) -> Vec<Square> {
        Square::all()
            .filter(|sq| self.piece_at(*sq) == Some(piece))
            .collect()
    }

    /// Occupied squares with their pieces, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    #[inline]
    pub fn is_empty_square(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board")?;
        f.write_str(&render_board(self))
    }
}

/// Full game state: placement plus turn, castling, en-passant and clocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    /// Square skipped by a double pawn step on the previous move.
    pub en_passant: Option<Square>,
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position, all castling rights, white to move.
    pub fn new_game() -> Self {
        Self {
            board: Board::standard(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::ALL,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Arbitrary placement with no castling rights and no en-passant target.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            side_to_move,
            castling_rights: CastlingRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    pub fn with_castling_rights(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    pub fn with_en_passant(mut self, target: Option<Square>) -> Self {
        self.en_passant = target;
        self
    }
}
