//! Pseudo-legal dispatch and the move-list generator seam.

use crate::chess_errors::ChessResult;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::move_descriptions::ChessMove;
use crate::moves::pawn_moves::promotion_row;

/// Destinations for the piece on `square`, ignoring self-check.
///
/// With `attacks_only` the result is the set of squares the piece threatens:
/// pawn pushes and castling are left out. An empty square yields nothing.
pub fn generate_pseudo_legal_moves(game_state: &GameState, square: Square, attacks_only: bool) -> Vec<Square> {
    let Some(piece) = game_state.board.piece_at(square) else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(28);
    let color = piece.color;
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, square, color, attacks_only, &mut out),
        PieceKind::Knight => generate_knight_moves(game_state, square, color, &mut out),
        PieceKind::Bishop => generate_bishop_moves(game_state, square, color, &mut out),
        PieceKind::Rook => generate_rook_moves(game_state, square, color, &mut out),
        PieceKind::Queen => generate_queen_moves(game_state, square, color, &mut out),
        PieceKind::King => generate_king_moves(game_state, square, color, attacks_only, &mut out),
    }
    out
}

/// Produces the complete move list for the side to move.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> ChessResult<Vec<ChessMove>>;
}

/// Square-by-square legal generation with each promotion choice expanded
/// into its own move.
pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> ChessResult<Vec<ChessMove>> {
        let side = game_state.side_to_move;
        let mut moves = Vec::with_capacity(64);

        for (from, piece) in game_state.board.pieces_of(side) {
            for to in generate_legal_moves(game_state, from)? {
                if piece.kind == PieceKind::Pawn && to.row() == promotion_row(side) {
                    moves.extend(
                        PieceKind::PROMOTIONS
                            .iter()
                            .map(|kind| ChessMove::with_promotion(from, to, *kind)),
                    );
                } else {
                    moves.push(ChessMove::new(from, to));
                }
            }
        }

        Ok(moves)
    }
}
