//! Move application.
//!
//! `make_move` validates a requested move against the legal move list and
//! then updates placement, castling rights, en-passant target, clocks and
//! turn in one step. A rejected move leaves the state untouched.

use log::debug;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::{castling_path, castling_right_for_rook_home, king_home, CASTLING_SIDES};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::generate_legal_moves;
use crate::moves::move_descriptions::{ChessMove, MoveOutcome};
use crate::moves::pawn_moves::promotion_row;

pub fn make_move(game_state: &mut GameState, chess_move: ChessMove) -> ChessResult<MoveOutcome> {
    let (next, outcome) = apply_move(game_state, chess_move)?;
    *game_state = next;
    Ok(outcome)
}

/// Validates `chess_move` and returns the position after it.
pub fn apply_move(game_state: &GameState, chess_move: ChessMove) -> ChessResult<(GameState, MoveOutcome)> {
    if let Err(err) = validate_move(game_state, chess_move) {
        debug!("rejected {chess_move:?}: {err}");
        return Err(err);
    }
    apply_validated_move(game_state, chess_move)
}

fn validate_move(game_state: &GameState, chess_move: ChessMove) -> ChessResult<()> {
    let ChessMove { from, to, promotion } = chess_move;

    if from == to {
        return Err(ChessErrors::SameSourceAndDestination(from));
    }
    let piece = game_state
        .board
        .piece_at(from)
        .ok_or(ChessErrors::EmptySourceSquare(from))?;
    if piece.color != game_state.side_to_move {
        return Err(ChessErrors::WrongSideToMove {
            square: from,
            color: piece.color,
        });
    }
    if !generate_legal_moves(game_state, from)?.contains(&to) {
        return Err(ChessErrors::IllegalMove { from, to });
    }

    let promotes = piece.kind == PieceKind::Pawn && to.row() == promotion_row(piece.color);
    match (promotes, promotion) {
        (true, None) => Err(ChessErrors::MissingPromotion { from, to }),
        (true, Some(kind)) if !kind.is_promotion_choice() => Err(ChessErrors::InvalidPromotionPiece(kind)),
        (false, Some(_)) => Err(ChessErrors::UnexpectedPromotion { from, to }),
        _ => Ok(()),
    }
}

/// Applies a move already known to be legal. Placement first, then the
/// bookkeeping fields, then the turn.
pub(crate) fn apply_validated_move(
    game_state: &GameState,
    chess_move: ChessMove,
) -> ChessResult<(GameState, MoveOutcome)> {
    let ChessMove { from, to, promotion } = chess_move;
    let mut next = *game_state;
    let moved_piece = game_state
        .board
        .piece_at(from)
        .ok_or(ChessErrors::EmptySourceSquare(from))?;
    let color = moved_piece.color;

    let mut captured_piece = next.board.make_move_raw(from, to);

    let mut en_passant = false;
    if moved_piece.kind == PieceKind::Pawn
        && captured_piece.is_none()
        && from.col() != to.col()
        && next.en_passant == Some(to)
    {
        let victim = Square::at(from.row(), to.col());
        captured_piece = next.board.piece_at(victim);
        next.board.put_piece(victim, None);
        en_passant = true;
    }

    let castling = castling_side(moved_piece, from, to);
    if let Some(side) = castling {
        let path = castling_path(color, side);
        next.board.make_move_raw(path.rook_from, path.rook_to);
    }

    let promoted = promotion.filter(|_| moved_piece.kind == PieceKind::Pawn && to.row() == promotion_row(color));
    if let Some(kind) = promoted {
        next.board.put_piece(to, Some(Piece::new(kind, color)));
    }

    update_castling_rights(&mut next, moved_piece, from, to);

    next.en_passant = if moved_piece.kind == PieceKind::Pawn && from.row().abs_diff(to.row()) == 2 {
        Some(Square::at((from.row() + to.row()) / 2, from.col()))
    } else {
        None
    };

    if moved_piece.kind == PieceKind::Pawn || captured_piece.is_some() {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    }
    if color == Color::Black {
        next.fullmove_number = next.fullmove_number.saturating_add(1);
    }
    next.side_to_move = color.opposite();

    let gives_check = is_king_in_check(&next, next.side_to_move)?;

    let outcome = MoveOutcome {
        chess_move,
        moved_piece,
        captured_piece,
        castling,
        en_passant,
        promotion: promoted,
        gives_check,
    };
    debug!("applied {outcome:?}");
    Ok((next, outcome))
}

fn castling_side(moved_piece: Piece, from: Square, to: Square) -> Option<CastlingSide> {
    if moved_piece.kind != PieceKind::King || from != king_home(moved_piece.color) {
        return None;
    }
    CASTLING_SIDES
        .into_iter()
        .find(|side| castling_path(moved_piece.color, *side).king_to == to)
}

fn update_castling_rights(game_state: &mut GameState, moved_piece: Piece, from: Square, to: Square) {
    let rights = &mut game_state.castling_rights;
    if moved_piece.kind == PieceKind::King {
        rights.revoke_all(moved_piece.color);
    }
    // A rook leaving its corner, or anything landing on a corner, ends that
    // wing's right.
    for square in [from, to] {
        if let Some((color, side)) = castling_right_for_rook_home(square) {
            rights.revoke(color, side);
        }
    }
}
