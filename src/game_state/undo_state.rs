//! Scoped raw-move simulation.
//!
//! `SimulatedMove` applies a raw move to a `GameState` and restores the
//! touched squares when dropped, so a hypothetical position can be probed
//! with `?` and early returns without leaking a modified board.

use std::ops::Deref;

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

/// Saved contents of every square a simulated move touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub from: Square,
    pub to: Square,
    pub moved_piece: Option<Piece>,
    pub replaced_piece: Option<Piece>,
    /// Pawn lifted by an en-passant capture, with the square it stood on.
    pub en_passant_victim: Option<(Square, Piece)>,
}

/// Guard over a raw move. Dereferences to the position after the move.
pub struct SimulatedMove<'a> {
    state: &'a mut GameState,
    undo: UndoState,
}

impl<'a> SimulatedMove<'a> {
    pub fn apply(state: &'a mut GameState, from: Square, to: Square) -> Self {
        let moved_piece = state.board.piece_at(from);
        let replaced_piece = state.board.piece_at(to);
        let en_passant_victim = en_passant_victim(state, from, to, moved_piece, replaced_piece);

        if let Some((square, _)) = en_passant_victim {
            state.board.put_piece(square, None);
        }
        state.board.make_move_raw(from, to);

        Self {
            state,
            undo: UndoState {
                from,
                to,
                moved_piece,
                replaced_piece,
                en_passant_victim,
            },
        }
    }

    pub fn undo_state(&self) -> &UndoState {
        &self.undo
    }
}

impl Deref for SimulatedMove<'_> {
    type Target = GameState;

    fn deref(&self) -> &GameState {
        &*self.state
    }
}

impl Drop for SimulatedMove<'_> {
    fn drop(&mut self) {
        let board = &mut self.state.board;
        board.put_piece(self.undo.to, self.undo.replaced_piece);
        board.put_piece(self.undo.from, self.undo.moved_piece);
        if let Some((square, piece)) = self.undo.en_passant_victim {
            board.put_piece(square, Some(piece));
        }
    }
}

fn en_passant_victim(
    state: &GameState,
    from: Square,
    to: Square,
    moved_piece: Option<Piece>,
    replaced_piece: Option<Piece>,
) -> Option<(Square, Piece)> {
    let mover = moved_piece.filter(|piece| piece.kind == PieceKind::Pawn)?;
    if state.en_passant != Some(to) || replaced_piece.is_some() || from.col() == to.col() {
        return None;
    }
    let victim_square = Square::at(from.row(), to.col());
    state
        .board
        .piece_at(victim_square)
        .filter(|piece| piece.kind == PieceKind::Pawn && piece.is_enemy_of(mover.color))
        .map(|piece| (victim_square, piece))
}
