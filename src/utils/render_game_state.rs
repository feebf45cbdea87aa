//! Terminal-oriented Unicode board renderer.
//!
//! Fixed layout: a top border, eight ranks labelled 8 down to 1 with the
//! glyphs separated by spaces, a bottom border and the file letters. The
//! output is for display only and is never parsed back.

use crate::game_state::{chess_types::*, game_state::Board, game_state::GameState};

const BORDER_WIDTH: usize = 8 * 2 + 1;

/// Render the board to a Unicode string for terminal output.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  ┌");
    out.push_str(&"─".repeat(BORDER_WIDTH));
    out.push_str("┐\n");

    for row in 0..8u8 {
        out.push(char::from(b'8' - row));
        out.push_str(" │ ");
        for col in 0..8u8 {
            out.push(glyph(board.piece_at(Square::at(row, col))));
            out.push(' ');
        }
        out.push_str("│\n");
    }

    out.push_str("  └");
    out.push_str(&"─".repeat(BORDER_WIDTH));
    out.push_str("┘\n   ");

    for col in 0..8u8 {
        out.push(' ');
        out.push(char::from(b'a' + col));
    }

    out
}

pub fn render_game_state(game_state: &GameState) -> String {
    render_board(&game_state.board)
}

// Filled glyphs for white read better on dark terminals.
fn glyph(piece: Option<Piece>) -> char {
    let Some(piece) = piece else {
        return '.';
    };
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♟',
        (Color::White, PieceKind::Knight) => '♞',
        (Color::White, PieceKind::Bishop) => '♝',
        (Color::White, PieceKind::Rook) => '♜',
        (Color::White, PieceKind::Queen) => '♛',
        (Color::White, PieceKind::King) => '♚',
        (Color::Black, PieceKind::Pawn) => '♙',
        (Color::Black, PieceKind::Knight) => '♘',
        (Color::Black, PieceKind::Bishop) => '♗',
        (Color::Black, PieceKind::Rook) => '♖',
        (Color::Black, PieceKind::Queen) => '♕',
        (Color::Black, PieceKind::King) => '♔',
    }
}
