//! Crate root module declarations for the chess core.
//!
//! Board state (`game_state`), movement geometry (`moves`), pseudo-legal and
//! legal move generation with attack detection (`move_generation`), and the
//! diagram renderer (`utils`). Every query is a function of a `GameState`
//! value; nothing here performs I/O.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod undo_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod render_game_state;
}

pub use chess_errors::{ChessErrors, ChessResult, ErrorKind};
pub use game_state::chess_types::{CastlingRights, CastlingSide, Color, Piece, PieceKind, Square};
pub use game_state::game_state::{Board, GameState};
pub use moves::move_descriptions::{ChessMove, MoveOutcome};
