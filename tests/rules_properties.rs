use chess_core::move_generation::legal_move_apply::make_move;
use chess_core::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use chess_core::move_generation::legal_move_generator::{all_legal_moves, count_legal_moves, generate_legal_moves};
use chess_core::move_generation::move_generator::generate_pseudo_legal_moves;
use chess_core::move_generation::perft::{perft_legal, PerftCounts};
use chess_core::game_state::undo_state::SimulatedMove;
use chess_core::{Board, CastlingRights, ChessMove, Color, GameState, Piece, PieceKind, Square};

/// Builds a position from eight rows of piece letters, row 0 first.
/// Upper case is white, lower case black, anything else an empty square.
fn position(rows: [&str; 8], side_to_move: Color, castling: CastlingRights) -> GameState {
    let mut board = Board::empty();
    for (row, line) in rows.iter().enumerate() {
        assert_eq!(line.len(), 8, "row {row} must have eight squares");
        for (col, ch) in line.chars().enumerate() {
            let kind = match ch.to_ascii_lowercase() {
                'p' => PieceKind::Pawn,
                'n' => PieceKind::Knight,
                'b' => PieceKind::Bishop,
                'r' => PieceKind::Rook,
                'q' => PieceKind::Queen,
                'k' => PieceKind::King,
                _ => continue,
            };
            let color = if ch.is_ascii_uppercase() { Color::White } else { Color::Black };
            board
                .set_piece(row as i32, col as i32, Some(Piece::new(kind, color)))
                .expect("row and col are in range");
        }
    }
    GameState::from_board(board, side_to_move).with_castling_rights(castling)
}

fn kiwipete() -> GameState {
    position(
        [
            "r...k..r",
            "p.ppqpb.",
            "bn..pnp.",
            "...PN...",
            ".p..P...",
            "..N..Q.p",
            "PPPBBPPP",
            "R...K..R",
        ],
        Color::White,
        CastlingRights::ALL,
    )
}

fn endgame_position() -> GameState {
    position(
        [
            "........",
            "..p.....",
            "...p....",
            "KP.....r",
            ".R...p.k",
            "........",
            "....P.P.",
            "........",
        ],
        Color::White,
        CastlingRights::NONE,
    )
}

#[test]
fn start_position_has_twenty_legal_moves() {
    let game = GameState::new_game();
    assert_eq!(count_legal_moves(&game, Color::White).expect("valid start"), 20);
}

#[test]
fn start_position_perft_depth_three() {
    let counts = perft_legal(&GameState::new_game(), 3).expect("perft should run");
    assert_eq!(
        counts,
        PerftCounts {
            nodes: 8902,
            captures: 34,
            en_passant: 0,
            castles: 0,
            promotions: 0,
            checks: 12,
        }
    );
}

#[test]
fn kiwipete_perft() {
    let game = kiwipete();
    assert_eq!(
        perft_legal(&game, 1).expect("perft should run"),
        PerftCounts {
            nodes: 48,
            captures: 8,
            en_passant: 0,
            castles: 2,
            promotions: 0,
            checks: 0,
        }
    );
    assert_eq!(
        perft_legal(&game, 2).expect("perft should run"),
        PerftCounts {
            nodes: 2039,
            captures: 351,
            en_passant: 1,
            castles: 91,
            promotions: 0,
            checks: 3,
        }
    );
}

#[test]
fn endgame_perft_covers_en_passant_pins() {
    let game = endgame_position();
    assert_eq!(perft_legal(&game, 1).expect("perft should run").nodes, 14);
    assert_eq!(perft_legal(&game, 2).expect("perft should run").nodes, 191);
    assert_eq!(
        perft_legal(&game, 3).expect("perft should run"),
        PerftCounts {
            nodes: 2812,
            captures: 209,
            en_passant: 2,
            castles: 0,
            promotions: 0,
            checks: 267,
        }
    );
}

#[test]
fn simulate_and_restore_round_trips_every_legal_move() {
    for mut game in [GameState::new_game(), kiwipete(), endgame_position()] {
        let before = game;
        let map = all_legal_moves(&game).expect("both kings present");
        for (from, (_, destinations)) in map {
            for to in destinations {
                {
                    let simulated = SimulatedMove::apply(&mut game, from, to);
                    assert_ne!(simulated.board, before.board);
                }
                assert_eq!(game, before, "{from:?} -> {to:?} did not restore");
            }
        }
    }
}

#[test]
fn slider_rays_stop_at_the_first_occupied_square() {
    let game = kiwipete();
    for (from, piece) in game.board.pieces() {
        let directions: &[(i8, i8)] = match piece.kind {
            PieceKind::Rook => &[(-1, 0), (1, 0), (0, -1), (0, 1)],
            PieceKind::Bishop => &[(-1, -1), (-1, 1), (1, -1), (1, 1)],
            PieceKind::Queen => &[(-1, 0), (1, 0), (0, -1), (0, 1), (-1, -1), (-1, 1), (1, -1), (1, 1)],
            _ => continue,
        };
        let moves = generate_pseudo_legal_moves(&game, from, false);
        for (d_row, d_col) in directions {
            let mut current = from;
            let mut past_blocker = false;
            while let Some(next) = current.offset(*d_row, *d_col) {
                let occupant = game.board.piece_at(next);
                if past_blocker {
                    assert!(!moves.contains(&next), "{from:?} reaches past a blocker to {next:?}");
                } else {
                    match occupant {
                        None => assert!(moves.contains(&next)),
                        Some(other) => {
                            assert_eq!(moves.contains(&next), other.color != piece.color);
                            past_blocker = true;
                        }
                    }
                }
                current = next;
            }
        }
    }
}

#[test]
fn king_destinations_are_never_attacked_after_the_move() {
    for game in [GameState::new_game(), kiwipete(), endgame_position()] {
        for color in [Color::White, Color::Black] {
            let king = game
                .board
                .find_piece(Piece::new(PieceKind::King, color))
                .pop()
                .expect("one king per side");
            for to in generate_legal_moves(&game, king).expect("kings present") {
                let mut after = game;
                after.board.make_move_raw(king, to);
                assert!(!is_square_attacked(&after, to, color.opposite()));
            }
        }
    }
}

#[test]
fn white_king_side_castling_opens_once_the_path_is_clear() {
    let mut game = GameState::new_game();
    let e1 = Square::new(7, 4).expect("e1");
    let g1 = Square::new(7, 6).expect("g1");

    assert!(!generate_legal_moves(&game, e1).expect("valid start").contains(&g1));

    game.board.set_piece(7, 5, None).expect("f1");
    game.board.set_piece(7, 6, None).expect("g1");
    assert!(!is_square_attacked(&game, Square::new(7, 5).expect("f1"), Color::Black));
    assert!(!is_square_attacked(&game, g1, Color::Black));
    assert!(generate_legal_moves(&game, e1).expect("kings present").contains(&g1));

    make_move(&mut game, ChessMove::new(e1, g1)).expect("castling is legal");
    assert_eq!(game.board.piece_at(g1), Some(Piece::white(PieceKind::King)));
    assert_eq!(game.board.piece_at(Square::at(7, 5)), Some(Piece::white(PieceKind::Rook)));
}

#[test]
fn find_on_absent_piece_is_empty() {
    let mut game = GameState::new_game();
    game.board.put_piece(Square::at(7, 3), None);
    assert!(game.board.find_piece(Piece::white(PieceKind::Queen)).is_empty());
    assert!(!is_king_in_check(&game, Color::White).expect("one white king"));
}
