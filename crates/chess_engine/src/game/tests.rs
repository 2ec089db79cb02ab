//! Game state tests
//!
//! Covers the starting state, make/undo bookkeeping, the legality filter and
//! end-of-game detection.

use super::*;

fn sq(name: &str) -> Square {
    Square::from_notation(name).unwrap()
}

fn game_from(text: &str, side_to_move: Color) -> GameState {
    let board: Board = text.parse().expect("test board must parse");
    GameState::from_board(board, side_to_move).expect("test board needs both kings")
}

fn play(game: &mut GameState, moves: &[&str]) {
    for notation in moves {
        game.try_move_notation(notation)
            .unwrap_or_else(|e| panic!("{notation} should be valid: {e}"));
    }
}

// ============================================================================
// Initial State
// ============================================================================

#[test]
fn test_initial_values() {
    let game = GameState::new();
    assert_eq!(game.board.pieces().count(), 32);
    assert_eq!(game.side_to_move, Color::White);
    assert!(game.move_log.is_empty());
    assert_eq!(game.white_king_location, Square::new(7, 4));
    assert_eq!(game.black_king_location, Square::new(0, 4));
    assert!(!game.checkmate);
    assert!(!game.stalemate);
    assert_eq!(game.status(), GameStatus::Playing);
}

#[test]
fn test_starting_position_queries() {
    let mut game = GameState::new();
    assert_eq!(game.valid_moves().len(), 20);
    assert_eq!(game.all_possible_moves().len(), 20);
    assert!(!game.in_check());
    assert!(!game.square_under_attack(Square::new(7, 4)));

    assert_eq!(game.piece_moves(Square::new(6, 4)).len(), 2);
    assert_eq!(game.piece_moves(Square::new(7, 0)).len(), 0);
    assert_eq!(game.piece_moves(Square::new(7, 1)).len(), 2);
    assert_eq!(game.piece_moves(Square::new(7, 2)).len(), 0);
}

// ============================================================================
// Make / Undo
// ============================================================================

#[test]
fn test_make_move_updates_board_and_turn() {
    let mut game = GameState::new();
    let mv = Move::new(Square::new(6, 4), Square::new(4, 4), &game.board).unwrap();
    game.make_move(mv);

    assert!(game.board.is_empty(Square::new(6, 4)));
    assert_eq!(
        game.board.get(Square::new(4, 4)),
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );
    assert_eq!(game.move_log.len(), 1);
    assert_eq!(game.side_to_move, Color::Black);
}

#[test]
fn test_undo_move_restores_previous_state() {
    let mut game = GameState::new();
    let mv = Move::new(Square::new(6, 4), Square::new(4, 4), &game.board).unwrap();
    game.make_move(mv);
    let undone = game.undo_move();

    assert_eq!(undone, Some(mv));
    assert_eq!(game.board, Board::starting());
    assert!(game.move_log.is_empty());
    assert_eq!(game.side_to_move, Color::White);
}

#[test]
fn test_undo_with_empty_log_is_a_no_op() {
    let mut game = GameState::new();
    assert_eq!(game.undo_move(), None);
    assert_eq!(game.board, Board::starting());
    assert_eq!(game.side_to_move, Color::White);
}

#[test]
fn test_undo_restores_captured_piece() {
    let mut game = GameState::new();
    play(&mut game, &["e2e4", "d7d5", "e4d5"]);
    let capture = game.last_move().copied().unwrap();
    assert_eq!(
        capture.piece_captured,
        Some(Piece::new(Color::Black, PieceKind::Pawn))
    );

    game.undo_move();
    assert_eq!(
        game.board.get(sq("d5")),
        Some(Piece::new(Color::Black, PieceKind::Pawn))
    );
    assert_eq!(
        game.board.get(sq("e4")),
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );
}

#[test]
fn test_king_location_tracks_moves_and_undo() {
    let mut game = GameState::new();
    play(&mut game, &["e2e4", "e7e5", "e1e2"]);
    assert_eq!(game.white_king_location, sq("e2"));

    game.undo_move();
    assert_eq!(game.white_king_location, sq("e1"));
    assert_eq!(game.black_king_location, sq("e8"));
}

#[test]
fn test_promotion_makes_queen_and_undo_restores_pawn() {
    let mut game = game_from(
        "-- -- -- -- -- -- -- bK
         wp -- -- -- -- -- -- --
         -- -- -- -- -- -- -- --
         -- -- -- -- -- -- -- --
         -- -- -- -- -- -- -- --
         -- -- -- -- -- -- -- --
         -- -- -- -- -- -- -- --
         -- -- -- -- wK -- -- --",
        Color::White,
    );
    let mv = game.try_move_notation("a7a8").unwrap();
    assert!(mv.is_pawn_promotion);
    assert_eq!(
        game.board.get(sq("a8")),
        Some(Piece::new(Color::White, PieceKind::Queen))
    );

    game.undo_move();
    assert_eq!(
        game.board.get(sq("a7")),
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );
    assert!(game.board.is_empty(sq("a8")));
}

// ============================================================================
// Legality Filter
// ============================================================================

#[test]
fn test_valid_moves_leaves_position_untouched() {
    let mut game = GameState::new();
    play(&mut game, &["e2e4", "e7e5", "g1f3"]);
    let before = game.clone();
    let _ = game.valid_moves();

    assert_eq!(game.board, before.board);
    assert_eq!(game.side_to_move, before.side_to_move);
    assert_eq!(game.move_log, before.move_log);
    assert_eq!(game.white_king_location, before.white_king_location);
    assert_eq!(game.black_king_location, before.black_king_location);
}

#[test]
fn test_pinned_piece_cannot_move() {
    let mut game = game_from(
        "bK -- -- -- bR -- -- --
         -- -- -- -- -- -- -- --
         -- -- -- -- -- -- -- --
         -- -- -- -- -- -- -- --
         -- -- -- -- -- -- -- --
         -- -- -- -- -- -- -- --
         -- -- -- -- wB -- -- --
         -- -- -- -- wK -- -- --",
        Color::White,
    );
    let valid = game.valid_moves();
    assert!(valid.iter().all(|mv| mv.from != sq("e2")));
    assert!(!game.piece_moves(sq("e2")).is_empty());
}

#[test]
fn test_king_cannot_step_into_attack() {
    let mut game = game_from(
        "bK -- -- bR -- -- -- --
         -- -- -- -- -- -- -- --
         -- -- -- -- -- -- -- --
         -- -- -- -- -- -- -- --
         -- -- -- -- -- -- -- --
         -- -- -- -- -- -- -- --
         -- -- -- -- -- -- -- --
         -- -- -- -- wK -- -- --",
        Color::White,
    );
    let destinations: Vec<String> = game
        .valid_moves()
        .iter()
        .map(|mv| mv.to.notation())
        .collect();
    assert!(!destinations.contains(&"d1".to_string()));
    assert!(!destinations.contains(&"d2".to_string()));
    assert!(destinations.contains(&"f1".to_string()));
}

#[test]
fn test_check_must_be_answered() {
    let mut game = GameState::new();
    play(&mut game, &["e2e4", "f7f6", "d1h5"]);
    assert!(game.in_check());

    let valid = game.valid_moves();
    assert_eq!(valid.len(), 1);
    assert_eq!(valid[0].notation(), "g7g6");
}

// ============================================================================
// Game End
// ============================================================================

#[test]
fn test_fools_mate_is_checkmate_for_black() {
    let mut game = GameState::new();
    play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);

    assert!(game.valid_moves().is_empty());
    assert!(game.checkmate);
    assert!(!game.stalemate);
    assert_eq!(
        game.status(),
        GameStatus::Checkmate {
            winner: Color::Black
        }
    );
    assert_eq!(
        game.status().message().as_deref(),
        Some("Black wins by checkmate")
    );
}

#[test]
fn test_stalemate_detected() {
    let mut game = game_from(
        "bK -- -- -- -- -- -- --
         -- -- wQ -- -- -- -- --
         -- -- -- -- -- -- -- --
         -- -- -- -- -- -- -- --
         -- -- -- -- -- -- -- --
         -- -- -- -- -- -- -- --
         -- -- -- -- -- -- -- --
         -- -- -- -- -- -- -- wK",
        Color::Black,
    );
    assert!(game.valid_moves().is_empty());
    assert!(game.stalemate);
    assert!(!game.checkmate);
    assert_eq!(game.status().message().as_deref(), Some("Stalemate"));
}

#[test]
fn test_undo_out_of_checkmate_clears_flags() {
    let mut game = GameState::new();
    play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    game.valid_moves();
    assert!(game.status().is_over());

    game.undo_move();
    assert!(!game.valid_moves().is_empty());
    assert_eq!(game.status(), GameStatus::Playing);
}

// ============================================================================
// Validated Moves
// ============================================================================

#[test]
fn test_try_move_errors() {
    let mut game = GameState::new();
    assert!(matches!(
        game.try_move(sq("e4"), sq("e5")),
        Err(ChessEngineError::NoPieceAtSquare { .. })
    ));
    assert!(matches!(
        game.try_move(sq("e7"), sq("e5")),
        Err(ChessEngineError::WrongPieceColor {
            color: Color::White,
            ..
        })
    ));
    assert!(matches!(
        game.try_move(sq("e2"), sq("e5")),
        Err(ChessEngineError::IllegalMove { .. })
    ));
    assert!(game.move_log.is_empty());
}

#[test]
fn test_from_board_requires_both_kings() {
    let mut board = Board::starting();
    board.set(sq("e8"), None);
    assert_eq!(
        GameState::from_board(board, Color::White).unwrap_err(),
        ChessEngineError::MissingKing {
            color: Color::Black
        }
    );
}

#[test]
fn test_move_number_counts_full_moves() {
    let mut game = GameState::new();
    assert_eq!(game.move_number(), 1);
    play(&mut game, &["e2e4"]);
    assert_eq!(game.move_number(), 1);
    play(&mut game, &["e7e5"]);
    assert_eq!(game.move_number(), 2);
}
