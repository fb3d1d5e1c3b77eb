// Cenários de ponta a ponta: regras, geração de lances, busca e sessão

use damas::ai::{AiPlayer, Difficulty};
use damas::engine::{apply_move, get_game_status, is_valid_move};
use damas::moves::{generate_capture_moves, legal_moves};
use damas::search::{AmpEvaluator, Evaluator, MinimaxSearcher, PieceCountEvaluator, WIN_SCORE};
use damas::session::{GameMode, GameSession};
use damas::*;

fn pos(row: i32, col: i32) -> Position {
    Position::new(row, col).unwrap()
}

#[test]
fn initial_layout() {
    let board = BoardState::initial();
    assert_eq!(board.len(), 24);

    for color in [Color::Red, Color::Black] {
        assert_eq!(board.count_pieces(color), 12);
        assert_eq!(board.count_kings(color), 0);
    }
    for piece in board.all_pieces() {
        assert!(piece.position.is_dark_square());
        assert!(!piece.is_king());
        let rows = match piece.color {
            Color::Black => 0..=2,
            Color::Red => 5..=7,
        };
        assert!(rows.contains(&piece.position.row()), "{}", piece);
    }
}

#[test]
fn single_capture_on_empty_board() {
    let red = Piece::man(Color::Red, pos(3, 4));
    let board = BoardState::from_pieces([red, Piece::man(Color::Black, pos(4, 5))]).unwrap();

    let captures = generate_capture_moves(&red, &board);
    assert_eq!(captures, vec![Move::capture(pos(3, 4), pos(5, 6), vec![pos(4, 5)])]);

    let after = apply_move(&board, &captures[0]).unwrap();
    assert_eq!(after.count_pieces(Color::Black), 0);
    assert_eq!(get_game_status(&after, Color::Black), GameStatus::RedWins);
}

#[test]
fn side_without_pieces_loses() {
    let board = BoardState::from_pieces([Piece::man(Color::Red, pos(2, 3))]).unwrap();
    assert_eq!(get_game_status(&board, Color::Black), GameStatus::RedWins);

    let board = BoardState::from_pieces([Piece::king(Color::Black, pos(4, 3))]).unwrap();
    assert_eq!(get_game_status(&board, Color::Red), GameStatus::BlackWins);
}

#[test]
fn material_search_never_skips_a_capture() {
    let searcher = MinimaxSearcher::new(Box::new(PieceCountEvaluator), 2);
    let board = BoardState::from_pieces([
        Piece::man(Color::Red, pos(5, 0)),
        Piece::man(Color::Red, pos(5, 4)),
        Piece::man(Color::Black, pos(4, 5)),
        Piece::man(Color::Black, pos(1, 0)),
        Piece::man(Color::Black, pos(1, 6)),
    ])
    .unwrap();

    assert!(legal_moves(Color::Red, &board).iter().all(Move::is_capture));
    let best = searcher.find_best_move(&board, Color::Red).unwrap().unwrap();
    assert!(best.is_capture());
    assert_eq!(best.captured, vec![pos(4, 5)]);
}

#[test]
fn immediate_win_outscores_heuristics() {
    let board = BoardState::from_pieces([
        Piece::man(Color::Red, pos(2, 3)),
        Piece::man(Color::Red, pos(7, 0)),
        Piece::man(Color::Black, pos(1, 2)),
    ])
    .unwrap();

    for depth in [2u8, 3, 4] {
        let searcher = MinimaxSearcher::new(Box::new(AmpEvaluator), depth);
        let result = searcher.search(&board, Color::Red).unwrap();
        assert_eq!(result.best_move, Some(Move::capture(pos(2, 3), pos(0, 1), vec![pos(1, 2)])));
        assert!(result.score >= WIN_SCORE, "depth {} score {}", depth, result.score);
        assert!(result.score > AmpEvaluator.evaluate(&board, Color::Red));
    }
}

#[test]
fn double_jump_is_a_single_move() {
    let board = BoardState::from_pieces([
        Piece::man(Color::Red, pos(5, 0)),
        Piece::man(Color::Black, pos(4, 1)),
        Piece::man(Color::Black, pos(2, 3)),
        Piece::man(Color::Black, pos(0, 7)),
    ])
    .unwrap();

    let moves = legal_moves(Color::Red, &board);
    assert_eq!(moves, vec![Move::capture(pos(5, 0), pos(1, 4), vec![pos(4, 1), pos(2, 3)])]);
    assert!(is_valid_move(&board, &moves[0], Color::Red));
    // ordem das capturas não conta para a igualdade
    assert!(is_valid_move(
        &board,
        &Move::capture(pos(5, 0), pos(1, 4), vec![pos(2, 3), pos(4, 1)]),
        Color::Red
    ));

    let after = apply_move(&board, &moves[0]).unwrap();
    assert_eq!(after.len(), 2);
    let piece = after.piece_at(pos(1, 4)).unwrap();
    assert!(!piece.is_king());
}

#[test]
fn ai_players_finish_or_keep_playing_legally() {
    let mut red = AiPlayer::with_seed(Color::Red, Box::new(AmpEvaluator), Difficulty::Easy, 11);
    let mut black = AiPlayer::with_seed(Color::Black, Box::new(PieceCountEvaluator), Difficulty::Easy, 12);

    let mut board = BoardState::initial();
    let mut to_move = Color::Red;
    for _ in 0..120 {
        let ai = match to_move {
            Color::Red => &mut red,
            Color::Black => &mut black,
        };
        let Some(mv) = ai.choose_move(&board).unwrap() else {
            assert!(get_game_status(&board, to_move).is_over());
            break;
        };
        assert!(is_valid_move(&board, &mv, to_move));
        board = apply_move(&board, &mv).unwrap();
        to_move = !to_move;
    }
    assert!(board.len() <= 24);
}

#[test]
fn session_rejects_out_of_turn_input() {
    let mut session = GameSession::new(GameMode::HumanVsHuman, Difficulty::Medium);
    assert!(!session.apply_move(Move::simple(pos(2, 1), pos(3, 0))));
    assert!(session.apply_move(Move::simple(pos(5, 2), pos(4, 3))));
    assert!(session.apply_move(Move::simple(pos(2, 1), pos(3, 2))));
    assert_eq!(session.move_count(), 2);
    assert_eq!(session.current_player(), Color::Red);
    assert_eq!(session.status(), GameStatus::Playing);
}
