//! Checkers rule engine tests

use std::collections::HashSet;

use juegos::checkers::{valid_moves, Board, Cell, Game, PieceId, Rules, Side};

fn relaxed() -> Rules {
    Rules::default()
}

#[test]
fn test_single_capture_listed() {
    let mut board = Board::empty();
    let dark = board.place(5, 4, Side::Dark, false).unwrap();
    let light = board.place(4, 3, Side::Light, false).unwrap();

    let moves = valid_moves(&board, dark);
    assert_eq!(moves.get(&(3, 2)), Some(&vec![light]));
    assert_eq!(moves.get(&(4, 5)), Some(&Vec::new()));
    assert!(!moves.contains_key(&(4, 3)));
}

#[test]
fn test_chain_lists_captures_in_order() {
    let mut board = Board::empty();
    let dark = board.place(6, 1, Side::Dark, false).unwrap();
    let first = board.place(5, 2, Side::Light, false).unwrap();
    let second = board.place(3, 4, Side::Light, false).unwrap();
    // Keeps light alive after both captures.
    board.place(0, 7, Side::Light, false).unwrap();

    let moves = valid_moves(&board, dark);
    assert_eq!(moves.get(&(4, 3)), Some(&vec![first]));
    assert_eq!(moves.get(&(2, 5)), Some(&vec![first, second]));
    // No plain step is taken after a jump.
    assert!(!moves.contains_key(&(3, 2)));

    let mut game = Game::with_board(board, Side::Dark, relaxed());
    assert!(game.select_or_move(6, 1));
    assert!(game.select_or_move(2, 5));

    let board = game.board();
    assert_eq!(board.piece_at(2, 5).map(|p| p.side), Some(Side::Dark));
    assert_eq!(board.cell(5, 2), Some(Cell::Empty));
    assert_eq!(board.cell(3, 4), Some(Cell::Empty));
    assert_eq!(board.cell(6, 1), Some(Cell::Empty));
    assert_eq!(board.remaining(Side::Light), 1);
    assert!(board.piece(first).is_none());
    assert!(board.piece(second).is_none());
    assert_eq!(game.turn(), Side::Light);
    assert!(game.winner().is_none());
}

#[test]
fn test_select_own_piece_only() {
    let mut game = Game::default();
    assert_eq!(game.turn(), Side::Dark);

    // Light piece and an empty square.
    assert!(!game.select_or_move(0, 1));
    assert!(!game.select_or_move(4, 4));
    assert!(game.selected().is_none());

    assert!(game.select_or_move(5, 0));
    assert!(game.selected().is_some());
    assert_eq!(game.current_move_set().keys().copied().collect::<Vec<_>>(), vec![(4, 1)]);
}

#[test]
fn test_failed_move_reselects() {
    let mut game = Game::default();
    assert!(game.select_or_move(5, 0));
    let first = game.selected();

    // Another own piece: the move fails and that piece becomes selected.
    assert!(game.select_or_move(5, 2));
    assert_ne!(game.selected(), first);
    assert_eq!(game.board().piece_id_at(5, 2), game.selected());

    // An unreachable empty square drops the selection.
    assert!(!game.select_or_move(3, 6));
    assert!(game.selected().is_none());
    assert!(game.current_move_set().is_empty());
    assert_eq!(game.turn(), Side::Dark);
}

#[test]
fn test_move_switches_turn_and_clears_selection() {
    let mut game = Game::default();
    assert!(game.select_or_move(5, 0));
    assert!(game.select_or_move(4, 1));
    assert_eq!(game.turn(), Side::Light);
    assert!(game.selected().is_none());
    assert!(game.current_move_set().is_empty());
    assert_eq!(game.board().piece_at(4, 1).map(|p| p.side), Some(Side::Dark));
}

#[test]
fn test_promotion_is_permanent() {
    let mut board = Board::empty();
    let dark = board.place(1, 2, Side::Dark, false).unwrap();
    board.place(4, 7, Side::Light, false).unwrap();
    let mut game = Game::with_board(board, Side::Dark, relaxed());

    assert!(game.select_or_move(1, 2));
    assert!(game.select_or_move(0, 1));
    assert!(game.board().piece(dark).unwrap().king);
    assert_eq!(game.board().kings(Side::Dark), 1);

    assert!(game.select_or_move(4, 7));
    assert!(game.select_or_move(5, 6));

    // Kings move backwards and stay kings.
    assert!(game.select_or_move(0, 1));
    assert!(game.current_move_set().contains_key(&(1, 2)));
    assert!(game.select_or_move(1, 2));
    let piece = game.board().piece(dark).unwrap();
    assert!(piece.king);
    assert_eq!((piece.row, piece.col), (1, 2));
    assert_eq!(game.board().kings(Side::Dark), 1);
}

#[test]
fn test_king_captures_backward_in_chain() {
    let mut board = Board::empty();
    let king = board.place(1, 2, Side::Dark, true).unwrap();
    let first = board.place(2, 3, Side::Light, false).unwrap();
    let second = board.place(4, 5, Side::Light, false).unwrap();
    board.place(7, 0, Side::Light, false).unwrap();

    let moves = valid_moves(&board, king);
    assert_eq!(moves.get(&(3, 4)), Some(&vec![first]));
    assert_eq!(moves.get(&(5, 6)), Some(&vec![first, second]));
    assert_eq!(moves.get(&(0, 1)), Some(&Vec::new()));
    assert_eq!(moves.get(&(2, 1)), Some(&Vec::new()));

    let mut game = Game::with_board(board, Side::Dark, relaxed());
    assert!(game.select_or_move(1, 2));
    assert!(game.select_or_move(5, 6));

    let board = game.board();
    let piece = board.piece(king).unwrap();
    assert!(piece.king);
    assert_eq!(piece.square(), (5, 6));
    assert!(board.piece(first).is_none());
    assert!(board.piece(second).is_none());
    assert_eq!(board.remaining(Side::Light), 1);
    assert_eq!(game.turn(), Side::Light);
}

#[test]
fn test_light_man_never_moves_toward_row_zero() {
    let mut board = Board::empty();
    let light = board.place(3, 3, Side::Light, false).unwrap();
    board.place(2, 2, Side::Dark, false).unwrap();
    board.place(7, 0, Side::Dark, false).unwrap();

    let moves = valid_moves(&board, light);
    let squares: Vec<_> = moves.keys().copied().collect();
    assert_eq!(squares, vec![(4, 2), (4, 4)]);
    assert!(moves.values().all(|captured| captured.is_empty()));

    let mut game = Game::with_board(board, Side::Light, relaxed());
    assert!(game.select_or_move(3, 3));
    assert!(!game.select_or_move(1, 1));
    assert_eq!(game.board().piece(light).map(|p| p.square()), Some((3, 3)));
    assert_eq!(game.board().remaining(Side::Dark), 2);
    assert_eq!(game.turn(), Side::Light);
}

#[test]
fn test_light_crowns_on_last_row() {
    let mut board = Board::empty();
    board.place(3, 0, Side::Dark, false).unwrap();
    let light = board.place(6, 3, Side::Light, false).unwrap();
    let mut game = Game::with_board(board, Side::Light, relaxed());

    assert!(game.select_or_move(6, 3));
    assert!(game.select_or_move(7, 4));
    assert!(game.board().piece(light).unwrap().king);
    assert_eq!(game.board().kings(Side::Light), 1);
}

#[test]
fn test_winner_when_last_piece_taken() {
    let mut board = Board::empty();
    board.place(5, 4, Side::Dark, false).unwrap();
    board.place(4, 3, Side::Light, false).unwrap();
    let mut game = Game::with_board(board, Side::Dark, relaxed());
    assert!(game.winner().is_none());

    assert!(game.select_or_move(5, 4));
    assert!(game.select_or_move(3, 2));
    assert_eq!(game.board().remaining(Side::Light), 0);
    assert_eq!(game.winner(), Some(Side::Dark));

    // Nothing moves once the game is decided.
    assert!(!game.select_or_move(3, 2));
}

#[test]
fn test_capturing_a_king_updates_king_count() {
    let mut board = Board::empty();
    board.place(5, 4, Side::Dark, false).unwrap();
    board.place(4, 3, Side::Light, true).unwrap();
    board.place(0, 1, Side::Light, false).unwrap();
    let mut game = Game::with_board(board, Side::Dark, relaxed());

    assert_eq!(game.board().kings(Side::Light), 1);
    assert!(game.select_or_move(5, 4));
    assert!(game.select_or_move(3, 2));
    assert_eq!(game.board().kings(Side::Light), 0);
    assert_eq!(game.board().remaining(Side::Light), 1);
}

#[test]
fn test_forced_capture_filters_plain_steps() {
    let build = || {
        let mut board = Board::empty();
        board.place(5, 4, Side::Dark, false).unwrap();
        board.place(5, 0, Side::Dark, false).unwrap();
        board.place(4, 3, Side::Light, false).unwrap();
        board
    };

    let mut relaxed_game = Game::with_board(build(), Side::Dark, relaxed());
    assert!(relaxed_game.select_or_move(5, 0));
    assert!(relaxed_game.current_move_set().contains_key(&(4, 1)));

    let rules = Rules { forced_capture: true };
    let mut forced = Game::with_board(build(), Side::Dark, rules);
    assert!(forced.select_or_move(5, 0));
    assert!(forced.current_move_set().is_empty());
    assert!(!forced.select_or_move(4, 1));

    assert!(forced.select_or_move(5, 4));
    let destinations: Vec<_> = forced.current_move_set().keys().copied().collect();
    assert_eq!(destinations, vec![(3, 2)]);
}

/// Play a deterministic game to the end (or a ply limit), checking the board
/// invariants after every move.
#[test]
fn test_playout_keeps_invariants() {
    let mut game = Game::default();
    let mut kings: HashSet<PieceId> = HashSet::new();

    for _ in 0..300 {
        if game.winner().is_some() {
            break;
        }
        let side = game.turn();
        let mover = game
            .board()
            .pieces()
            .filter(|(_, p)| p.side == side)
            .map(|(id, p)| (id, p.square()))
            .find(|(id, _)| !valid_moves(game.board(), *id).is_empty());
        let Some((_, from)) = mover else {
            break;
        };

        assert!(game.select_or_move(from.0, from.1));
        for square in game.current_move_set().keys() {
            assert_eq!(game.board().cell(square.0, square.1), Some(Cell::Empty));
        }
        let (to, _) = game
            .current_move_set()
            .iter()
            .max_by_key(|(_, captured)| captured.len())
            .map(|(sq, c)| (*sq, c.len()))
            .unwrap();
        assert!(game.select_or_move(to.0, to.1));
        assert_eq!(game.turn(), side.opponent());

        let board = game.board();
        for (id, piece) in board.pieces() {
            assert_eq!(board.piece_id_at(piece.row, piece.col), Some(id));
            if kings.contains(&id) {
                assert!(piece.king, "king reverted");
            }
            if piece.king {
                kings.insert(id);
            }
        }
        for s in [Side::Dark, Side::Light] {
            let counted = board.pieces().filter(|(_, p)| p.side == s).count();
            assert_eq!(board.remaining(s), counted);
        }
        let winner_expected = board.remaining(Side::Dark) == 0 || board.remaining(Side::Light) == 0;
        assert_eq!(game.winner().is_some(), winner_expected);
    }
}
