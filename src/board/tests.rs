use super::*;
use crate::error::GameError;

fn board_from(moves: &[(u8, u8, Mark)]) -> Board {
    let mut board = Board::new();
    for &(row, col, mark) in moves {
        board.mark(Pos::new(row, col), mark).unwrap();
    }
    board
}

#[test]
fn test_mark_opponent() {
    assert_eq!(Mark::Cross.opponent(), Mark::Circle);
    assert_eq!(Mark::Circle.opponent(), Mark::Cross);
    assert_eq!(Mark::Empty.opponent(), Mark::Empty);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(1, 1); // Center
    assert_eq!(pos.to_index(), 4);

    let pos2 = Pos::from_index(7);
    assert_eq!(pos2.row, 2);
    assert_eq!(pos2.col, 1);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(2, 2));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, 3));
    assert_eq!(Pos::try_new(3, 0), None);
    assert_eq!(Pos::try_new(2, 1), Some(Pos::new(2, 1)));
}

#[test]
fn test_pos_ordering() {
    assert!(Pos::new(0, 2) < Pos::new(1, 0));
    assert!(Pos::new(1, 0) < Pos::new(1, 1));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 3);
    assert_eq!(TOTAL_CELLS, 9);
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new();
    assert!(board.is_empty());
    assert!(!board.is_full());
    assert_eq!(board.marked_count(), 0);
    assert_eq!(board.terminal_result(), None);
    assert_eq!(board.legal_moves().len(), 9);
}

#[test]
fn test_mark_updates_count() {
    let mut board = Board::new();
    board.mark(Pos::new(0, 0), Mark::Cross).unwrap();
    assert_eq!(board.get(Pos::new(0, 0)), Mark::Cross);
    assert_eq!(board.marked_count(), 1);
    assert!(!board.is_empty());
}

#[test]
fn test_mark_occupied_cell_rejected() {
    let mut board = board_from(&[(1, 1, Mark::Cross)]);
    let before = board;

    let err = board.mark(Pos::new(1, 1), Mark::Circle).unwrap_err();
    assert_eq!(err, GameError::CellOccupied { row: 1, col: 1 });
    assert_eq!(board, before);
}

#[test]
fn test_mark_empty_rejected() {
    let mut board = Board::new();
    assert_eq!(board.mark(Pos::new(0, 0), Mark::Empty), Err(GameError::InvalidMark));
    assert!(board.is_empty());
}

#[test]
fn test_legal_moves_row_major() {
    let board = board_from(&[(0, 1, Mark::Cross), (2, 0, Mark::Circle)]);
    let moves = board.legal_moves();
    assert_eq!(
        moves,
        vec![
            Pos::new(0, 0),
            Pos::new(0, 2),
            Pos::new(1, 0),
            Pos::new(1, 1),
            Pos::new(1, 2),
            Pos::new(2, 1),
            Pos::new(2, 2),
        ]
    );
}

/// Visit every board reachable from `board` by alternating play, stopping at
/// finished games. Returns the number of non-terminal boards checked.
fn check_legal_moves_below(board: &Board, to_move: Mark) -> u64 {
    if board.is_terminal() {
        return 0;
    }
    let moves = board.legal_moves();
    assert_eq!(moves.len(), 9 - board.marked_count() as usize, "{}", board);
    assert!(moves.iter().all(|&pos| board.is_cell_empty(pos)), "{}", board);

    let mut visited = 1;
    for pos in moves {
        let mut child = *board;
        child.mark(pos, to_move).unwrap();
        visited += check_legal_moves_below(&child, to_move.opponent());
    }
    visited
}

#[test]
fn test_legal_moves_match_empty_cells() {
    // Every reachable non-terminal position of the full game tree
    let visited = check_legal_moves_below(&Board::new(), Mark::Cross);
    assert_eq!(visited, 294_778);
}

#[test]
fn test_mark_out_of_bounds_rejected() {
    let mut board = Board::new();
    let err = board.mark(Pos { row: 3, col: 0 }, Mark::Cross).unwrap_err();
    assert_eq!(err, GameError::OutOfBounds { row: 3, col: 0 });

    let err = board.mark(Pos { row: 1, col: 7 }, Mark::Circle).unwrap_err();
    assert_eq!(err, GameError::OutOfBounds { row: 1, col: 7 });
    assert!(board.is_empty());
}

#[test]
fn test_copy_is_independent() {
    let original = board_from(&[(0, 0, Mark::Cross)]);
    let mut copy = original;
    copy.mark(Pos::new(2, 2), Mark::Circle).unwrap();

    assert_eq!(original.get(Pos::new(2, 2)), Mark::Empty);
    assert_eq!(original.marked_count(), 1);
    assert_eq!(copy.marked_count(), 2);
}

#[test]
fn test_full_board() {
    // X O X / X O O / O X X: no line, all cells taken
    let board = board_from(&[
        (0, 0, Mark::Cross),
        (0, 1, Mark::Circle),
        (0, 2, Mark::Cross),
        (1, 1, Mark::Circle),
        (1, 0, Mark::Cross),
        (1, 2, Mark::Circle),
        (2, 1, Mark::Cross),
        (2, 0, Mark::Circle),
        (2, 2, Mark::Cross),
    ]);
    assert!(board.is_full());
    assert!(board.legal_moves().is_empty());
    assert_eq!(board.terminal_result(), None);
    assert_eq!(board.outcome(), crate::rules::Outcome::Draw);
}

#[test]
fn test_display() {
    let board = board_from(&[(0, 0, Mark::Cross), (1, 1, Mark::Circle)]);
    assert_eq!(board.to_string(), "X . .\n. O .\n. . .");
}
