//! Uniform random move selection

use rand::Rng;

use crate::board::{Board, Pos};
use crate::error::GameError;

/// Pick one legal move uniformly at random.
pub fn pick_random<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<Pos, GameError> {
    let moves = board.legal_moves();
    if moves.is_empty() {
        return Err(GameError::NoLegalMoves);
    }
    Ok(moves[rng.gen_range(0..moves.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Mark;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn test_single_legal_move() {
        // Eight cells filled without a line, (2, 2) left
        let mut board = Board::new();
        let cells = [
            (0, 0, Mark::Cross),
            (0, 1, Mark::Circle),
            (0, 2, Mark::Cross),
            (1, 0, Mark::Cross),
            (1, 1, Mark::Circle),
            (1, 2, Mark::Circle),
            (2, 0, Mark::Circle),
            (2, 1, Mark::Cross),
        ];
        for (row, col, mark) in cells {
            board.mark(Pos::new(row, col), mark).unwrap();
        }

        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(pick_random(&board, &mut rng), Ok(Pos::new(2, 2)));
        }
    }

    #[test]
    fn test_random_move_is_legal() {
        let mut board = Board::new();
        board.mark(Pos::new(1, 1), Mark::Cross).unwrap();

        let mut rng = ChaCha20Rng::seed_from_u64(42);
        for _ in 0..50 {
            let pos = pick_random(&board, &mut rng).unwrap();
            assert!(board.is_cell_empty(pos));
        }
    }

    #[test]
    fn test_random_covers_all_moves() {
        let board = Board::new();
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        let mut seen = [false; 9];
        for _ in 0..500 {
            seen[pick_random(&board, &mut rng).unwrap().to_index()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_same_seed_same_move() {
        let board = Board::new();
        let mut a = ChaCha20Rng::seed_from_u64(99);
        let mut b = ChaCha20Rng::seed_from_u64(99);
        assert_eq!(pick_random(&board, &mut a), pick_random(&board, &mut b));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut board = Board::new();
        for idx in 0..9 {
            // X X O / O O X / X X O
            let mark = if matches!(idx, 0 | 1 | 5 | 6 | 7) { Mark::Cross } else { Mark::Circle };
            board.mark(Pos::from_index(idx), mark).unwrap();
        }
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        assert_eq!(pick_random(&board, &mut rng), Err(GameError::NoLegalMoves));
    }
}
