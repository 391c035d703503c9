//! 位置の重みによる静的評価。

use crate::engine::board::Board;
use crate::engine::types::Color;

/// マスごとの重み（角・辺は高く、角に隣接するマスは低い）。
const WEIGHTS: [[i32; 8]; 8] = [
    [100, -20, 10, 5, 5, 10, -20, 100],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [10, -2, -1, -1, -1, -1, -2, 10],
    [5, -2, -1, -1, -1, -1, -2, 5],
    [5, -2, -1, -1, -1, -1, -2, 5],
    [10, -2, -1, -1, -1, -1, -2, 10],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [100, -20, 10, 5, 5, 10, -20, 100],
];

/// `perspective` 側から見た評価値を返す。
///
/// 自石のマスは重みを加算、相手石のマスは重みを減算、空きマスは 0。
#[inline]
#[must_use]
pub fn score(board: &Board, perspective: Color) -> i32 {
    board
        .cells()
        .iter()
        .flatten()
        .zip(WEIGHTS.iter().flatten())
        .fold(0_i32, |acc, (piece, &weight)| match piece.color() {
            Some(color) if color == perspective => acc.wrapping_add(weight),
            Some(_) => acc.wrapping_sub(weight),
            None => acc,
        })
}

#[cfg(test)]
mod tests {
    use super::score;
    use crate::ai::random;
    use crate::ai::types::{Ai as _, Move};
    use crate::engine::board::Board;
    use crate::engine::types::Color;

    #[test]
    fn initial_position_is_balanced() {
        let board = Board::initial();
        assert_eq!(score(&board, Color::Black), 0);
        assert_eq!(score(&board, Color::White), 0);
    }

    #[test]
    fn corners_outweigh_x_squares() {
        let corner = Board::from_diagram(
            ["B.......", "........", "........", "........", "........", "........", "........", "........"],
            Color::White,
        );
        assert_eq!(score(&corner, Color::Black), 100);

        let x_square = Board::from_diagram(
            ["........", ".B......", "........", "........", "........", "........", "........", "........"],
            Color::White,
        );
        assert_eq!(score(&x_square, Color::Black), -50);
        assert_eq!(score(&x_square, Color::White), 50);
    }

    #[test]
    fn score_is_antisymmetric_along_random_games() {
        for seed in 0_u64..8 {
            let mut agent = random::Agent::new(seed);
            let mut board = Board::initial();
            while !board.is_terminal() {
                assert_eq!(score(&board, Color::Black), -score(&board, Color::White));
                match agent.select_move(&board) {
                    Move::Place(square) => assert!(board.apply_square(square).is_ok()),
                    _ => board.pass(),
                }
            }
            assert_eq!(score(&board, Color::Black), -score(&board, Color::White));
        }
    }
}
