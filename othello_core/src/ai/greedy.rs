use tracing::trace;

use crate::ai::eval;
use crate::ai::types::{Ai, Move};
use crate::engine::board::Board;
use crate::engine::types::{Color, Square};

/// 1手先の局面を静的評価し、最も評価の高い手を選ぶAI。
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct Agent {
    /// 評価の視点となる自分の色。
    color: Color,
}

impl Agent {
    /// 自分の色を返す。
    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    /// `color` 視点で評価するAIを生成する。
    #[inline]
    #[must_use]
    pub const fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Ai for Agent {
    #[inline]
    fn select_move(&mut self, board: &Board) -> Move {
        let mut best: Option<(Square, i32)> = None;

        for square in board.legal_moves() {
            let mut next = *board;
            if next.apply_square(square).is_err() {
                continue;
            }

            let score = eval::score(&next, self.color);
            trace!(%square, score, "greedy candidate");
            // 同点なら先に見つかった（行優先で早い）手を残す。
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((square, score));
            }
        }

        best.map_or(Move::Pass, |(square, _)| Move::Place(square))
    }
}
