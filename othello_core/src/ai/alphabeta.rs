use tracing::debug;

use crate::ai::types::{Ai, Move};
use crate::engine::board::Board;
use crate::engine::types::Color;

mod limits;
mod search;

use limits::SearchContext;
use search::search_root;

/// 既定の探索深さ（ルートの各手の後に読む手数）。
pub const DEFAULT_DEPTH: u8 = 4;

/// ミニマックス（αβ枝刈り）で手を選ぶAI。
///
/// 探索は渡された局面の複製上で行い、呼び出し側の局面は変更しない。
/// 自分の手番でない局面を渡された場合は探索せずパスを返す。
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct Agent {
    /// 評価の視点となる自分の色。
    color: Color,
    /// 探索深さ。
    depth: u8,
}

impl Agent {
    /// 自分の色を返す。
    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    /// 探索深さを返す。
    #[inline]
    #[must_use]
    pub const fn depth(self) -> u8 {
        self.depth
    }

    /// `color` 視点で `depth` を指定して初期化する。
    #[inline]
    #[must_use]
    pub const fn new(color: Color, depth: u8) -> Self {
        Self { color, depth }
    }
}

impl Ai for Agent {
    #[inline]
    fn select_move(&mut self, board: &Board) -> Move {
        // 探索は「ルートの手番 = 自分」を前提に最大化・最小化を決める。
        if board.side_to_move() != self.color {
            debug!(
                color = %self.color,
                side_to_move = %board.side_to_move(),
                "alphabeta asked to move out of turn; passing"
            );
            return Move::Pass;
        }

        let mut ctx = SearchContext::new(self.color);
        let result = search_root(board, &mut ctx, self.depth);
        let stats = result.stats();

        debug!(
            color = %self.color,
            depth = self.depth,
            best_move = %result.best_move(),
            best_score = result.best_score(),
            nodes = stats.nodes(),
            cutoffs = stats.cutoffs(),
            "alphabeta search finished"
        );

        result.best_move()
    }
}
