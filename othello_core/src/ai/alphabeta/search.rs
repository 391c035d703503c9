use tracing::trace;

use crate::ai::eval;
use crate::ai::types::Move;
use crate::engine::board::Board;
use crate::engine::types::Square;

use super::limits::{SearchContext, SearchStats};

/// 探索結果。
#[derive(Clone, Copy, Debug)]
pub(super) struct SearchResult {
    /// ルートで選択した最善手。
    best_move: Move,
    /// `best_move` の評価値（合法手が無ければルート局面の静的評価）。
    best_score: i32,
    /// 探索統計。
    stats: SearchStats,
}

impl SearchResult {
    /// ルートで選択した最善手を返す。
    pub(super) const fn best_move(self) -> Move {
        self.best_move
    }

    /// `best_move` の評価値を返す。
    pub(super) const fn best_score(self) -> i32 {
        self.best_score
    }

    /// 探索統計を返す。
    pub(super) const fn stats(self) -> SearchStats {
        self.stats
    }
}

/// ルート探索。各合法手を試し、その後 `depth` 手分をミニマックスで読む。
///
/// 同点の手は行優先で先に見つかったものを残す。
pub(super) fn search_root(board: &Board, ctx: &mut SearchContext, depth: u8) -> SearchResult {
    let mut best: Option<(Square, i32)> = None;
    let mut alpha = i32::MIN;
    let beta = i32::MAX;

    for square in board.legal_moves() {
        let mut next = *board;
        if next.apply_square(square).is_err() {
            continue;
        }

        let score = minimax(&next, depth, alpha, beta, ctx);
        trace!(%square, score, "alphabeta root candidate");
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((square, score));
        }
        if score > alpha {
            alpha = score;
        }
    }

    match best {
        Some((square, best_score)) => SearchResult {
            best_move: Move::Place(square),
            best_score,
            stats: ctx.stats(),
        },
        None => SearchResult {
            best_move: Move::Pass,
            best_score: eval::score(board, ctx.root()),
            stats: ctx.stats(),
        },
    }
}

/// ミニマックス（αβ付き）。
///
/// 値は常にルート側（`ctx.root()`）視点で、ルート側の手番では最大化、
/// 相手の手番では最小化する。深さ切れ・終局・合法手なしの局面は静的評価を返す。
pub(super) fn minimax(
    board: &Board,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    ctx: &mut SearchContext,
) -> i32 {
    ctx.stats_mut().inc_nodes();

    if depth == u8::MIN || board.is_terminal() {
        return eval::score(board, ctx.root());
    }

    let moves = board.legal_moves();
    if moves.is_empty() {
        return eval::score(board, ctx.root());
    }

    let maximizing = board.side_to_move() == ctx.root();
    let next_depth = depth.saturating_sub(1);
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for square in moves {
        let mut next = *board;
        if next.apply_square(square).is_err() {
            continue;
        }

        let score = minimax(&next, next_depth, alpha, beta, ctx);
        if maximizing {
            best = best.max(score);
            alpha = alpha.max(score);
        } else {
            best = best.min(score);
            beta = beta.min(score);
        }

        if beta <= alpha {
            ctx.stats_mut().inc_cutoffs();
            break;
        }
    }

    best
}
