use crate::engine::types::Color;

/// 探索統計。
#[derive(Default, Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct SearchStats {
    /// `beta <= alpha` で残りの兄弟手を打ち切った回数。
    cutoffs: u64,
    /// 探索したノード数。
    nodes: u64,
}

impl SearchStats {
    /// 枝刈りした回数を返す。
    pub(super) const fn cutoffs(&self) -> u64 {
        self.cutoffs
    }

    /// 枝刈りの回数を加算する。
    pub(super) const fn inc_cutoffs(&mut self) {
        self.cutoffs = self.cutoffs.wrapping_add(1);
    }

    /// 探索ノード数を加算する。
    pub(super) const fn inc_nodes(&mut self) {
        self.nodes = self.nodes.wrapping_add(1);
    }

    /// 探索ノード数を返す。
    pub(super) const fn nodes(&self) -> u64 {
        self.nodes
    }
}

/// 1回の探索で共有するコンテキスト。
#[derive(Debug)]
pub(super) struct SearchContext {
    /// 評価の視点（ルートで手を選ぶ側）。
    root: Color,
    /// 探索統計。
    stats: SearchStats,
}

impl SearchContext {
    /// 探索コンテキストを生成する。
    pub(super) fn new(root: Color) -> Self {
        Self {
            root,
            stats: SearchStats::default(),
        }
    }

    /// 評価の視点を返す。
    pub(super) const fn root(&self) -> Color {
        self.root
    }

    /// 探索統計を返す。
    pub(super) const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// 探索統計への可変参照を返す。
    pub(super) const fn stats_mut(&mut self) -> &mut SearchStats {
        &mut self.stats
    }
}
