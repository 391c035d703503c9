use rand::SeedableRng as _;
use rand::seq::IndexedRandom as _;
use rand_pcg::Pcg32;

use crate::ai::types::{Ai, Move};
use crate::engine::board::Board;

/// 合法手から一様ランダムに1手を選択するAI。
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Agent {
    /// 乱数生成器。
    rng: Pcg32,
}

impl Agent {
    /// OS の乱数源で初期化する（再現性なし）。
    #[inline]
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self {
            rng: Pcg32::from_os_rng(),
        }
    }

    /// `seed` を用いて初期化する。同じ `seed` なら同じ手順を選ぶ。
    #[inline]
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl Ai for Agent {
    #[inline]
    fn select_move(&mut self, board: &Board) -> Move {
        board
            .legal_moves()
            .choose(&mut self.rng)
            .copied()
            .map_or(Move::Pass, Move::Place)
    }
}

#[cfg(test)]
mod tests {
    use super::Agent;
    use crate::ai::types::{Ai as _, Move};
    use crate::engine::board::Board;
    use crate::engine::types::Color;

    #[test]
    fn same_seed_selects_same_moves() {
        let board = Board::initial();
        let mut first = Agent::new(7);
        let mut second = Agent::new(7);
        for _ in 0..16 {
            assert_eq!(first.select_move(&board), second.select_move(&board));
        }
    }

    #[test]
    fn selected_move_is_always_legal() {
        let board = Board::initial();
        let legal = board.legal_moves();
        let mut agent = Agent::from_os_rng();
        for _ in 0..32 {
            let mv = agent.select_move(&board);
            assert!(
                matches!(mv, Move::Place(square) if legal.contains(&square)),
                "initial position has legal moves, got {mv}"
            );
        }
    }

    #[test]
    fn passes_without_legal_moves() {
        let board = Board::from_diagram(["BBBBBBBB"; 8], Color::White);
        assert_eq!(Agent::new(0).select_move(&board), Move::Pass);
    }
}
