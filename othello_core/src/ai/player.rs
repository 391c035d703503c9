use core::fmt;
use core::str::FromStr;

use tracing::debug;

use crate::ai::types::{Ai, Move};
use crate::ai::{alphabeta, greedy, random};
use crate::engine::board::Board;
use crate::engine::types::Color;

/// AI の強さ。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Difficulty {
    /// 合法手からランダム。
    Easy,
    /// 1手先の静的評価が最大の手。
    #[default]
    Medium,
    /// ミニマックス（αβ枝刈り）。
    Hard,
}

impl Difficulty {
    /// 小文字の名前を返す。
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 強さの名前が不正。
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown difficulty `{0}` (expected easy, medium or hard)")]
pub struct ParseDifficultyError(String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    #[inline]
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        [Self::Easy, Self::Medium, Self::Hard]
            .into_iter()
            .find(|difficulty| trimmed.eq_ignore_ascii_case(difficulty.name()))
            .ok_or_else(|| ParseDifficultyError(trimmed.to_owned()))
    }
}

/// 強さごとの手選択アルゴリズム。
#[derive(Debug, Clone)]
enum Engine {
    /// alphabeta 探索。
    Alphabeta(alphabeta::Agent),
    /// 1手読みの静的評価。
    Greedy(greedy::Agent),
    /// ランダム。
    Random(random::Agent),
}

/// 強さと担当色を持つ AI プレイヤー。
///
/// 対局そのもの（`Session`）には触れず、渡された局面から手を選ぶだけ。
/// 合法手が無ければ `Move::Pass` を返すので、パスの適用は呼び出し側が行う。
#[derive(Debug, Clone)]
pub struct Player {
    /// 担当色。
    color: Color,
    /// 強さ。
    difficulty: Difficulty,
    /// 手選択アルゴリズム。
    engine: Engine,
}

impl Player {
    /// 担当色を返す。
    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// 強さを返す。
    #[inline]
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// プレイヤーを生成する。`Easy` の乱数は OS の乱数源で初期化する。
    #[inline]
    #[must_use]
    pub fn new(difficulty: Difficulty, color: Color) -> Self {
        let engine = match difficulty {
            Difficulty::Easy => Engine::Random(random::Agent::from_os_rng()),
            Difficulty::Medium => Engine::Greedy(greedy::Agent::new(color)),
            Difficulty::Hard => {
                Engine::Alphabeta(alphabeta::Agent::new(color, alphabeta::DEFAULT_DEPTH))
            }
        };

        Self {
            color,
            difficulty,
            engine,
        }
    }

    /// `Hard` の探索深さを指定して生成する。他の強さでは `depth` を無視する。
    #[inline]
    #[must_use]
    pub fn with_depth(difficulty: Difficulty, color: Color, depth: u8) -> Self {
        match difficulty {
            Difficulty::Hard => Self {
                color,
                difficulty,
                engine: Engine::Alphabeta(alphabeta::Agent::new(color, depth)),
            },
            Difficulty::Easy | Difficulty::Medium => Self::new(difficulty, color),
        }
    }

    /// `Easy` の乱数を `seed` で初期化して生成する（他の強さは乱数を使わない）。
    #[inline]
    #[must_use]
    pub fn with_seed(difficulty: Difficulty, color: Color, seed: u64) -> Self {
        match difficulty {
            Difficulty::Easy => Self {
                color,
                difficulty,
                engine: Engine::Random(random::Agent::new(seed)),
            },
            Difficulty::Medium | Difficulty::Hard => Self::new(difficulty, color),
        }
    }
}

impl Ai for Player {
    #[inline]
    fn select_move(&mut self, board: &Board) -> Move {
        let mv = match self.engine {
            Engine::Alphabeta(ref mut agent) => agent.select_move(board),
            Engine::Greedy(ref mut agent) => agent.select_move(board),
            Engine::Random(ref mut agent) => agent.select_move(board),
        };
        debug!(difficulty = %self.difficulty, color = %self.color, %mv, "ai selected move");
        mv
    }
}
