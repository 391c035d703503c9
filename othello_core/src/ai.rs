/// ミニマックス（αβ枝刈り）で手を選ぶAI（Hard）。
pub mod alphabeta;
/// 位置の重みによる静的評価。
pub mod eval;
/// 1手読みの静的評価で手を選ぶAI（Medium）。
pub mod greedy;
/// 強さと担当色から手選択アルゴリズムを選ぶプレイヤー。
pub mod player;
/// 合法手からランダムに1手選ぶAI（Easy）。
pub mod random;
pub mod types;

pub type Move = types::Move;
pub type Difficulty = player::Difficulty;
pub type Player = player::Player;
