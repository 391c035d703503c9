use crate::engine::board::Board;

pub use crate::engine::types::Move;

/// 手を選択するAI。
///
/// 渡された局面は読み取るだけで、仮想的な手は複製した局面上で試す。
pub trait Ai {
    /// 現在局面から次の手を選択する。合法手が無ければ `Move::Pass`。
    fn select_move(&mut self, board: &Board) -> Move;
}
