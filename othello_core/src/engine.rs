/// 局面（8x8 盤面）と合法手/反転処理の実装。
pub mod board;
/// 棋譜表記（`E4` / `pass`）の変換。
pub mod notation;
/// ゲーム進行（手番、パス、棋譜、終局判定）の実装。
pub mod session;
pub mod types;

pub type Board = board::Board;
pub type Session = session::Session;
pub type Color = types::Color;
pub type Piece = types::Piece;
pub type Square = types::Square;
pub type Move = types::Move;
pub type Record = types::Record;
pub type GameStatus = session::Status;
pub type PlayError = session::PlayError;
pub type ParseMoveError = notation::ParseMoveError;
