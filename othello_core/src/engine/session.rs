use tracing::debug;

use crate::engine::board::{ApplyMoveError, Board};
use crate::engine::types::{Color, Move, Piece, Record, Square};

/// ゲームの状態。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Status {
    /// 終局。
    GameOver {
        /// 黒の石数。
        black: u32,
        /// 白の石数。
        white: u32,
    },
    /// 進行中。
    InProgress,
}

/// 手の適用（打つ/パス）に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum PlayError {
    /// すでに終局している。
    #[error("game is already over")]
    AlreadyOver,
    /// 指定マスが合法手ではない。
    #[error("invalid move")]
    IllegalMove,
    /// 合法手があるのにパスしようとした。
    #[error("cannot pass when valid moves are available")]
    MoveAvailable,
}

impl From<ApplyMoveError> for PlayError {
    #[inline]
    fn from(err: ApplyMoveError) -> Self {
        match err {
            ApplyMoveError::IllegalMove => Self::IllegalMove,
        }
    }
}

/// 1ゲームの進行（棋譜、連続パス、終局判定）を管理する構造体。
///
/// 終局後は読み取り専用で、変更操作は `PlayError::AlreadyOver` を返す。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Session {
    /// 現在の局面。
    board: Board,
    /// 連続パス回数。
    consecutive_passes: u8,
    /// 着手順の棋譜（追記のみ）。
    history: Vec<Record>,
    /// 現在のゲーム状態。
    status: Status,
}

impl Default for Session {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// 着手を適用する。
    ///
    /// # Errors
    ///
    /// - `PlayError::AlreadyOver`: すでに終局している場合
    /// - `PlayError::IllegalMove`: 指定されたマスが合法手でない場合
    #[inline]
    pub fn apply_move(&mut self, row: i32, col: i32) -> Result<Status, PlayError> {
        if self.is_terminal() {
            debug!(row, col, "move rejected: game is already over");
            return Err(PlayError::AlreadyOver);
        }

        let Some(square) = Square::new(row, col) else {
            debug!(row, col, "move rejected: off board");
            return Err(PlayError::IllegalMove);
        };

        let color = self.board.side_to_move();
        let flipped = match self.board.apply_square(square) {
            Ok(value) => value,
            Err(err) => {
                debug!(%square, %color, "move rejected: {err}");
                return Err(err.into());
            }
        };

        self.history.push(Record {
            color,
            mv: Move::Place(square),
        });
        self.consecutive_passes = u8::MIN;
        debug!(%square, %color, flipped, "move applied");

        Ok(self.update_status())
    }

    /// 現手番に合法手が無い場合、パスを自動適用する。
    ///
    /// UI 側で「人間が打てない状態で入力待ちのまま止まる」ことを避けるための補助。
    ///
    /// - すでに終局している場合は何もしない（`false`）。
    /// - 合法手がある場合は何もしない（`false`）。
    /// - パスを適用できた場合は `true`。
    #[inline]
    pub fn auto_pass_if_needed(&mut self) -> bool {
        if self.is_terminal() || self.board.has_legal_move() {
            return false;
        }

        self.pass().is_ok()
    }

    /// 現在の局面を返す。
    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// 連続パス回数を返す。
    #[inline]
    #[must_use]
    pub const fn consecutive_passes(&self) -> u8 {
        self.consecutive_passes
    }

    /// 任意の局面からゲームを開始する。
    ///
    /// 双方とも打てない局面なら、その時点で終局として扱う。
    #[inline]
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        let mut session = Self {
            board,
            consecutive_passes: u8::MIN,
            history: Vec::new(),
            status: Status::InProgress,
        };
        session.update_status();
        session
    }

    /// 現手番に合法手があるかを返す。
    #[inline]
    #[must_use]
    pub fn has_legal_move(&self) -> bool {
        self.board.has_legal_move()
    }

    /// 着手順の棋譜を返す。
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[Record] {
        &self.history
    }

    /// 終局しているかどうかを返す。
    #[inline]
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self.status, Status::GameOver { .. })
    }

    /// 現手番の合法手を行優先で返す。
    #[inline]
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Square> {
        self.board.legal_moves()
    }

    /// 初期局面からゲームを開始する。
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            board: Board::initial(),
            consecutive_passes: u8::MIN,
            history: Vec::new(),
            status: Status::InProgress,
        }
    }

    /// パスを適用する。
    ///
    /// # Errors
    ///
    /// - `PlayError::AlreadyOver`: すでに終局している場合
    /// - `PlayError::MoveAvailable`: 合法手が存在するのにパスを試みた場合
    #[inline]
    pub fn pass(&mut self) -> Result<Status, PlayError> {
        if self.is_terminal() {
            debug!("pass rejected: game is already over");
            return Err(PlayError::AlreadyOver);
        }

        let color = self.board.side_to_move();
        if self.board.has_legal_move() {
            debug!(%color, "pass rejected: a legal move exists");
            return Err(PlayError::MoveAvailable);
        }

        self.history.push(Record {
            color,
            mv: Move::Pass,
        });
        self.consecutive_passes = self.consecutive_passes.saturating_add(1);
        self.board.pass();
        debug!(%color, passes = self.consecutive_passes, "pass applied");

        Ok(self.update_status())
    }

    /// 1手（打つ/パス）を適用する。
    ///
    /// # Errors
    ///
    /// [`Session::apply_move`] / [`Session::pass`] と同じ。
    #[inline]
    pub fn play(&mut self, mv: Move) -> Result<Status, PlayError> {
        match mv {
            Move::Pass => self.pass(),
            Move::Place(square) => {
                let (row, col) = square.coords();
                self.apply_move(row, col)
            }
        }
    }

    /// 初期状態に戻す。
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("session reset");
    }

    /// 石数（黒、白）を返す。
    #[inline]
    #[must_use]
    pub const fn score(&self) -> (u32, u32) {
        self.board.counts()
    }

    /// 現手番を返す。
    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    /// 現在のゲーム状態を返す。
    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// 表示用の状態文字列を返す。
    #[inline]
    #[must_use]
    pub fn status_description(&self) -> String {
        if !self.is_terminal() {
            return format!("{}'s turn", self.side_to_move());
        }

        match self.winner() {
            Piece::Black => "Black Wins!".to_owned(),
            Piece::White => "White Wins!".to_owned(),
            Piece::Empty => "Tie".to_owned(),
        }
    }

    /// 終局判定を行い、状態を更新して返す。
    fn update_status(&mut self) -> Status {
        if self.is_terminal() {
            return self.status;
        }

        if self.board.is_terminal() || self.consecutive_passes >= 2 {
            let (black, white) = self.board.counts();
            self.status = Status::GameOver { black, white };
            debug!(black, white, winner = %self.board.winner(), "game over");
        }

        self.status
    }

    /// 勝者を返す。進行中または引き分けなら `Piece::Empty`。
    #[inline]
    #[must_use]
    pub fn winner(&self) -> Piece {
        if self.is_terminal() {
            self.board.winner()
        } else {
            Piece::Empty
        }
    }
}
