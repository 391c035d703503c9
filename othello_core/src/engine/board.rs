use core::cmp::Ordering;

use crate::engine::types::{Color, Piece, Square};

/// 盤の一辺の長さ（配列添字用）。
const BOARD_LEN: usize = 8;

/// 盤面のマス数。
const CELL_COUNT: u32 = 64;

/// 探索する8方向（行差, 列差）。
const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// 盤面のセル配列。
pub type Cells = [[Piece; BOARD_LEN]; BOARD_LEN];

/// 初期配置。中央4マスのみ石がある。
const INITIAL_CELLS: Cells = {
    use Piece::{Black as B, Empty as E, White as W};
    [
        [E; BOARD_LEN],
        [E; BOARD_LEN],
        [E; BOARD_LEN],
        [E, E, E, W, B, E, E, E],
        [E, E, E, B, W, E, E, E],
        [E; BOARD_LEN],
        [E; BOARD_LEN],
        [E; BOARD_LEN],
    ]
};

/// 局面（8x8 の盤面＋手番＋石数）。
///
/// 盤面の変更は [`Board::apply`] / [`Board::pass`] のみで行う。
/// `Copy` なので、探索側は値として複製して仮想的な手を試せる。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    /// 黒石の数。
    black_count: u32,
    /// 行優先のセル配列。
    cells: Cells,
    /// 手番。
    side_to_move: Color,
    /// 白石の数。
    white_count: u32,
}

/// 着手の適用に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ApplyMoveError {
    /// 指定マスが合法手ではない。
    #[error("illegal move")]
    IllegalMove,
}

impl Default for Board {
    #[inline]
    fn default() -> Self {
        Self::initial()
    }
}

impl Board {
    /// 着手を適用する（行・列指定）。
    ///
    /// 成功時は反転した石の数を返す。
    ///
    /// # Errors
    ///
    /// 盤外・空きマスでない・挟める石がない場合は `ApplyMoveError::IllegalMove`
    /// を返し、盤面は一切変更しない。
    #[inline]
    pub fn apply(&mut self, row: i32, col: i32) -> Result<u32, ApplyMoveError> {
        let square = Square::new(row, col).ok_or(ApplyMoveError::IllegalMove)?;
        self.apply_square(square)
    }

    /// 着手を適用する（`Square` 指定）。
    ///
    /// # Errors
    ///
    /// 合法手でない場合は `ApplyMoveError::IllegalMove` を返し、盤面は変更しない。
    #[inline]
    pub fn apply_square(&mut self, square: Square) -> Result<u32, ApplyMoveError> {
        if self.piece(square) != Piece::Empty {
            return Err(ApplyMoveError::IllegalMove);
        }

        let color = self.side_to_move;
        let runs = DIRECTIONS.map(|dir| (dir, self.bracketed_run(color, square, dir)));
        let flipped = runs
            .iter()
            .fold(u32::MIN, |acc, &(_, run)| acc.wrapping_add(u32::from(run)));
        if flipped == u32::MIN {
            return Err(ApplyMoveError::IllegalMove);
        }

        let own = Piece::from(color);
        self.set(square, own);
        for &((d_row, d_col), run) in &runs {
            let (mut row, mut col) = square.coords();
            for _ in u8::MIN..run {
                row = row.wrapping_add(d_row);
                col = col.wrapping_add(d_col);
                if let Some(target) = Square::new(row, col) {
                    self.set(target, own);
                }
            }
        }

        let placed = flipped.wrapping_add(1);
        match color {
            Color::Black => {
                self.black_count = self.black_count.wrapping_add(placed);
                self.white_count = self.white_count.saturating_sub(flipped);
            }
            Color::White => {
                self.white_count = self.white_count.wrapping_add(placed);
                self.black_count = self.black_count.saturating_sub(flipped);
            }
        }
        self.side_to_move = color.opponent();

        Ok(flipped)
    }

    /// 黒石の数を返す。
    #[inline]
    #[must_use]
    pub const fn black_count(&self) -> u32 {
        self.black_count
    }

    /// `square` から `dir` 方向に、`color` の石で閉じた相手石の連続数を返す。
    ///
    /// 盤端・空きマスで途切れる場合や、隣が自石の場合は 0。
    fn bracketed_run(&self, color: Color, square: Square, (d_row, d_col): (i32, i32)) -> u8 {
        let own = Piece::from(color);
        let opponent = Piece::from(color.opponent());
        let (mut row, mut col) = square.coords();
        let mut run = u8::MIN;

        loop {
            row = row.wrapping_add(d_row);
            col = col.wrapping_add(d_col);
            let piece = self.piece_at(row, col);
            if piece == opponent {
                run = run.wrapping_add(1);
            } else if piece == own {
                return run;
            } else {
                return u8::MIN;
            }
        }
    }

    /// セル配列を返す。
    #[inline]
    #[must_use]
    pub const fn cells(&self) -> &Cells {
        &self.cells
    }

    /// 石数（黒、白）を返す。
    #[inline]
    #[must_use]
    pub const fn counts(&self) -> (u32, u32) {
        (self.black_count, self.white_count)
    }

    /// 空きマスの数を返す。
    #[inline]
    #[must_use]
    pub const fn empty_count(&self) -> u32 {
        CELL_COUNT
            .saturating_sub(self.black_count)
            .saturating_sub(self.white_count)
    }

    /// 任意のセル配列と手番から局面を生成する。石数はセル配列から数え直す。
    #[inline]
    #[must_use]
    pub fn from_cells(cells: Cells, side_to_move: Color) -> Self {
        let mut black_count = u32::MIN;
        let mut white_count = u32::MIN;
        for piece in cells.iter().flatten() {
            match *piece {
                Piece::Black => black_count = black_count.wrapping_add(1),
                Piece::White => white_count = white_count.wrapping_add(1),
                Piece::Empty => {}
            }
        }

        Self {
            black_count,
            cells,
            side_to_move,
            white_count,
        }
    }

    /// 盤面図（`B` / `W` / `.` の8行）から局面を生成する（テスト用）。
    #[cfg(test)]
    pub(crate) fn from_diagram(rows: [&str; BOARD_LEN], side_to_move: Color) -> Self {
        let mut cells = [[Piece::Empty; BOARD_LEN]; BOARD_LEN];
        for (cell_row, text) in cells.iter_mut().zip(rows) {
            for (cell, ch) in cell_row.iter_mut().zip(text.chars()) {
                *cell = match ch {
                    'B' => Piece::Black,
                    'W' => Piece::White,
                    _ => Piece::Empty,
                };
            }
        }
        Self::from_cells(cells, side_to_move)
    }

    /// 現手番に合法手があるかを返す。
    #[inline]
    #[must_use]
    pub fn has_legal_move(&self) -> bool {
        self.has_legal_move_for(self.side_to_move)
    }

    /// 指定手番に合法手があるかを返す（最初の1手が見つかった時点で打ち切る）。
    #[inline]
    #[must_use]
    pub fn has_legal_move_for(&self, color: Color) -> bool {
        squares().any(|square| self.is_legal_square_for(color, square))
    }

    /// 初期局面を返す。
    #[inline]
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            black_count: 2,
            cells: INITIAL_CELLS,
            side_to_move: Color::Black,
            white_count: 2,
        }
    }

    /// 現手番にとって合法手かを返す。
    #[inline]
    #[must_use]
    pub fn is_legal_move(&self, row: i32, col: i32) -> bool {
        self.is_legal_move_for(self.side_to_move, row, col)
    }

    /// 指定手番にとって合法手かを返す。盤外は常に `false`。
    #[inline]
    #[must_use]
    pub fn is_legal_move_for(&self, color: Color, row: i32, col: i32) -> bool {
        Square::new(row, col).is_some_and(|square| self.is_legal_square_for(color, square))
    }

    /// 指定手番にとって `square` が合法手かを返す。
    fn is_legal_square_for(&self, color: Color, square: Square) -> bool {
        self.piece(square) == Piece::Empty
            && DIRECTIONS
                .iter()
                .any(|&dir| self.bracketed_run(color, square, dir) != u8::MIN)
    }

    /// 盤内の座標かを返す。
    #[inline]
    #[must_use]
    pub fn is_on_board(row: i32, col: i32) -> bool {
        Square::new(row, col).is_some()
    }

    /// 双方とも合法手がない（終局）かを返す。盤面は変更しない。
    #[inline]
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !self.has_legal_move_for(Color::Black) && !self.has_legal_move_for(Color::White)
    }

    /// 現手番の合法手を行優先で返す。
    #[inline]
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Square> {
        self.legal_moves_for(self.side_to_move)
    }

    /// 指定手番の合法手を行優先で返す。
    #[inline]
    #[must_use]
    pub fn legal_moves_for(&self, color: Color) -> Vec<Square> {
        squares()
            .filter(|&square| self.is_legal_square_for(color, square))
            .collect()
    }

    /// パス（手番交代）を適用する。石は動かさない。
    #[inline]
    pub const fn pass(&mut self) {
        self.side_to_move = self.side_to_move.opponent();
    }

    /// 指定マスの石を返す。
    #[inline]
    #[must_use]
    pub fn piece(&self, square: Square) -> Piece {
        self.cells
            .get(usize::from(square.row()))
            .and_then(|row| row.get(usize::from(square.col())))
            .copied()
            .unwrap_or(Piece::Empty)
    }

    /// 指定座標の石を返す。盤外は `Piece::Empty`。
    #[inline]
    #[must_use]
    pub fn piece_at(&self, row: i32, col: i32) -> Piece {
        Square::new(row, col).map_or(Piece::Empty, |square| self.piece(square))
    }

    /// 指定マスに石を置く（石数は呼び出し側で更新する）。
    fn set(&mut self, square: Square, piece: Piece) {
        if let Some(cell) = self
            .cells
            .get_mut(usize::from(square.row()))
            .and_then(|row| row.get_mut(usize::from(square.col())))
        {
            *cell = piece;
        }
    }

    /// 手番を返す。
    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// 白石の数を返す。
    #[inline]
    #[must_use]
    pub const fn white_count(&self) -> u32 {
        self.white_count
    }

    /// 石数の多い側を返す。同数なら `Piece::Empty`。
    #[inline]
    #[must_use]
    pub fn winner(&self) -> Piece {
        match self.black_count.cmp(&self.white_count) {
            Ordering::Greater => Piece::Black,
            Ordering::Less => Piece::White,
            Ordering::Equal => Piece::Empty,
        }
    }
}

/// 全マスを行優先で列挙する。
fn squares() -> impl Iterator<Item = Square> {
    (u8::MIN..Square::BOARD_LEN).flat_map(|row| {
        (u8::MIN..Square::BOARD_LEN).map(move |col| Square::from_row_col_unchecked(row, col))
    })
}
