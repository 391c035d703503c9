use core::fmt;

/// 手番（石の色）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Color {
    /// 先手。
    Black,
    /// 後手。
    White,
}

impl Color {
    /// 相手側の色を返す。
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }
}

impl fmt::Display for Color {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match *self {
            Self::Black => "Black",
            Self::White => "White",
        })
    }
}

/// マスの状態。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Piece {
    /// 空きマス。
    #[default]
    Empty,
    /// 黒石。
    Black,
    /// 白石。
    White,
}

impl Piece {
    /// 石の色を返す（空きマスなら `None`）。
    #[inline]
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Self::Empty => None,
            Self::Black => Some(Color::Black),
            Self::White => Some(Color::White),
        }
    }
}

impl From<Color> for Piece {
    #[inline]
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Self::Black,
            Color::White => Self::White,
        }
    }
}

impl fmt::Display for Piece {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match *self {
            Self::Empty => "Empty",
            Self::Black => "Black",
            Self::White => "White",
        })
    }
}

/// 盤面上のマス（行・列ともに 0..8）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Square {
    /// 行（0..=7）。
    row: u8,
    /// 列（0..=7）。
    col: u8,
}

impl Square {
    /// 盤の一辺の長さ。
    pub const BOARD_LEN: u8 = 8;

    /// 盤面座標（row, col）から `Square` を生成する。盤外なら `None`。
    #[inline]
    #[must_use]
    pub fn new(row: i32, col: i32) -> Option<Self> {
        let row_u8 = u8::try_from(row).ok()?;
        let col_u8 = u8::try_from(col).ok()?;
        if row_u8 >= Self::BOARD_LEN || col_u8 >= Self::BOARD_LEN {
            return None;
        }

        Some(Self {
            row: row_u8,
            col: col_u8,
        })
    }

    /// 行・列が範囲内であることが分かっている場合の生成（crate 内部向け）。
    #[inline]
    pub(crate) const fn from_row_col_unchecked(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// 行（0..=7）を返す。
    #[inline]
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// 列（0..=7）を返す。
    #[inline]
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// 行優先の 0..=63 のインデックスを返す。
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        self.row
            .wrapping_mul(Self::BOARD_LEN)
            .wrapping_add(self.col)
    }

    /// 行・列を `i32` の組で返す。
    #[inline]
    #[must_use]
    pub fn coords(self) -> (i32, i32) {
        (i32::from(self.row), i32::from(self.col))
    }
}

impl fmt::Display for Square {
    /// `E4` 形式（列は A-H、行は 1 始まり）で表示する。
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'A'.wrapping_add(self.col));
        let rank = self.row.wrapping_add(1);
        write!(f, "{file}{rank}")
    }
}

/// 1手（打つ/パス）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Move {
    /// パス。
    Pass,
    /// 指定マスへ着手。
    Place(Square),
}

impl Move {
    /// 指定マスへの着手なら `Some(square)` を返す。
    #[inline]
    #[must_use]
    pub const fn square(self) -> Option<Square> {
        match self {
            Self::Pass => None,
            Self::Place(square) => Some(square),
        }
    }
}

impl fmt::Display for Move {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Pass => f.write_str("Pass"),
            Self::Place(square) => square.fmt(f),
        }
    }
}

/// 棋譜の1エントリ（誰がどの手を指したか）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Record {
    /// 手を指した側。
    pub color: Color,
    /// 指した手。
    pub mv: Move,
}

impl Record {
    /// 着手位置を `(row, col)` で返す。パスは `(-1, -1)`。
    #[inline]
    #[must_use]
    pub fn position(self) -> (i32, i32) {
        self.mv.square().map_or((-1_i32, -1_i32), Square::coords)
    }
}
