//! 棋譜表記（`E4` 形式、列 A-H ＋ 1 始まりの行）の変換。

use core::str::FromStr;

use crate::engine::types::{Move, Square};

/// パスを表すトークン（大文字小文字は区別しない）。
const PASS_TOKEN: &str = "pass";

/// 表記の解析に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseMoveError {
    /// 2文字未満、または列が A-H 以外。
    #[error("invalid move format")]
    InvalidFormat,
    /// 行・列が盤外。
    #[error("position out of bounds")]
    OutOfBounds,
}

/// 座標を表記に変換する。盤外（パスの `(-1, -1)` を含む）は `"Pass"`。
#[inline]
#[must_use]
pub fn format(row: i32, col: i32) -> String {
    Square::new(row, col).map_or_else(|| Move::Pass.to_string(), |square| square.to_string())
}

/// 表記を解析する。
///
/// 行は先頭の符号付き整数だけを読み、続く文字は無視する（`E4x` は `E4`）。
///
/// # Errors
///
/// - `ParseMoveError::InvalidFormat`: 2文字未満、または列が A-H 以外の場合
/// - `ParseMoveError::OutOfBounds`: 行が読めない、または 1..=8 の範囲外の場合
#[inline]
pub fn parse(text: &str) -> Result<Move, ParseMoveError> {
    let trimmed = text.trim();
    if trimmed.len() < 2 {
        return Err(ParseMoveError::InvalidFormat);
    }

    if trimmed.eq_ignore_ascii_case(PASS_TOKEN) {
        return Ok(Move::Pass);
    }

    let mut chars = trimmed.chars();
    let file = chars.next().ok_or(ParseMoveError::InvalidFormat)?;
    let col = match file.to_ascii_uppercase() {
        letter @ 'A'..='H' => i32::from(u8::try_from(letter).unwrap_or(b'A').wrapping_sub(b'A')),
        _ => return Err(ParseMoveError::InvalidFormat),
    };

    // 行が読めなければ 0 行目（盤外）とする。
    let rank = leading_integer(chars.as_str()).unwrap_or(0);
    let row = rank.saturating_sub(1);

    Square::new(row, col)
        .map(Move::Place)
        .ok_or(ParseMoveError::OutOfBounds)
}

/// 先頭の空白を飛ばし、符号付き10進整数を読む。数字がなければ `None`。
///
/// 桁あふれは符号に応じて `i32::MAX` / `-i32::MAX` に丸める。
fn leading_integer(text: &str) -> Option<i32> {
    let text = text.trim_start();
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = unsigned
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = unsigned.get(..end).filter(|digits| !digits.is_empty())?;
    let magnitude = digits.parse::<i32>().unwrap_or(i32::MAX);
    Some(if negative { magnitude.wrapping_neg() } else { magnitude })
}

impl FromStr for Move {
    type Err = ParseMoveError;

    #[inline]
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse(text)
    }
}
