//! `tracing` の購読者（subscriber）設定。
//!
//! ライブラリ自身は購読者を登録しない。UI 側が起動時に一度だけ呼ぶ。

use tracing::Level;

/// ログの出力形式。
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
#[non_exhaustive]
pub enum LogFormat {
    /// 1行1イベントの JSON。
    Json,
    /// 人が読むためのテキスト。
    #[default]
    Pretty,
}

/// 購読者の登録に失敗した理由。
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum InitError {
    /// すでにグローバルな購読者が登録されている。
    #[error("failed to install tracing subscriber: {0}")]
    AlreadyInstalled(String),
}

/// `format` と `level` でグローバルな購読者を登録する。
///
/// # Errors
///
/// すでに購読者が登録されている場合は `InitError::AlreadyInstalled` を返す。
#[inline]
pub fn try_init(format: LogFormat, level: Level) -> Result<(), InitError> {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(true);

    let result = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };

    result.map_err(|err| InitError::AlreadyInstalled(err.to_string()))
}
