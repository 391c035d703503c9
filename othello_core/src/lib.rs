//! Reversi (Othello) core logic.
//!
//! このクレートはゲーム進行を管理する `engine` と、手を選択する `ai` を提供します。
//! 描画・入力・起動引数は UI 側の責務で、UI は行・列（または `E4` 形式の表記）で
//! 着手を渡し、合法手・手番・石数・終局状態を問い合わせます。

#![forbid(unsafe_code)]

/// ゲームルール・局面・進行を提供するモジュール。
pub mod engine;

/// AI（手選択アルゴリズム）を提供するモジュール。
pub mod ai;

/// ログ出力（`tracing` 購読者）の設定。
pub mod logging;
