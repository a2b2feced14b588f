//! 局面表現モジュール
//!
//! 四目並べの局面を表現し、手の実行を行う。
//!
//! - `Position`: 局面本体（手番側の石・全石の Bitboard、手番、手数、終局状態）
//! - `MoveError`: 着手できない理由
//! - FEN 形式の解析・出力
//!
//! `Position` は `Copy` であり、探索・ロールアウトでは値として複製して使う。
//! 終局状態は着手時に更新され、`end()` は常に盤面と整合している。

pub(crate) mod bitboard;
mod fen;
mod pos;

pub use fen::{FenError, FEN_INITIAL};
pub use pos::{MoveList, Position};

use crate::types::Move;

/// 着手エラー
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// 列インデックスが盤外
    #[error("move index {0} is outside columns 0..7")]
    OutOfRange(i32),

    /// 列が埋まっている
    #[error("column {0} is full")]
    ColumnFull(Move),

    /// 既に終局している
    #[error("game is already over")]
    GameOver,
}
