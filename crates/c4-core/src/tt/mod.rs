//! 置換表モジュール
//!
//! 探索結果をキャッシュする置換表（Transposition Table）。
//!
//! - `TTEntry`: エントリ（完全キー・評価値・深さ・境界種別・最善手）
//! - `TranspositionTable`: 2のべき乗サイズの直接マップ表
//!
//! キーは `Position::key()` をそのまま保存するため、衝突による誤ヒットは起きない。

mod table;

pub use table::{Bound, TTEntry, TranspositionTable};

/// デフォルトのエントリ数（2^18）
///
/// ロールアウトごとに全クリアするため大きくしすぎない。
pub const DEFAULT_TT_BITS: u32 = 18;
