//! 四目並べエンジン用の学習データ生成ツール群
//!
//! - `common`: gzip 対応の入出力ユーティリティ
//! - `dataset`: 棋譜からの局面サンプリング → 自己対局ロールアウト → ラベル付きレコード出力

pub mod common;
pub mod dataset;
