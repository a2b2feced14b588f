//! 四目並べ（Connect Four）エンジンのコアライブラリ
//!
//! - `types`: 手番・指し手・評価値などの基本型
//! - `position`: Bitboard による局面表現と FEN 形式
//! - `eval`: 4連ウィンドウによる静的評価
//! - `tt`: 置換表
//! - `search`: PVS 探索エンジンと `Engine` トレイト

pub mod eval;
pub mod position;
pub mod search;
pub mod tt;
pub mod types;

pub use position::Position;
pub use types::{Color, GameEnd, Move, Value};
