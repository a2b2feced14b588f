//! 探索モジュール
//!
//! - `Engine`: 局面から指し手を1つ選ぶエンジンの抽象
//! - `PvsEngine`: 反復深化 + PVS（Principal Variation Search）+ 置換表
//! - `MoveOrdering`: 指し手オーダリング戦略
//! - `Book`: 勝敗が確定したルート局面の指し手キャッシュ

mod book;
mod engine;
mod ordering;

pub use book::Book;
pub use engine::{PvsEngine, SearchResult};
pub use ordering::{MoveOrdering, ParseOrderingError};

use crate::position::Position;
use crate::types::Move;

/// 探索エラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// 終局局面で指し手を要求された
    #[error("no legal move in terminal position {0}")]
    NoLegalMoves(String),
}

/// 指し手選択エンジン
///
/// 実装は内部状態（置換表・定跡など）を持ってよいが、`reset` 後は
/// 新規に生成した状態と同じ振る舞いをすること。
pub trait Engine {
    /// 局面に対する指し手を選ぶ
    fn choose_move(&mut self, pos: &Position) -> Result<Move, SearchError>;

    /// 内部状態をクリアする
    fn reset(&mut self);
}
