//! ルート局面の指し手キャッシュ
//!
//! 勝敗が確定した（読み切った）局面の指し手を保持する。
//! ロールアウト中は同じ手順が何度も現れるため、2回目以降は探索を省略できる。

use std::collections::HashMap;

use crate::types::Move;

#[derive(Debug, Default)]
pub struct Book {
    moves: HashMap<u64, Move>,
}

impl Book {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: u64) -> Option<Move> {
        self.moves.get(&key).copied()
    }

    pub fn insert(&mut self, key: u64, m: Move) {
        self.moves.insert(key, m);
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}
