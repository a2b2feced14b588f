//! 置換表本体

use crate::types::{Move, Value};

/// 評価値の境界種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bound {
    /// 未使用エントリ
    #[default]
    None,
    /// 正確な値
    Exact,
    /// 下限（fail-high）
    Lower,
    /// 上限（fail-low）
    Upper,
}

/// 置換表エントリ
#[derive(Debug, Clone, Copy, Default)]
pub struct TTEntry {
    pub key: u64,
    pub value: Value,
    pub depth: u8,
    pub bound: Bound,
    pub best_move: Option<Move>,
}

/// 置換表
pub struct TranspositionTable {
    entries: Vec<TTEntry>,
    bits: u32,
    used: usize,
}

impl TranspositionTable {
    /// 2^bits エントリの置換表を作成
    pub fn new(bits: u32) -> Self {
        assert!((1..=30).contains(&bits), "tt bits out of range: {bits}");
        Self {
            entries: vec![TTEntry::default(); 1 << bits],
            bits,
            used: 0,
        }
    }

    #[inline]
    fn index(&self, key: u64) -> usize {
        (key.wrapping_mul(0x9E37_79B9_7F4A_7C15) >> (64 - self.bits)) as usize
    }

    /// 全エントリをクリア
    pub fn clear(&mut self) {
        self.entries.fill(TTEntry::default());
        self.used = 0;
    }

    /// キーに一致するエントリを返す
    pub fn probe(&self, key: u64) -> Option<TTEntry> {
        let entry = self.entries[self.index(key)];
        (entry.bound != Bound::None && entry.key == key).then_some(entry)
    }

    /// エントリを書き込む
    ///
    /// 同一キーまたは空きなら常に上書き。別キーの場合は深さが同等以上のときのみ置換する。
    pub fn store(&mut self, key: u64, value: Value, depth: u8, bound: Bound, best_move: Option<Move>) {
        let idx = self.index(key);
        let slot = &mut self.entries[idx];
        if slot.bound == Bound::None {
            self.used += 1;
        } else if slot.key != key && slot.depth > depth {
            return;
        }
        *slot = TTEntry {
            key,
            value,
            depth,
            bound,
            best_move,
        };
    }

    /// 使用中エントリ数
    pub fn len(&self) -> usize {
        self.used
    }

    /// 空かどうか
    pub fn is_empty(&self) -> bool {
        self.used == 0
    }
}
