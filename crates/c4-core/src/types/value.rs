//! 評価値（Value）
//!
//! `Value::WIN` 付近を勝敗確定スコアとして予約している。
//! 静的評価は [-WIN_IN_MAX_PLY, WIN_IN_MAX_PLY] の十分内側に収まる。

use super::BOARD_CELLS;

/// 評価値（手番側視点）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Value(i32);

impl Value {
    /// ゼロ
    pub const ZERO: Value = Value(0);
    /// 引き分け
    pub const DRAW: Value = Value(0);
    /// 勝ち（勝ち側の最大スコア）
    pub const WIN: Value = Value(10_000);
    /// 無限大
    pub const INFINITE: Value = Value(10_001);

    /// 盤が埋まるまでの手数内での勝ちスコア
    pub const WIN_IN_MAX_PLY: Value = Value(Self::WIN.0 - BOARD_CELLS as i32 - 1);
    /// 盤が埋まるまでの手数内での負けスコア
    pub const LOST_IN_MAX_PLY: Value = Value(-Self::WIN_IN_MAX_PLY.0);

    /// 値から生成
    #[inline]
    pub const fn new(v: i32) -> Value {
        Value(v)
    }

    /// ply手で勝つスコア
    #[inline]
    pub const fn win_in(ply: i32) -> Value {
        Value(Self::WIN.0 - ply)
    }

    /// ply手で負けるスコア
    #[inline]
    pub const fn lost_in(ply: i32) -> Value {
        Value(-Self::WIN.0 + ply)
    }

    /// 勝ちスコアかどうか
    #[inline]
    pub const fn is_win(self) -> bool {
        self.0 >= Self::WIN_IN_MAX_PLY.0
    }

    /// 負けスコアかどうか
    #[inline]
    pub const fn is_loss(self) -> bool {
        self.0 <= Self::LOST_IN_MAX_PLY.0
    }

    /// 勝敗確定スコアかどうか
    #[inline]
    pub const fn is_decisive(self) -> bool {
        self.is_win() || self.is_loss()
    }

    /// 生の値を取得
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::ZERO
    }
}

impl std::ops::Neg for Value {
    type Output = Value;

    #[inline]
    fn neg(self) -> Value {
        Value(-self.0)
    }
}

impl std::ops::Add<i32> for Value {
    type Output = Value;

    #[inline]
    fn add(self, rhs: i32) -> Value {
        Value(self.0 + rhs)
    }
}

impl std::ops::Sub<i32> for Value {
    type Output = Value;

    #[inline]
    fn sub(self, rhs: i32) -> Value {
        Value(self.0 - rhs)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
