//! 指し手（Move）
//!
//! 四目並べの指し手は石を落とす列のみで表される。

use std::fmt;

use super::WIDTH;
use crate::position::MoveError;

/// 指し手（列インデックス 0..WIDTH）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Move(u8);

impl Move {
    /// 全列を左から順に並べたもの
    pub const ALL: [Move; WIDTH] = [Move(0), Move(1), Move(2), Move(3), Move(4), Move(5), Move(6)];

    /// 列インデックスから生成（範囲外なら None）
    #[inline]
    pub const fn new(column: usize) -> Option<Move> {
        if column < WIDTH {
            Some(Move(column as u8))
        } else {
            None
        }
    }

    /// 棋譜などの整数表現から生成する。
    pub fn from_index(index: i32) -> Result<Move, MoveError> {
        usize::try_from(index)
            .ok()
            .and_then(Move::new)
            .ok_or(MoveError::OutOfRange(index))
    }

    /// 列インデックス
    #[inline]
    pub const fn column(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_index_bounds() {
        assert_eq!(Move::from_index(0).map(Move::column), Ok(0));
        assert_eq!(Move::from_index(6).map(Move::column), Ok(6));
        assert_eq!(Move::from_index(7), Err(MoveError::OutOfRange(7)));
        assert_eq!(Move::from_index(-1), Err(MoveError::OutOfRange(-1)));
    }

    #[test]
    fn test_display_is_column_index() {
        assert_eq!(Move::ALL[3].to_string(), "3");
    }
}
