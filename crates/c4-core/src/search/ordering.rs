//! 指し手オーダリング
//!
//! Alpha-Beta 探索の効率はカットオフを起こしやすい手を先に試せるかで決まる。
//!
//! - `Diff`: 静的評価の増分（`eval::move_gain`）が大きい順。同点は中央寄り優先
//! - `Center`: 中央の列から外側へ
//! - `Natural`: 列番号順
//!
//! いずれの戦略でも置換表の最善手があれば先頭に置く。

use std::fmt;
use std::str::FromStr;

use crate::eval::move_gain;
use crate::position::{MoveList, Position};
use crate::types::Move;

/// 中央から外側への列順
const CENTER_ORDER: [usize; 7] = [3, 2, 4, 1, 5, 0, 6];

/// 指し手オーダリング戦略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveOrdering {
    #[default]
    Diff,
    Center,
    Natural,
}

/// 未知のオーダリング名
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown move ordering {0:?} (expected diff, center or natural)")]
pub struct ParseOrderingError(String);

impl MoveOrdering {
    pub const fn as_str(self) -> &'static str {
        match self {
            MoveOrdering::Diff => "diff",
            MoveOrdering::Center => "center",
            MoveOrdering::Natural => "natural",
        }
    }

    /// 合法手を探索順に並べる。
    pub fn order(self, pos: &Position, tt_move: Option<Move>) -> MoveList {
        let mut moves: MoveList = match self {
            MoveOrdering::Natural => pos.legal_moves(),
            MoveOrdering::Center | MoveOrdering::Diff => CENTER_ORDER
                .iter()
                .filter_map(|&c| Move::new(c))
                .filter(|&m| pos.can_play(m))
                .collect(),
        };

        if self == MoveOrdering::Diff {
            // sort_by_cached_key は安定ソートなので同点は中央寄りのまま
            moves.sort_by_cached_key(|&m| {
                let gain = match pos.play(m) {
                    Ok(after) if after.is_terminal() => i32::MAX,
                    Ok(after) => move_gain(pos, &after),
                    Err(_) => i32::MIN,
                };
                std::cmp::Reverse(gain)
            });
        }

        if let Some(idx) = tt_move.and_then(|tt| moves.iter().position(|&m| m == tt)) {
            moves[..=idx].rotate_right(1);
        }
        moves
    }
}

impl fmt::Display for MoveOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoveOrdering {
    type Err = ParseOrderingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "diff" => Ok(MoveOrdering::Diff),
            "center" => Ok(MoveOrdering::Center),
            "natural" => Ok(MoveOrdering::Natural),
            _ => Err(ParseOrderingError(s.to_string())),
        }
    }
}
