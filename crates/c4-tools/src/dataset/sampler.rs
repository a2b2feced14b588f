//! 途中局面のサンプリング
//!
//! 長さ N の棋譜から k ∈ [1, N-1] を一様に選び、先頭 k 手を初期局面から再現する。
//! 空の接頭辞（初期局面）と棋譜全体（終局局面）は選ばれない。

use c4_core::{Move, Position};
use rand::Rng;

use super::{DatasetError, GameLog};

/// サンプルした途中局面
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampledPosition {
    pub position: Position,
    /// 再現した手数
    pub prefix_len: usize,
}

/// 棋譜の先頭 `prefix_len` 手を初期局面から再現する。
pub fn replay_prefix(log: &GameLog, prefix_len: usize) -> Result<Position, DatasetError> {
    debug_assert!(prefix_len <= log.len());
    let mut pos = Position::new();
    for (ply, &index) in log.moves().iter().take(prefix_len).enumerate() {
        Move::from_index(index)
            .and_then(|m| pos.do_move(m))
            .map_err(|source| DatasetError::IllegalMove { ply: ply + 1, source })?;
    }
    Ok(pos)
}

/// ランダムな途中局面を選ぶ。
///
/// 乱数は1回だけ消費する（棋譜が短すぎる場合は消費しない）。
/// 再現した局面が終局していた場合は `TerminalSample` を返す。
pub fn sample_position<R: Rng + ?Sized>(
    log: &GameLog,
    rng: &mut R,
) -> Result<SampledPosition, DatasetError> {
    let len = log.len();
    if len < 2 {
        return Err(DatasetError::TooShort { len });
    }
    let prefix_len = rng.random_range(1..len);
    let position = replay_prefix(log, prefix_len)?;
    if position.is_terminal() {
        return Err(DatasetError::TerminalSample {
            prefix_len,
            fen: position.to_fen(),
        });
    }
    Ok(SampledPosition {
        position,
        prefix_len,
    })
}
