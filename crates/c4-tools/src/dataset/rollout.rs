//! 自己対局ロールアウト
//!
//! サンプル局面からエンジンに1手ずつ選ばせ、終局するか手数上限に達するまで進める。
//! エンジンの内部状態（置換表・定跡）は `RolloutContext` のスコープを抜けるときに
//! 必ずリセットされる。エラーで抜けた場合も同様で、リセットは1回の呼び出しにつき1回。

use std::num::NonZeroU32;
use std::ops::{Deref, DerefMut};

use c4_core::search::Engine;
use c4_core::{Move, Position};

use super::DatasetError;

/// ロールアウト中のエンジン占有。Drop 時にエンジンをリセットする。
pub struct RolloutContext<'a, E: Engine + ?Sized> {
    engine: &'a mut E,
}

impl<'a, E: Engine + ?Sized> RolloutContext<'a, E> {
    pub fn acquire(engine: &'a mut E) -> Self {
        Self { engine }
    }
}

impl<E: Engine + ?Sized> Deref for RolloutContext<'_, E> {
    type Target = E;

    fn deref(&self) -> &E {
        self.engine
    }
}

impl<E: Engine + ?Sized> DerefMut for RolloutContext<'_, E> {
    fn deref_mut(&mut self) -> &mut E {
        self.engine
    }
}

impl<E: Engine + ?Sized> Drop for RolloutContext<'_, E> {
    fn drop(&mut self) {
        self.engine.reset();
    }
}

/// ロールアウト結果
#[derive(Debug, Clone)]
pub struct Rollout {
    moves: Vec<Move>,
    final_position: Position,
}

impl Rollout {
    /// 最初に選ばれた指し手
    ///
    /// ロールアウトは非終局局面からしか始まらないため、指し手列は空にならない。
    pub fn first_move(&self) -> Move {
        self.moves[0]
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn final_position(&self) -> &Position {
        &self.final_position
    }

    /// 手数上限で打ち切られたか
    pub fn is_truncated(&self) -> bool {
        !self.final_position.is_terminal()
    }
}

/// `start` からロールアウトを実行する。
///
/// `limit` を指定した場合はその手数を指した時点で打ち切る。
/// 最後の1手で終局した場合は終局として扱う。
pub fn run_rollout<E: Engine + ?Sized>(
    engine: &mut E,
    start: &Position,
    limit: Option<NonZeroU32>,
) -> Result<Rollout, DatasetError> {
    let mut ctx = RolloutContext::acquire(engine);
    if start.is_terminal() {
        return Err(DatasetError::TerminalStart(start.to_fen()));
    }

    let mut remaining = limit.map(NonZeroU32::get);
    let mut pos = *start;
    let mut moves = Vec::new();
    while !pos.is_terminal() {
        let m = ctx.choose_move(&pos)?;
        pos.do_move(m).map_err(|source| DatasetError::IllegalMove {
            ply: pos.ply() as usize + 1,
            source,
        })?;
        moves.push(m);

        if let Some(r) = remaining.as_mut() {
            *r -= 1;
            if *r == 0 {
                break;
            }
        }
    }

    Ok(Rollout {
        moves,
        final_position: pos,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::test_support::{FixedEngine, LeftmostEngine};
    use c4_core::{Color, GameEnd};

    fn position(columns: &[usize]) -> Position {
        let mut pos = Position::new();
        for &c in columns {
            pos.do_move(Move::new(c).unwrap()).unwrap();
        }
        pos
    }

    #[test]
    fn test_rollout_plays_to_terminal_and_resets_once() {
        let mut engine = LeftmostEngine::default();
        let start = position(&[3]);
        let rollout = run_rollout(&mut engine, &start, None).unwrap();
        assert!(!rollout.is_truncated());
        assert_eq!(rollout.first_move(), Move::ALL[0]);
        assert_eq!(rollout.moves().len(), engine.choose_calls);
        assert_eq!(engine.resets, 1);
        // 左の列から順に埋めていくと36手目で赤が4連を作る
        assert_eq!(rollout.moves().len(), 36);
        assert_eq!(rollout.final_position().end(), Some(GameEnd::Win(Color::Red)));
    }

    #[test]
    fn test_limit_truncates_rollout() {
        let mut engine = LeftmostEngine::default();
        let start = position(&[3]);
        let rollout = run_rollout(&mut engine, &start, NonZeroU32::new(2)).unwrap();
        assert!(rollout.is_truncated());
        assert_eq!(rollout.moves().len(), 2);
        assert_eq!(rollout.final_position().ply(), 3);
        assert_eq!(engine.resets, 1);
    }

    #[test]
    fn test_terminal_on_last_allowed_move_is_not_truncated() {
        // 赤は列0で縦4連を完成できる
        let mut engine = LeftmostEngine::default();
        let start = position(&[0, 1, 0, 1, 0, 1]);
        let rollout = run_rollout(&mut engine, &start, NonZeroU32::new(1)).unwrap();
        assert!(!rollout.is_truncated());
        assert_eq!(rollout.final_position().end(), Some(GameEnd::Win(Color::Red)));
    }

    #[test]
    fn test_terminal_start_is_rejected_but_still_resets() {
        let mut engine = LeftmostEngine::default();
        let start = position(&[0, 1, 0, 1, 0, 1, 0]);
        let err = run_rollout(&mut engine, &start, None).unwrap_err();
        assert!(matches!(err, DatasetError::TerminalStart(_)));
        assert_eq!(engine.choose_calls, 0);
        assert_eq!(engine.resets, 1);
    }

    #[test]
    fn test_illegal_engine_move_resets_engine() {
        // 列3は6手で埋まるので7手目は非合法
        let mut engine = FixedEngine {
            column: Move::ALL[3],
            resets: 0,
        };
        let start = position(&[3]);
        let err = run_rollout(&mut engine, &start, None).unwrap_err();
        assert!(matches!(err, DatasetError::IllegalMove { ply: 7, .. }));
        assert_eq!(engine.resets, 1);
    }

    #[test]
    fn test_context_resets_on_drop() {
        let mut engine = LeftmostEngine::default();
        {
            let mut ctx = RolloutContext::acquire(&mut engine);
            ctx.choose_move(&Position::new()).unwrap();
            assert_eq!(ctx.resets, 0);
        }
        assert_eq!(engine.resets, 1);
        assert_eq!(engine.choose_calls, 1);
    }
}
