//! PVS 探索エンジン
//!
//! 反復深化で深さ 1..=max_depth を順に探索し、各反復の最善手を置換表経由で
//! 次の反復のオーダリングに使う。葉では `eval::evaluate` を返す。
//!
//! 勝敗スコアは `Value::win_in(ply)` / `Value::lost_in(ply)` で表し、
//! 置換表にはノード相対の値で保存する（`value_to_tt` / `value_from_tt`）。

use super::{Book, Engine, MoveOrdering, SearchError};
use crate::eval::evaluate;
use crate::position::Position;
use crate::tt::{Bound, DEFAULT_TT_BITS, TranspositionTable};
use crate::types::{BOARD_CELLS, GameEnd, Move, Value};

/// 1回の探索結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Move,
    pub value: Value,
    /// 完了した反復の深さ（定跡・即勝ちの場合は 0）
    pub depth: u32,
    pub nodes: u64,
}

/// 反復深化 PVS エンジン
pub struct PvsEngine {
    max_depth: u32,
    ordering: MoveOrdering,
    tt: TranspositionTable,
    book: Book,
    nodes: u64,
}

impl PvsEngine {
    pub fn new(max_depth: u32, ordering: MoveOrdering) -> Self {
        Self::with_tt_bits(max_depth, ordering, DEFAULT_TT_BITS)
    }

    /// 置換表サイズ（2^bits エントリ）を指定して生成
    pub fn with_tt_bits(max_depth: u32, ordering: MoveOrdering, tt_bits: u32) -> Self {
        Self {
            max_depth: max_depth.clamp(1, BOARD_CELLS as u32),
            ordering,
            tt: TranspositionTable::new(tt_bits),
            book: Book::new(),
            nodes: 0,
        }
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn ordering(&self) -> MoveOrdering {
        self.ordering
    }

    /// reset 以降の累計探索ノード数
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn book(&self) -> &Book {
        &self.book
    }

    pub fn tt(&self) -> &TranspositionTable {
        &self.tt
    }

    /// 局面を探索して最善手を返す。
    pub fn search(&mut self, pos: &Position) -> Result<SearchResult, SearchError> {
        if pos.is_terminal() {
            return Err(SearchError::NoLegalMoves(pos.to_fen()));
        }
        let key = pos.key();
        let start_nodes = self.nodes;

        if let Some(m) = self.book.get(key) {
            log::trace!("book hit {m} at {pos}");
            return Ok(SearchResult {
                best_move: m,
                value: Value::ZERO,
                depth: 0,
                nodes: 0,
            });
        }

        let moves = self.ordering.order(pos, None);
        if let Some(&m) = moves.iter().find(|&&m| pos.is_winning_move(m)) {
            self.book.insert(key, m);
            return Ok(SearchResult {
                best_move: m,
                value: Value::win_in(1),
                depth: 0,
                nodes: 0,
            });
        }

        let remaining = (BOARD_CELLS as u32).saturating_sub(pos.ply());
        let mut best = SearchResult {
            best_move: moves[0],
            value: Value::ZERO,
            depth: 0,
            nodes: 0,
        };
        for depth in 1..=self.max_depth {
            let (value, m) = self.search_root(pos, depth);
            best.best_move = m;
            best.value = value;
            best.depth = depth;
            if value.is_decisive() || depth >= remaining {
                break;
            }
        }
        best.nodes = self.nodes - start_nodes;

        log::trace!(
            "search {pos}: best={} value={} depth={} nodes={}",
            best.best_move,
            best.value,
            best.depth,
            best.nodes
        );

        if best.value.is_decisive() {
            self.book.insert(key, best.best_move);
        }
        Ok(best)
    }

    fn search_root(&mut self, pos: &Position, depth: u32) -> (Value, Move) {
        let tt_move = self.tt.probe(pos.key()).and_then(|e| e.best_move);
        let moves = self.ordering.order(pos, tt_move);
        let mut alpha = -Value::INFINITE;
        let beta = Value::INFINITE;
        let mut best_move = moves[0];

        for (i, &m) in moves.iter().enumerate() {
            let Ok(child) = pos.play(m) else {
                continue;
            };
            let value = if i == 0 {
                -self.pvs(&child, depth - 1, -beta, -alpha, 1)
            } else {
                let v = -self.pvs(&child, depth - 1, -alpha - 1, -alpha, 1);
                if v > alpha && v < beta {
                    -self.pvs(&child, depth - 1, -beta, -alpha, 1)
                } else {
                    v
                }
            };
            if value > alpha {
                alpha = value;
                best_move = m;
            }
        }

        self.tt.store(
            pos.key(),
            value_to_tt(alpha, 0),
            tt_depth(depth),
            Bound::Exact,
            Some(best_move),
        );
        (alpha, best_move)
    }

    fn pvs(&mut self, pos: &Position, depth: u32, mut alpha: Value, beta: Value, ply: i32) -> Value {
        self.nodes += 1;

        match pos.end() {
            // 直前に指した側が勝者なので手番側の負け
            Some(GameEnd::Win(_)) => return Value::lost_in(ply),
            Some(GameEnd::Draw) => return Value::DRAW,
            None => {}
        }
        if pos.legal_moves().into_iter().any(|m| pos.is_winning_move(m)) {
            return Value::win_in(ply + 1);
        }
        if depth == 0 {
            return evaluate(pos);
        }

        let key = pos.key();
        let alpha_orig = alpha;
        let mut tt_move = None;
        if let Some(e) = self.tt.probe(key) {
            tt_move = e.best_move;
            if u32::from(e.depth) >= depth {
                let v = value_from_tt(e.value, ply);
                match e.bound {
                    Bound::Exact => return v,
                    Bound::Lower if v >= beta => return v,
                    Bound::Upper if v <= alpha => return v,
                    _ => {}
                }
            }
        }

        let moves = self.ordering.order(pos, tt_move);
        let mut best_value = -Value::INFINITE;
        let mut best_move = None;
        for (i, &m) in moves.iter().enumerate() {
            let Ok(child) = pos.play(m) else {
                continue;
            };
            let value = if i == 0 {
                -self.pvs(&child, depth - 1, -beta, -alpha, ply + 1)
            } else {
                let v = -self.pvs(&child, depth - 1, -alpha - 1, -alpha, ply + 1);
                if v > alpha && v < beta {
                    -self.pvs(&child, depth - 1, -beta, -alpha, ply + 1)
                } else {
                    v
                }
            };
            if value > best_value {
                best_value = value;
                best_move = Some(m);
            }
            if value > alpha {
                alpha = value;
            }
            if alpha >= beta {
                break;
            }
        }

        let bound = if best_value <= alpha_orig {
            Bound::Upper
        } else if best_value >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        };
        self.tt.store(key, value_to_tt(best_value, ply), tt_depth(depth), bound, best_move);
        best_value
    }
}

impl Engine for PvsEngine {
    fn choose_move(&mut self, pos: &Position) -> Result<Move, SearchError> {
        self.search(pos).map(|r| r.best_move)
    }

    fn reset(&mut self) {
        self.tt.clear();
        self.book.clear();
        self.nodes = 0;
    }
}

#[inline]
fn tt_depth(depth: u32) -> u8 {
    depth.min(u32::from(u8::MAX)) as u8
}

/// 勝敗スコアをノード相対に変換して保存
#[inline]
fn value_to_tt(v: Value, ply: i32) -> Value {
    if v.is_win() {
        v + ply
    } else if v.is_loss() {
        v - ply
    } else {
        v
    }
}

/// 保存値をルート相対に戻す
#[inline]
fn value_from_tt(v: Value, ply: i32) -> Value {
    if v.is_win() {
        v - ply
    } else if v.is_loss() {
        v + ply
    } else {
        v
    }
}
