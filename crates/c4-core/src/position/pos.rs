//! Position 本体

use smallvec::SmallVec;

use super::MoveError;
use super::bitboard::{bottom_mask, column_mask, has_alignment, square_bit, top_mask};
use crate::types::{BOARD_CELLS, Color, GameEnd, HEIGHT, Move, WIDTH};

/// 合法手リスト（最大 WIDTH 手）
pub type MoveList = SmallVec<[Move; WIDTH]>;

/// 局面
///
/// `current` は手番側の石、`mask` は盤上の全石。
/// 相手の石は `current ^ mask` で得られる。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    current: u64,
    mask: u64,
    ply: u32,
    side_to_move: Color,
    end: Option<GameEnd>,
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl Position {
    /// 初期局面（赤番）
    pub const fn new() -> Self {
        Position {
            current: 0,
            mask: 0,
            ply: 0,
            side_to_move: Color::Red,
            end: None,
        }
    }

    /// 各色の石から局面を組み立てる（FEN 解析用）。
    ///
    /// 重力・石数・勝者の整合性は呼び出し側で検証済みであること。
    pub(super) fn from_stones(red: u64, yellow: u64, side_to_move: Color) -> Self {
        let mask = red | yellow;
        let current = match side_to_move {
            Color::Red => red,
            Color::Yellow => yellow,
        };
        let ply = mask.count_ones();
        let end = if has_alignment(red) {
            Some(GameEnd::Win(Color::Red))
        } else if has_alignment(yellow) {
            Some(GameEnd::Win(Color::Yellow))
        } else if ply as usize == BOARD_CELLS {
            Some(GameEnd::Draw)
        } else {
            None
        };
        Position {
            current,
            mask,
            ply,
            side_to_move,
            end,
        }
    }

    /// 手番
    #[inline]
    pub const fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// 初期局面からの手数
    #[inline]
    pub const fn ply(&self) -> u32 {
        self.ply
    }

    /// 終局状態（対局中なら None）
    #[inline]
    pub const fn end(&self) -> Option<GameEnd> {
        self.end
    }

    /// 終局しているか
    #[inline]
    pub const fn is_terminal(&self) -> bool {
        self.end.is_some()
    }

    /// 置換表用のキー
    ///
    /// `current + mask` は局面ごとに一意になる（各列の最上段の石の1つ上にビットが立つ）。
    #[inline]
    pub const fn key(&self) -> u64 {
        self.current + self.mask
    }

    /// 指定色の石
    #[inline]
    pub const fn stones(&self, color: Color) -> u64 {
        if color as u8 == self.side_to_move as u8 {
            self.current
        } else {
            self.current ^ self.mask
        }
    }

    /// 指定マスの石
    pub fn cell(&self, column: usize, row: usize) -> Option<Color> {
        debug_assert!(column < WIDTH && row < HEIGHT);
        let bit = square_bit(column, row);
        if self.mask & bit == 0 {
            None
        } else if self.current & bit != 0 {
            Some(self.side_to_move)
        } else {
            Some(!self.side_to_move)
        }
    }

    /// 列に積まれている石の数
    #[inline]
    pub const fn column_height(&self, column: usize) -> usize {
        (self.mask & column_mask(column)).count_ones() as usize
    }

    /// 指し手が合法か
    #[inline]
    pub const fn can_play(&self, m: Move) -> bool {
        self.end.is_none() && self.mask & top_mask(m.column()) == 0
    }

    /// 合法手を列順に列挙する。終局局面では空。
    pub fn legal_moves(&self) -> MoveList {
        Move::ALL.iter().copied().filter(|&m| self.can_play(m)).collect()
    }

    /// この手で手番側が4連を作るか
    pub fn is_winning_move(&self, m: Move) -> bool {
        if !self.can_play(m) {
            return false;
        }
        let col = m.column();
        let dropped = (self.mask + bottom_mask(col)) & column_mask(col);
        has_alignment(self.current | dropped)
    }

    /// 手を指す（局面を更新）。
    pub fn do_move(&mut self, m: Move) -> Result<(), MoveError> {
        if self.end.is_some() {
            return Err(MoveError::GameOver);
        }
        if !self.can_play(m) {
            return Err(MoveError::ColumnFull(m));
        }
        let new_mask = self.mask | (self.mask + bottom_mask(m.column()));
        let mover = self.current | (new_mask ^ self.mask);
        self.ply += 1;
        self.end = if has_alignment(mover) {
            Some(GameEnd::Win(self.side_to_move))
        } else if self.ply as usize == BOARD_CELLS {
            Some(GameEnd::Draw)
        } else {
            None
        };
        self.current = mover ^ new_mask;
        self.mask = new_mask;
        self.side_to_move = !self.side_to_move;
        Ok(())
    }

    /// 手を指した後の局面を返す（自身は変更しない）。
    pub fn play(&self, m: Move) -> Result<Position, MoveError> {
        let mut next = *self;
        next.do_move(m)?;
        Ok(next)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_fen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(columns: &[usize]) -> Position {
        let mut pos = Position::new();
        for &c in columns {
            pos.do_move(Move::new(c).unwrap()).unwrap();
        }
        pos
    }

    #[test]
    fn test_initial_position() {
        let pos = Position::new();
        assert_eq!(pos.side_to_move(), Color::Red);
        assert_eq!(pos.ply(), 0);
        assert_eq!(pos.end(), None);
        assert_eq!(pos.legal_moves().len(), WIDTH);
    }

    #[test]
    fn test_stones_fall_and_side_alternates() {
        let pos = play_all(&[3, 3]);
        assert_eq!(pos.cell(3, 0), Some(Color::Red));
        assert_eq!(pos.cell(3, 1), Some(Color::Yellow));
        assert_eq!(pos.cell(3, 2), None);
        assert_eq!(pos.column_height(3), 2);
        assert_eq!(pos.side_to_move(), Color::Red);
        assert_eq!(pos.stones(Color::Red).count_ones(), 1);
        assert_eq!(pos.stones(Color::Yellow).count_ones(), 1);
    }

    #[test]
    fn test_vertical_win() {
        let pos = play_all(&[0, 1, 0, 1, 0, 1, 0]);
        assert_eq!(pos.end(), Some(GameEnd::Win(Color::Red)));
        assert!(pos.legal_moves().is_empty());
        assert_eq!(pos.play(Move::ALL[2]), Err(MoveError::GameOver));
    }

    #[test]
    fn test_winning_move_detection() {
        let pos = play_all(&[0, 1, 0, 1, 0, 1]);
        assert!(pos.is_winning_move(Move::ALL[0]));
        assert!(!pos.is_winning_move(Move::ALL[2]));
    }

    #[test]
    fn test_full_column_is_rejected() {
        let mut pos = play_all(&[3, 3, 3, 3, 3, 3]);
        assert_eq!(pos.column_height(3), HEIGHT);
        assert!(!pos.can_play(Move::ALL[3]));
        assert_eq!(pos.do_move(Move::ALL[3]), Err(MoveError::ColumnFull(Move::ALL[3])));
        // 失敗した着手で局面は変わらない
        assert_eq!(pos.ply(), 6);
    }

    #[test]
    fn test_draw_on_full_board() {
        // 最後の1マス（列0の最上段）以外が埋まった4連なしの局面
        let mut pos =
            Position::from_fen("1yrryyr/rryyrry/yyrryyr/rryyrry/yyrryyr/rryyrry y").unwrap();
        assert_eq!(pos.end(), None);
        assert_eq!(pos.legal_moves().as_slice(), &[Move::ALL[0]]);
        pos.do_move(Move::ALL[0]).unwrap();
        assert_eq!(pos.end(), Some(GameEnd::Draw));
        assert_eq!(pos.ply() as usize, BOARD_CELLS);
    }

    #[test]
    fn test_keys_differ_by_side_and_layout() {
        let a = play_all(&[0, 1]);
        let b = play_all(&[1, 0]);
        let c = play_all(&[0]);
        assert_ne!(a.key(), b.key());
        assert_ne!(a.key(), c.key());
        assert_eq!(play_all(&[0, 1, 2]).key(), play_all(&[2, 1, 0]).key());
    }
}
