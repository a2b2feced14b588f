//! FEN 形式の解析・出力
//!
//! 形式: 上段から下段へ6行を `/` で区切り、`r`=赤石、`y`=黄石、数字=空きマスの連続数。
//! 空白の後に手番（`r` / `y`）を置く。
//!
//! 例: 初期局面 `7/7/7/7/7/7 r`、列3に赤が着手した後 `7/7/7/7/7/3r3 y`

use super::Position;
use super::bitboard::{column_mask, has_alignment, square_bit};
use crate::types::{Color, HEIGHT, WIDTH};

/// 初期局面の FEN
pub const FEN_INITIAL: &str = "7/7/7/7/7/7 r";

/// FEN 解析エラー
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    #[error("expected '<board> <side>', got {0:?}")]
    Fields(String),

    #[error("expected 6 rows, got {0}")]
    RowCount(usize),

    #[error("row {row} has width {width}, expected 7")]
    RowWidth { row: usize, width: usize },

    #[error("invalid character {0:?} in board")]
    InvalidChar(char),

    #[error("invalid side to move {0:?}")]
    InvalidSide(String),

    #[error("floating stone in column {0}")]
    FloatingStone(usize),

    #[error("stone counts red={red} yellow={yellow} do not match side to move {side}")]
    StoneCount { red: u32, yellow: u32, side: Color },

    #[error("winner is inconsistent with side to move")]
    InconsistentWinner,
}

impl Position {
    /// FEN 文字列に変換する。
    pub fn to_fen(&self) -> String {
        let mut out = String::with_capacity(48);
        for row in (0..HEIGHT).rev() {
            let mut empty = 0;
            for col in 0..WIDTH {
                match self.cell(col, row) {
                    None => empty += 1,
                    Some(c) => {
                        if empty > 0 {
                            out.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        out.push(c.to_char());
                    }
                }
            }
            if empty > 0 {
                out.push(char::from(b'0' + empty));
            }
            if row > 0 {
                out.push('/');
            }
        }
        out.push(' ');
        out.push(self.side_to_move().to_char());
        out
    }

    /// FEN 文字列から局面を生成する。
    pub fn from_fen(fen: &str) -> Result<Position, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        let [board, side] = fields.as_slice() else {
            return Err(FenError::Fields(fen.to_string()));
        };

        let side = match side.chars().collect::<Vec<_>>().as_slice() {
            [c] => Color::from_char(*c).ok_or_else(|| FenError::InvalidSide(side.to_string()))?,
            _ => return Err(FenError::InvalidSide(side.to_string())),
        };

        let rows: Vec<&str> = board.split('/').collect();
        if rows.len() != HEIGHT {
            return Err(FenError::RowCount(rows.len()));
        }

        let mut red = 0u64;
        let mut yellow = 0u64;
        for (i, text) in rows.iter().enumerate() {
            let row = HEIGHT - 1 - i;
            let mut col = 0usize;
            for ch in text.chars() {
                if let Some(n) = ch.to_digit(10).filter(|n| (1..=WIDTH as u32).contains(n)) {
                    col += n as usize;
                    continue;
                }
                let color = Color::from_char(ch).ok_or(FenError::InvalidChar(ch))?;
                if col < WIDTH {
                    match color {
                        Color::Red => red |= square_bit(col, row),
                        Color::Yellow => yellow |= square_bit(col, row),
                    }
                }
                col += 1;
            }
            if col != WIDTH {
                return Err(FenError::RowWidth { row: i, width: col });
            }
        }

        // 重力: 各列の石は最下段から隙間なく積まれていること
        let mask = red | yellow;
        for col in 0..WIDTH {
            let bits = (mask & column_mask(col)) >> (col * (HEIGHT + 1));
            if bits & (bits + 1) != 0 {
                return Err(FenError::FloatingStone(col));
            }
        }

        let (r, y) = (red.count_ones(), yellow.count_ones());
        let expected_side = if r == y {
            Color::Red
        } else if r == y + 1 {
            Color::Yellow
        } else {
            return Err(FenError::StoneCount { red: r, yellow: y, side });
        };
        if side != expected_side {
            return Err(FenError::StoneCount { red: r, yellow: y, side });
        }

        // 勝者は直前に指した側（＝手番の相手）のみ
        let red_won = has_alignment(red);
        let yellow_won = has_alignment(yellow);
        if (red_won && (yellow_won || side != Color::Yellow)) || (yellow_won && side != Color::Red)
        {
            return Err(FenError::InconsistentWinner);
        }

        Ok(Position::from_stones(red, yellow, side))
    }
}
