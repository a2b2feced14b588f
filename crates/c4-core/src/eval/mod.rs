//! 静的評価
//!
//! 盤上の全4連ウィンドウ（69本）を走査し、片方の石だけが入ったウィンドウを
//! 石数に応じて加点する。中央列の石には追加ボーナスを与える。
//! 終局判定は行わない（探索側で処理する）。

use std::sync::LazyLock;

use crate::position::Position;
use crate::position::bitboard::{column_mask, square_bit};
use crate::types::{HEIGHT, Value, WIDTH};

/// ウィンドウ内の石数ごとの点数（4個は勝ちなので探索側で扱う）
const WINDOW_WEIGHTS: [i32; 5] = [0, 1, 4, 16, 0];

/// 中央列の石1つあたりのボーナス
const CENTER_BONUS: i32 = 3;

/// 4連になり得る全ウィンドウ
static WINDOWS: LazyLock<Vec<u64>> = LazyLock::new(|| {
    let mut windows = Vec::with_capacity(69);
    // (dc, dr): 横・縦・右上がり・右下がり
    let directions: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];
    for col in 0..WIDTH as isize {
        for row in 0..HEIGHT as isize {
            for (dc, dr) in directions {
                let end_col = col + 3 * dc;
                let end_row = row + 3 * dr;
                if !(0..WIDTH as isize).contains(&end_col) || !(0..HEIGHT as isize).contains(&end_row)
                {
                    continue;
                }
                let w = (0..4).fold(0u64, |acc, i| {
                    acc | square_bit((col + i * dc) as usize, (row + i * dr) as usize)
                });
                windows.push(w);
            }
        }
    }
    windows
});

/// 手番側視点の静的評価値
pub fn evaluate(pos: &Position) -> Value {
    let us = pos.stones(pos.side_to_move());
    let them = pos.stones(!pos.side_to_move());

    let mut score = 0i32;
    for &w in WINDOWS.iter() {
        let own = (w & us).count_ones() as usize;
        let opp = (w & them).count_ones() as usize;
        if opp == 0 {
            score += WINDOW_WEIGHTS[own];
        } else if own == 0 {
            score -= WINDOW_WEIGHTS[opp];
        }
    }

    let center = column_mask(WIDTH / 2);
    score += CENTER_BONUS * ((us & center).count_ones() as i32 - (them & center).count_ones() as i32);

    Value::new(score)
}

/// 指し手による評価値の変化量（指した側の視点）
///
/// 着手後の局面を相手視点で評価したものを反転し、着手前の評価値との差を取る。
/// 終局局面では呼ばないこと。
pub fn move_gain(before: &Position, after: &Position) -> i32 {
    (-evaluate(after)).raw() - evaluate(before).raw()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Move;

    #[test]
    fn test_window_count() {
        // 横24 + 縦21 + 斜め12×2
        assert_eq!(WINDOWS.len(), 69);
    }

    #[test]
    fn test_initial_position_is_balanced() {
        assert_eq!(evaluate(&Position::new()), Value::ZERO);
    }

    #[test]
    fn test_center_move_beats_edge_move() {
        let root = Position::new();
        let center = root.play(Move::ALL[3]).unwrap();
        let edge = root.play(Move::ALL[0]).unwrap();
        assert!(move_gain(&root, &center) > move_gain(&root, &edge));
    }

    #[test]
    fn test_evaluation_is_antisymmetric_in_perspective() {
        // 着手直後の評価は相手視点なので、指した側が有利なら負になる
        let pos = Position::new().play(Move::ALL[3]).unwrap();
        assert!(evaluate(&pos) < Value::ZERO);
        assert!(evaluate(&pos).raw().abs() < Value::WIN_IN_MAX_PLY.raw());
    }
}
