//! Bitboard ユーティリティ
//!
//! レイアウト: bit = column * (HEIGHT + 1) + row（row 0 が最下段）。
//! 各列の最上段の上に番兵ビットを1つ置き、シフトで列をまたいだ誤検出を防ぐ。

use crate::types::{HEIGHT, WIDTH};

/// 1列あたりのビット数（番兵込み）
pub(crate) const COLUMN_BITS: usize = HEIGHT + 1;

/// 列の最下段のビット
#[inline]
pub(crate) const fn bottom_mask(column: usize) -> u64 {
    1u64 << (column * COLUMN_BITS)
}

/// 列の最上段のビット
#[inline]
pub(crate) const fn top_mask(column: usize) -> u64 {
    1u64 << (HEIGHT - 1 + column * COLUMN_BITS)
}

/// 列全体（番兵を除く）
#[inline]
pub(crate) const fn column_mask(column: usize) -> u64 {
    ((1u64 << HEIGHT) - 1) << (column * COLUMN_BITS)
}

/// 指定マスのビット
#[inline]
pub(crate) const fn square_bit(column: usize, row: usize) -> u64 {
    1u64 << (column * COLUMN_BITS + row)
}

/// 盤上の全マス（番兵を除く）
pub(crate) const BOARD_MASK: u64 = {
    let mut m = 0u64;
    let mut c = 0;
    while c < WIDTH {
        m |= column_mask(c);
        c += 1;
    }
    m
};

/// 4連が存在するか
#[inline]
pub(crate) const fn has_alignment(stones: u64) -> bool {
    // 横
    let m = stones & (stones >> COLUMN_BITS);
    if m & (m >> (2 * COLUMN_BITS)) != 0 {
        return true;
    }
    // 斜め（右下がり）
    let m = stones & (stones >> HEIGHT);
    if m & (m >> (2 * HEIGHT)) != 0 {
        return true;
    }
    // 斜め（右上がり）
    let m = stones & (stones >> (HEIGHT + 2));
    if m & (m >> (2 * (HEIGHT + 2))) != 0 {
        return true;
    }
    // 縦
    let m = stones & (stones >> 1);
    m & (m >> 2) != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masks_do_not_overlap() {
        for c in 0..WIDTH {
            assert_eq!(column_mask(c) & top_mask(c), top_mask(c));
            assert_eq!(column_mask(c) & bottom_mask(c), bottom_mask(c));
            for other in (c + 1)..WIDTH {
                assert_eq!(column_mask(c) & column_mask(other), 0);
            }
        }
        assert_eq!(BOARD_MASK.count_ones() as usize, WIDTH * HEIGHT);
    }

    #[test]
    fn test_alignment_directions() {
        let vertical = (0..4).fold(0, |b, r| b | square_bit(2, r));
        let horizontal = (1..5).fold(0, |b, c| b | square_bit(c, 0));
        let diag_up = (0..4).fold(0, |b, i| b | square_bit(i, i));
        let diag_down = (0..4).fold(0, |b, i| b | square_bit(3 + i, 3 - i));
        assert!(has_alignment(vertical));
        assert!(has_alignment(horizontal));
        assert!(has_alignment(diag_up));
        assert!(has_alignment(diag_down));
    }

    #[test]
    fn test_no_wraparound_between_columns() {
        // 列0の上段3つ + 列1の最下段は縦に4つ並んで見えてはならない
        let stones = square_bit(0, 3) | square_bit(0, 4) | square_bit(0, 5) | square_bit(1, 0);
        assert!(!has_alignment(stones));
        let three = (0..3).fold(0, |b, r| b | square_bit(4, r));
        assert!(!has_alignment(three));
    }
}
