//! 棋譜ファイル
//!
//! 1行に1手、石を落とす列のインデックスを書いたテキスト。空行は無視する。
//! 値の範囲や合法性はここでは検証しない（再現時に盤面側で検証される）。

use std::io::BufRead;
use std::path::Path;

use super::DatasetError;
use crate::common::io::open_reader;

/// 1局分の棋譜
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameLog {
    moves: Vec<i32>,
}

impl GameLog {
    pub fn new(moves: Vec<i32>) -> Self {
        Self { moves }
    }

    /// テキストから読み込む
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, DatasetError> {
        let mut moves = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let text = line.trim();
            if text.is_empty() {
                continue;
            }
            let m = text.parse::<i32>().map_err(|_| DatasetError::MalformedLine {
                line: idx + 1,
                content: text.to_string(),
            })?;
            moves.push(m);
        }
        Ok(Self { moves })
    }

    /// ファイルから読み込む（`.gz` は展開）
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        Self::from_reader(open_reader(path)?)
    }

    pub fn moves(&self) -> &[i32] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_blank_lines() {
        let log = GameLog::from_reader("3\n\n  2 \n4\n\n".as_bytes()).unwrap();
        assert_eq!(log.moves(), &[3, 2, 4]);
    }

    #[test]
    fn test_parse_keeps_out_of_range_values() {
        // 範囲外の列は盤面に適用した時点でエラーになる
        let log = GameLog::from_reader("9\n-1\n".as_bytes()).unwrap();
        assert_eq!(log.moves(), &[9, -1]);
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let err = GameLog::from_reader("3\n\nx3\n".as_bytes()).unwrap_err();
        match err {
            DatasetError::MalformedLine { line, content } => {
                assert_eq!(line, 3);
                assert_eq!(content, "x3");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_file() {
        let log = GameLog::from_reader("\n\n".as_bytes()).unwrap();
        assert!(log.is_empty());
    }
}
