//! 出力レコード
//!
//! 1行 = `<FEN>\t<最初の指し手>\t<ラベル>`。書き込むたびに flush する。

use std::fmt;
use std::io::{self, Write};

use c4_core::{Move, Position};

use super::{DatasetError, Outcome};

/// 学習データ1件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetRecord {
    /// サンプル局面の FEN
    pub position: String,
    /// ロールアウトで最初に選ばれた指し手
    pub first_move: Move,
    pub outcome: Outcome,
}

impl DatasetRecord {
    pub fn new(position: &Position, first_move: Move, outcome: Outcome) -> Self {
        Self {
            position: position.to_fen(),
            first_move,
            outcome,
        }
    }

    /// 1行書き込んで flush する。
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{self}")?;
        out.flush()
    }

    /// 出力済みの1行を読み戻す。
    pub fn parse_line(line: &str) -> Result<Self, DatasetError> {
        let malformed = || DatasetError::MalformedRecord(line.to_string());
        let fields: Vec<&str> = line.trim_end_matches(['\r', '\n']).split('\t').collect();
        let [fen, mv, label] = fields.as_slice() else {
            return Err(malformed());
        };
        let position = Position::from_fen(fen).map_err(|_| malformed())?;
        let first_move = mv
            .parse::<i32>()
            .ok()
            .and_then(|i| Move::from_index(i).ok())
            .ok_or_else(malformed)?;
        let outcome = label.parse::<Outcome>().map_err(|_| malformed())?;
        Ok(Self::new(&position, first_move, outcome))
    }
}

impl fmt::Display for DatasetRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.position, self.first_move, self.outcome)
    }
}
