//! 結果ラベル
//!
//! ラベルは常にサンプル局面で手番だった側の視点で付ける。
//! ロールアウト終了時の手番ではないことに注意（手番は1手ごとに入れ替わる）。
//!
//! | 結果 | ラベル |
//! |---|---|
//! | サンプル局面の手番側の勝ち | `1` |
//! | 引き分け | `0` |
//! | 手数上限で打ち切り | `-` |
//! | 相手の勝ち | `-1` |

use std::fmt;
use std::str::FromStr;

use c4_core::{Color, GameEnd};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
    Truncated,
}

impl Outcome {
    /// ロールアウト終了局面の終局状態と、サンプル局面の手番からラベルを決める。
    pub fn from_end(end: Option<GameEnd>, sampled_side: Color) -> Outcome {
        match end {
            None => Outcome::Truncated,
            Some(GameEnd::Draw) => Outcome::Draw,
            Some(GameEnd::Win(winner)) if winner == sampled_side => Outcome::Win,
            Some(GameEnd::Win(_)) => Outcome::Loss,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Outcome::Win => "1",
            Outcome::Draw => "0",
            Outcome::Loss => "-1",
            Outcome::Truncated => "-",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Outcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Outcome::Win),
            "0" => Ok(Outcome::Draw),
            "-1" => Ok(Outcome::Loss),
            "-" => Ok(Outcome::Truncated),
            _ => Err(format!("unknown outcome label {s:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_relative_to_sampled_side() {
        for side in [Color::Red, Color::Yellow] {
            assert_eq!(Outcome::from_end(Some(GameEnd::Win(side)), side), Outcome::Win);
            assert_eq!(Outcome::from_end(Some(GameEnd::Win(!side)), side), Outcome::Loss);
            assert_eq!(Outcome::from_end(Some(GameEnd::Draw), side), Outcome::Draw);
            assert_eq!(Outcome::from_end(None, side), Outcome::Truncated);
        }
    }

    #[test]
    fn test_label_alphabet() {
        let labels: Vec<&str> = [Outcome::Win, Outcome::Draw, Outcome::Loss, Outcome::Truncated]
            .iter()
            .map(|o| o.label())
            .collect();
        assert_eq!(labels, vec!["1", "0", "-1", "-"]);
        for label in labels {
            assert_eq!(label.parse::<Outcome>().unwrap().label(), label);
        }
        assert!("+1".parse::<Outcome>().is_err());
    }
}
