//! 終局状態

use super::Color;

/// 終局の種類
///
/// 勝者が決まった場合は `Win(勝者)`、盤が埋まった場合は `Draw`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEnd {
    Draw,
    Win(Color),
}
