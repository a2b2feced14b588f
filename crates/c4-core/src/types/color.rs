//! 手番（Color）

/// 手番（先手=赤 / 後手=黄）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Red = 0,
    Yellow = 1,
}

impl Color {
    /// 相手番を返す
    #[inline]
    pub const fn opponent(self) -> Color {
        match self {
            Color::Red => Color::Yellow,
            Color::Yellow => Color::Red,
        }
    }

    /// FEN で使う1文字表現
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Color::Red => 'r',
            Color::Yellow => 'y',
        }
    }

    /// FEN の1文字から復元
    pub const fn from_char(c: char) -> Option<Color> {
        match c {
            'r' => Some(Color::Red),
            'y' => Some(Color::Yellow),
            _ => None,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.opponent()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Red => f.write_str("red"),
            Color::Yellow => f.write_str("yellow"),
        }
    }
}
