//! 基本型

mod color;
mod end;
mod moves;
mod value;

pub use color::Color;
pub use end::GameEnd;
pub use moves::Move;
pub use value::Value;

/// 盤の列数
pub const WIDTH: usize = 7;

/// 盤の行数
pub const HEIGHT: usize = 6;

/// 盤上のマス数（＝最大手数）
pub const BOARD_CELLS: usize = WIDTH * HEIGHT;
