// HD44780 (LCD1602) 控制器核心模組
pub mod command; // 指令解碼
pub mod controller; // DDRAM / CGRAM / 游標狀態機
pub mod font; // 內建字型 ROM 與字型提供者

// 重新導出主要組件
pub use command::Command;
pub use controller::{Controller, Cursor, DisplayFlags};
pub use font::{resolve_glyph, FontProvider, Glyph, Hd44780Font};

/// 可見的字元列數
pub const LCD_WIDTH: usize = 16;
/// 可見的字元行數
pub const LCD_HEIGHT: usize = 2;
/// 每一行在 DDRAM 中的跨距（可定址欄數）
pub const DDRAM_ROW_STRIDE: usize = 40;
/// DDRAM 大小（80 字節）
pub const DDRAM_SIZE: usize = 80;
/// CGRAM 大小（8 個字元 × 8 字節）
pub const CGRAM_SIZE: usize = 64;
/// CGRAM 可自定義字元數
pub const CGRAM_SLOTS: usize = 8;

/// 字元寬度（像素）
pub const CHAR_WIDTH: usize = 5;
/// 字元高度（像素）
pub const CHAR_HEIGHT: usize = 8;

/// 空白字元，DDRAM 的初始值
pub const BLANK: u8 = b' ';
