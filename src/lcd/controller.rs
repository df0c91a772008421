/*
================================================================================
LCD1602 模擬器 - 控制器狀態機
================================================================================
DDRAM、CGRAM、游標與顯示模式旗標

功能：
- 資料寫入（游標自動前進與換行）
- 清除顯示 / 返回原點指令
- 提供渲染層讀取的狀態查詢
================================================================================
*/

use super::command::Command;
use super::{
    BLANK, CGRAM_SIZE, CGRAM_SLOTS, CHAR_HEIGHT, DDRAM_ROW_STRIDE, DDRAM_SIZE, LCD_HEIGHT,
    LCD_WIDTH,
};

/// Cursor position in visible cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub column: usize,
    pub row: usize,
}

impl Cursor {
    pub const HOME: Cursor = Cursor { column: 0, row: 0 };

    pub fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Linear DDRAM address of the cell under the cursor.
    pub fn address(&self) -> usize {
        self.row * DDRAM_ROW_STRIDE + self.column
    }
}

/// 顯示模式旗標
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFlags {
    pub display_on: bool,
    pub cursor_on: bool,
    /// Stored only, nothing blinks yet.
    pub blink_on: bool,
    /// Cosmetic.
    pub backlight: bool,
}

impl Default for DisplayFlags {
    fn default() -> Self {
        Self {
            display_on: true,
            cursor_on: false,
            blink_on: false,
            backlight: true,
        }
    }
}

/// HD44780 控制器狀態
///
/// The auto-advance path wraps at column 16 although each DDRAM row is 40
/// bytes wide, so columns 16..40 are addressable but never written by
/// `write_data`. Rendering relies on that window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controller {
    ddram: [u8; DDRAM_SIZE],
    cgram: [u8; CGRAM_SIZE],
    cursor: Cursor,
    flags: DisplayFlags,
}

impl Controller {
    pub fn new() -> Self {
        Self {
            ddram: [BLANK; DDRAM_SIZE],
            cgram: [0; CGRAM_SIZE],
            cursor: Cursor::HOME,
            flags: DisplayFlags::default(),
        }
    }

    /// Builds a controller whose CGRAM is preloaded with user glyphs.
    pub fn with_cgram(cgram: [u8; CGRAM_SIZE]) -> Self {
        Self {
            cgram,
            ..Self::new()
        }
    }

    /// 重設為開機狀態
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// 寫入資料到游標位置並前進游標
    pub fn write_data(&mut self, data: u8) {
        if self.cursor.row < LCD_HEIGHT && self.cursor.column < LCD_WIDTH {
            let index = self.cursor.address();
            if index < DDRAM_SIZE {
                self.ddram[index] = data;
            }
        }
        self.advance_cursor();
    }

    fn advance_cursor(&mut self) {
        self.cursor.column += 1;
        if self.cursor.column >= LCD_WIDTH {
            self.cursor.column = 0;
            self.cursor.row += 1;
            if self.cursor.row >= LCD_HEIGHT {
                self.cursor.row = 0;
            }
        }
    }

    /// 執行指令；未支援的指令碼不做任何事
    pub fn execute_command(&mut self, code: u8) -> Command {
        let command = Command::from_code(code);
        match command {
            Command::ClearDisplay => {
                self.ddram.fill(BLANK);
                self.cursor = Cursor::HOME;
            }
            Command::ReturnHome => {
                self.cursor = Cursor::HOME;
            }
            Command::Unsupported(_) => {}
        }
        command
    }

    /// Reads a DDRAM cell.
    ///
    /// # Panics
    ///
    /// Panics when `row >= 2` or `column >= 40`.
    pub fn read_cell(&self, row: usize, column: usize) -> u8 {
        assert!(
            row < LCD_HEIGHT && column < DDRAM_ROW_STRIDE,
            "cell ({}, {}) is outside DDRAM",
            row,
            column
        );
        self.ddram[row * DDRAM_ROW_STRIDE + column]
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn flags(&self) -> DisplayFlags {
        self.flags
    }

    /// Overrides the mode flags. Startup configuration only.
    pub fn set_flags(&mut self, flags: DisplayFlags) {
        self.flags = flags;
    }

    pub fn ddram(&self) -> &[u8; DDRAM_SIZE] {
        &self.ddram
    }

    pub fn cgram(&self) -> &[u8; CGRAM_SIZE] {
        &self.cgram
    }

    /// 取得 CGRAM 中某個自定義字元的 8 行點陣
    pub fn cgram_glyph(&self, slot: usize) -> [u8; CHAR_HEIGHT] {
        let slot = slot % CGRAM_SLOTS;
        let mut rows = [0u8; CHAR_HEIGHT];
        rows.copy_from_slice(&self.cgram[slot * CHAR_HEIGHT..(slot + 1) * CHAR_HEIGHT]);
        rows
    }

    /// The 16 visible cells of `row` as text, one `char` per byte.
    pub fn row_text(&self, row: usize) -> String {
        (0..LCD_WIDTH)
            .map(|column| self.read_cell(row, column) as char)
            .collect()
    }

    pub fn visible_text(&self) -> [String; LCD_HEIGHT] {
        [self.row_text(0), self.row_text(1)]
    }
}

impl Default for Controller {
    fn default() -> Self {
        Controller::new()
    }
}
