// LCD 點陣渲染
pub mod framebuffer;

pub use framebuffer::{FrameBuffer, Rect, RenderSink};

use crate::config::{VideoConfig, MAX_SCALE};
use crate::lcd::{
    resolve_glyph, Controller, FontProvider, CHAR_HEIGHT, CHAR_WIDTH, LCD_HEIGHT, LCD_WIDTH,
};

/// 渲染用的三種顏色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: u32,
    pub pixel_off: u32,
    pub pixel_on: u32,
}

impl Palette {
    pub fn from_config(config: &VideoConfig) -> Self {
        Self {
            background: config.background,
            pixel_off: config.pixel_off,
            pixel_on: config.pixel_on,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::from_config(&VideoConfig::default())
    }
}

/// Maps LCD cells and glyph pixels to window pixels.
///
/// Each cell is 5x8 dots followed by a one-dot gap on the right and below;
/// every dot is `scale` window pixels square, `scale` clamped to 1..=64.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub scale: usize,
}

impl Geometry {
    pub fn new(scale: u32) -> Self {
        Self {
            scale: scale.clamp(1, MAX_SCALE) as usize,
        }
    }

    pub fn width(&self) -> usize {
        LCD_WIDTH * (CHAR_WIDTH + 1) * self.scale
    }

    pub fn height(&self) -> usize {
        LCD_HEIGHT * (CHAR_HEIGHT + 1) * self.scale
    }

    pub fn dot(&self, column: usize, row: usize, x: usize, y: usize) -> Rect {
        Rect::new(
            (column * (CHAR_WIDTH + 1) + x) * self.scale,
            (row * (CHAR_HEIGHT + 1) + y) * self.scale,
            self.scale,
            self.scale,
        )
    }

    /// Underline in the gap row below the cell.
    pub fn cursor(&self, column: usize, row: usize) -> Rect {
        Rect::new(
            column * (CHAR_WIDTH + 1) * self.scale,
            (row * (CHAR_HEIGHT + 1) + CHAR_HEIGHT) * self.scale,
            CHAR_WIDTH * self.scale,
            self.scale,
        )
    }

    pub fn frame_buffer(&self) -> FrameBuffer {
        FrameBuffer::new(self.width(), self.height())
    }
}

/// 繪製一個字元
#[allow(clippy::too_many_arguments)]
fn draw_char<S, F>(
    sink: &mut S,
    lcd: &Controller,
    font: &F,
    geometry: &Geometry,
    palette: &Palette,
    code: u8,
    column: usize,
    row: usize,
) where
    S: RenderSink + ?Sized,
    F: FontProvider + ?Sized,
{
    let glyph = resolve_glyph(lcd, font, code);
    let display_on = lcd.flags().display_on;

    for (y, bits) in glyph.iter().enumerate() {
        for x in 0..CHAR_WIDTH {
            let pixel_on = bits & (1 << (CHAR_WIDTH - 1 - x)) != 0;
            let color = if pixel_on && display_on {
                palette.pixel_on
            } else {
                palette.pixel_off
            };
            sink.fill_rect(geometry.dot(column, row, x, y), color);
        }
    }
}

/// 繪製整個顯示器：背景、16x2 個字元，以及游標
pub fn render_display<S, F>(
    sink: &mut S,
    lcd: &Controller,
    font: &F,
    geometry: &Geometry,
    palette: &Palette,
) where
    S: RenderSink + ?Sized,
    F: FontProvider + ?Sized,
{
    sink.clear(palette.background);

    for row in 0..LCD_HEIGHT {
        for column in 0..LCD_WIDTH {
            let code = lcd.read_cell(row, column);
            draw_char(sink, lcd, font, geometry, palette, code, column, row);
        }
    }

    let flags = lcd.flags();
    if flags.cursor_on && flags.display_on {
        let cursor = lcd.cursor();
        sink.fill_rect(geometry.cursor(cursor.column, cursor.row), palette.pixel_on);
    }
}
