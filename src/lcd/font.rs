// 內建字型 ROM (HD44780 A00 的 ASCII 區段)
use super::controller::Controller;
use super::{CGRAM_SLOTS, CHAR_HEIGHT, CHAR_WIDTH};

/// 8 行點陣，每行低 5 位元有效，bit 4 為最左邊的像素
pub type Glyph = [u8; CHAR_HEIGHT];

/// Maps a character code to its bitmap.
pub trait FontProvider {
    fn glyph(&self, code: u8) -> Glyph;
}

/// 第一個內建字元的字元碼
const FONT_FIRST: u8 = 0x20;
/// 全亮方塊
const FULL_BLOCK: u8 = 0xFF;

// 5x7 字型，以欄為單位儲存（每個字節一欄，bit 0 為最上面一行）
#[rustfmt::skip]
const FONT_5X7: [[u8; CHAR_WIDTH]; 96] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0x20 ' '
    [0x00, 0x00, 0x5F, 0x00, 0x00], // 0x21 '!'
    [0x00, 0x07, 0x00, 0x07, 0x00], // 0x22 '"'
    [0x14, 0x7F, 0x14, 0x7F, 0x14], // 0x23 '#'
    [0x24, 0x2A, 0x7F, 0x2A, 0x12], // 0x24 '$'
    [0x23, 0x13, 0x08, 0x64, 0x62], // 0x25 '%'
    [0x36, 0x49, 0x55, 0x22, 0x50], // 0x26 '&'
    [0x00, 0x05, 0x03, 0x00, 0x00], // 0x27 '''
    [0x00, 0x1C, 0x22, 0x41, 0x00], // 0x28 '('
    [0x00, 0x41, 0x22, 0x1C, 0x00], // 0x29 ')'
    [0x08, 0x2A, 0x1C, 0x2A, 0x08], // 0x2A '*'
    [0x08, 0x08, 0x3E, 0x08, 0x08], // 0x2B '+'
    [0x00, 0x50, 0x30, 0x00, 0x00], // 0x2C ','
    [0x08, 0x08, 0x08, 0x08, 0x08], // 0x2D '-'
    [0x00, 0x60, 0x60, 0x00, 0x00], // 0x2E '.'
    [0x20, 0x10, 0x08, 0x04, 0x02], // 0x2F '/'
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // 0x30 '0'
    [0x00, 0x42, 0x7F, 0x40, 0x00], // 0x31 '1'
    [0x42, 0x61, 0x51, 0x49, 0x46], // 0x32 '2'
    [0x21, 0x41, 0x45, 0x4B, 0x31], // 0x33 '3'
    [0x18, 0x14, 0x12, 0x7F, 0x10], // 0x34 '4'
    [0x27, 0x45, 0x45, 0x45, 0x39], // 0x35 '5'
    [0x3C, 0x4A, 0x49, 0x49, 0x30], // 0x36 '6'
    [0x01, 0x71, 0x09, 0x05, 0x03], // 0x37 '7'
    [0x36, 0x49, 0x49, 0x49, 0x36], // 0x38 '8'
    [0x06, 0x49, 0x49, 0x29, 0x1E], // 0x39 '9'
    [0x00, 0x36, 0x36, 0x00, 0x00], // 0x3A ':'
    [0x00, 0x56, 0x36, 0x00, 0x00], // 0x3B ';'
    [0x08, 0x14, 0x22, 0x41, 0x00], // 0x3C '<'
    [0x14, 0x14, 0x14, 0x14, 0x14], // 0x3D '='
    [0x00, 0x41, 0x22, 0x14, 0x08], // 0x3E '>'
    [0x02, 0x01, 0x51, 0x09, 0x06], // 0x3F '?'
    [0x32, 0x49, 0x79, 0x41, 0x3E], // 0x40 '@'
    [0x7E, 0x11, 0x11, 0x11, 0x7E], // 0x41 'A'
    [0x7F, 0x49, 0x49, 0x49, 0x36], // 0x42 'B'
    [0x3E, 0x41, 0x41, 0x41, 0x22], // 0x43 'C'
    [0x7F, 0x41, 0x41, 0x22, 0x1C], // 0x44 'D'
    [0x7F, 0x49, 0x49, 0x49, 0x41], // 0x45 'E'
    [0x7F, 0x09, 0x09, 0x01, 0x01], // 0x46 'F'
    [0x3E, 0x41, 0x41, 0x51, 0x32], // 0x47 'G'
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // 0x48 'H'
    [0x00, 0x41, 0x7F, 0x41, 0x00], // 0x49 'I'
    [0x20, 0x40, 0x41, 0x3F, 0x01], // 0x4A 'J'
    [0x7F, 0x08, 0x14, 0x22, 0x41], // 0x4B 'K'
    [0x7F, 0x40, 0x40, 0x40, 0x40], // 0x4C 'L'
    [0x7F, 0x02, 0x04, 0x02, 0x7F], // 0x4D 'M'
    [0x7F, 0x04, 0x08, 0x10, 0x7F], // 0x4E 'N'
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // 0x4F 'O'
    [0x7F, 0x09, 0x09, 0x09, 0x06], // 0x50 'P'
    [0x3E, 0x41, 0x51, 0x21, 0x5E], // 0x51 'Q'
    [0x7F, 0x09, 0x19, 0x29, 0x46], // 0x52 'R'
    [0x46, 0x49, 0x49, 0x49, 0x31], // 0x53 'S'
    [0x01, 0x01, 0x7F, 0x01, 0x01], // 0x54 'T'
    [0x3F, 0x40, 0x40, 0x40, 0x3F], // 0x55 'U'
    [0x1F, 0x20, 0x40, 0x20, 0x1F], // 0x56 'V'
    [0x7F, 0x20, 0x18, 0x20, 0x7F], // 0x57 'W'
    [0x63, 0x14, 0x08, 0x14, 0x63], // 0x58 'X'
    [0x03, 0x04, 0x78, 0x04, 0x03], // 0x59 'Y'
    [0x61, 0x51, 0x49, 0x45, 0x43], // 0x5A 'Z'
    [0x00, 0x00, 0x7F, 0x41, 0x41], // 0x5B '['
    [0x15, 0x16, 0x7C, 0x16, 0x15], // 0x5C '¥' (ROM A00)
    [0x41, 0x41, 0x7F, 0x00, 0x00], // 0x5D ']'
    [0x04, 0x02, 0x01, 0x02, 0x04], // 0x5E '^'
    [0x40, 0x40, 0x40, 0x40, 0x40], // 0x5F '_'
    [0x00, 0x01, 0x02, 0x04, 0x00], // 0x60 '`'
    [0x20, 0x54, 0x54, 0x54, 0x78], // 0x61 'a'
    [0x7F, 0x48, 0x44, 0x44, 0x38], // 0x62 'b'
    [0x38, 0x44, 0x44, 0x44, 0x20], // 0x63 'c'
    [0x38, 0x44, 0x44, 0x48, 0x7F], // 0x64 'd'
    [0x38, 0x54, 0x54, 0x54, 0x18], // 0x65 'e'
    [0x08, 0x7E, 0x09, 0x01, 0x02], // 0x66 'f'
    [0x08, 0x14, 0x54, 0x54, 0x3C], // 0x67 'g'
    [0x7F, 0x08, 0x04, 0x04, 0x78], // 0x68 'h'
    [0x00, 0x44, 0x7D, 0x40, 0x00], // 0x69 'i'
    [0x20, 0x40, 0x44, 0x3D, 0x00], // 0x6A 'j'
    [0x00, 0x7F, 0x10, 0x28, 0x44], // 0x6B 'k'
    [0x00, 0x41, 0x7F, 0x40, 0x00], // 0x6C 'l'
    [0x7C, 0x04, 0x18, 0x04, 0x78], // 0x6D 'm'
    [0x7C, 0x08, 0x04, 0x04, 0x78], // 0x6E 'n'
    [0x38, 0x44, 0x44, 0x44, 0x38], // 0x6F 'o'
    [0x7C, 0x14, 0x14, 0x14, 0x08], // 0x70 'p'
    [0x08, 0x14, 0x14, 0x18, 0x7C], // 0x71 'q'
    [0x7C, 0x08, 0x04, 0x04, 0x08], // 0x72 'r'
    [0x48, 0x54, 0x54, 0x54, 0x20], // 0x73 's'
    [0x04, 0x3F, 0x44, 0x40, 0x20], // 0x74 't'
    [0x3C, 0x40, 0x40, 0x20, 0x7C], // 0x75 'u'
    [0x1C, 0x20, 0x40, 0x20, 0x1C], // 0x76 'v'
    [0x3C, 0x40, 0x30, 0x40, 0x3C], // 0x77 'w'
    [0x44, 0x28, 0x10, 0x28, 0x44], // 0x78 'x'
    [0x0C, 0x50, 0x50, 0x50, 0x3C], // 0x79 'y'
    [0x44, 0x64, 0x54, 0x4C, 0x44], // 0x7A 'z'
    [0x00, 0x08, 0x36, 0x41, 0x00], // 0x7B '{'
    [0x00, 0x00, 0x7F, 0x00, 0x00], // 0x7C '|'
    [0x00, 0x41, 0x36, 0x08, 0x00], // 0x7D '}'
    [0x08, 0x08, 0x2A, 0x1C, 0x08], // 0x7E '→' (ROM A00)
    [0x08, 0x1C, 0x2A, 0x08, 0x08], // 0x7F '←' (ROM A00)
];

/// 將以欄儲存的 5x7 字型轉換為以行儲存的點陣
fn columns_to_rows(columns: &[u8; CHAR_WIDTH]) -> Glyph {
    let mut rows = [0u8; CHAR_HEIGHT];
    for (row, bits) in rows.iter_mut().enumerate() {
        for (col, column_bits) in columns.iter().enumerate() {
            if column_bits & (1 << row) != 0 {
                *bits |= 1 << (CHAR_WIDTH - 1 - col);
            }
        }
    }
    rows
}

/// HD44780 內建字型
///
/// Codes without a bitmap here (0x00..0x20 and 0x80..0xFE) render blank.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hd44780Font;

impl Hd44780Font {
    pub fn new() -> Self {
        Hd44780Font
    }
}

impl FontProvider for Hd44780Font {
    fn glyph(&self, code: u8) -> Glyph {
        match code {
            FULL_BLOCK => [0x1F; CHAR_HEIGHT],
            0x20..=0x7F => columns_to_rows(&FONT_5X7[(code - FONT_FIRST) as usize]),
            _ => [0; CHAR_HEIGHT],
        }
    }
}

/// 取得字元點陣：0-7 來自 CGRAM，其餘來自字型提供者
pub fn resolve_glyph<F: FontProvider + ?Sized>(lcd: &Controller, font: &F, code: u8) -> Glyph {
    if (code as usize) < CGRAM_SLOTS {
        lcd.cgram_glyph(code as usize)
    } else {
        font.glyph(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lcd::CGRAM_SIZE;

    #[test]
    fn test_letter_a_rows() {
        let glyph = Hd44780Font.glyph(b'A');
        // .###.
        assert_eq!(glyph[0], 0b01110);
        // #...#
        assert_eq!(glyph[1], 0b10001);
        // #####
        assert_eq!(glyph[3], 0b11111);
        // 第 8 行保留給游標
        assert_eq!(glyph[7], 0);
    }

    #[test]
    fn test_exclamation_has_gap() {
        let glyph = Hd44780Font.glyph(b'!');
        assert_eq!(&glyph[..5], &[0x04; 5]);
        assert_eq!(glyph[5], 0);
        assert_eq!(glyph[6], 0x04);
    }

    #[test]
    fn test_rows_fit_in_five_bits() {
        for code in 0..=255u8 {
            assert!(Hd44780Font.glyph(code).iter().all(|row| row & !0x1F == 0));
        }
    }

    #[test]
    fn test_space_and_unmapped_are_blank() {
        assert_eq!(Hd44780Font.glyph(b' '), [0; 8]);
        assert_eq!(Hd44780Font.glyph(0x10), [0; 8]);
        assert_eq!(Hd44780Font.glyph(0x90), [0; 8]);
        assert_eq!(Hd44780Font.glyph(0xFF), [0x1F; 8]);
    }

    #[test]
    fn test_low_codes_resolve_from_cgram() {
        let mut cgram = [0u8; CGRAM_SIZE];
        cgram[3 * 8] = 0x15;
        let lcd = Controller::with_cgram(cgram);
        assert_eq!(resolve_glyph(&lcd, &Hd44780Font, 3)[0], 0x15);
        assert_eq!(resolve_glyph(&lcd, &Hd44780Font, 8), [0; 8]);
        assert_eq!(
            resolve_glyph(&lcd, &Hd44780Font, b'A'),
            Hd44780Font.glyph(b'A')
        );
    }
}
