use lcd1602_emulator::lcd::{BLANK, LCD_HEIGHT, LCD_WIDTH};
use lcd1602_emulator::{Controller, Cursor};
use proptest::prelude::*;

fn controller_after(bytes: &[u8]) -> Controller {
    let mut lcd = Controller::new();
    for &byte in bytes {
        lcd.write_data(byte);
    }
    lcd
}

proptest! {
    #[test]
    fn cursor_stays_in_bounds(bytes in prop::collection::vec(any::<u8>(), 0..200)) {
        let mut lcd = Controller::new();
        for byte in bytes {
            lcd.write_data(byte);
            let cursor = lcd.cursor();
            prop_assert!(cursor.column < LCD_WIDTH);
            prop_assert!(cursor.row < LCD_HEIGHT);
        }
    }

    #[test]
    fn cursor_tracks_write_count(bytes in prop::collection::vec(any::<u8>(), 0..200)) {
        let lcd = controller_after(&bytes);
        let n = bytes.len() % (LCD_WIDTH * LCD_HEIGHT);
        prop_assert_eq!(lcd.cursor(), Cursor::new(n % LCD_WIDTH, n / LCD_WIDTH));
    }

    #[test]
    fn clear_always_blanks(bytes in prop::collection::vec(any::<u8>(), 0..100)) {
        let mut lcd = controller_after(&bytes);
        lcd.execute_command(0x01);
        prop_assert!(lcd.ddram().iter().all(|&b| b == BLANK));
        prop_assert_eq!(lcd.cursor(), Cursor::HOME);
    }

    #[test]
    fn home_keeps_memory(bytes in prop::collection::vec(any::<u8>(), 0..100)) {
        let mut lcd = controller_after(&bytes);
        let before = *lcd.ddram();
        lcd.execute_command(0x02);
        prop_assert_eq!(*lcd.ddram(), before);
        prop_assert_eq!(lcd.cursor(), Cursor::HOME);
    }

    #[test]
    fn other_commands_change_nothing(
        bytes in prop::collection::vec(any::<u8>(), 0..100),
        code in any::<u8>().prop_filter("not clear/home", |c| *c != 0x01 && *c != 0x02),
    ) {
        let mut lcd = controller_after(&bytes);
        let before = lcd.clone();
        lcd.execute_command(code);
        prop_assert_eq!(lcd, before);
    }
}
