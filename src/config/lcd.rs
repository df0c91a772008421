use crate::lcd::DisplayFlags;
use serde::Deserialize;

/// LCD 開機狀態配置
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LcdConfig {
    /// Text written at startup, at most one screen (32 bytes).
    pub banner: String,
    pub display_on: bool,
    pub cursor_on: bool,
    pub blink_on: bool,
    pub backlight: bool,
}

impl LcdConfig {
    pub fn flags(&self) -> DisplayFlags {
        DisplayFlags {
            display_on: self.display_on,
            cursor_on: self.cursor_on,
            blink_on: self.blink_on,
            backlight: self.backlight,
        }
    }
}

impl Default for LcdConfig {
    fn default() -> Self {
        let flags = DisplayFlags::default();
        LcdConfig {
            banner: String::from("Hello, SDL3! LCD1602"),
            display_on: flags.display_on,
            cursor_on: flags.cursor_on,
            blink_on: flags.blink_on,
            backlight: flags.backlight,
        }
    }
}
