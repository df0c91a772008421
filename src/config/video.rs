use serde::Deserialize;

/// 顯示與視窗相關配置
///
/// Colours are 0RGB words, the layout `minifb` expects.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct VideoConfig {
    pub title: String,
    pub scale: u32,
    pub frame_delay_ms: u64,
    pub background: u32,
    pub pixel_off: u32,
    pub pixel_on: u32,
}

impl Default for VideoConfig {
    fn default() -> Self {
        VideoConfig {
            title: String::from("LCD1602"),
            scale: 4,
            frame_delay_ms: 16, // ~60 FPS
            background: 0x30_30_40,
            pixel_off: 0x60_60_70,
            pixel_on: 0xE0_E0_F0,
        }
    }
}
