pub mod lcd;
pub mod system;
pub mod video;

pub use lcd::LcdConfig;
pub use system::SystemConfig;
pub use video::VideoConfig;

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// 每個 LCD 點最多佔用的視窗像素
pub const MAX_SCALE: u32 = 64;

/// 全局配置結構
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub video: VideoConfig,
    pub lcd: LcdConfig,
    pub system: SystemConfig,
}

impl Config {
    pub fn new() -> Self {
        Config::default()
    }

    /// 從 TOML 文件載入配置；未提供路徑時使用預設值
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_toml(&fs::read_to_string(path)?),
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.video.scale == 0 || self.video.scale > MAX_SCALE {
            return Err(Error::Config(format!(
                "video.scale 必須介於 1 與 {} 之間，目前為 {}",
                MAX_SCALE, self.video.scale
            )));
        }
        Ok(())
    }
}

/// 配置構建器
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        ConfigBuilder {
            config: Config::new(),
        }
    }

    pub fn from_config(config: Config) -> Self {
        ConfigBuilder { config }
    }

    pub fn scale(mut self, scale: u32) -> Self {
        self.config.video.scale = scale;
        self
    }

    pub fn banner(mut self, banner: impl Into<String>) -> Self {
        self.config.lcd.banner = banner.into();
        self
    }

    pub fn debug_mode(mut self, enabled: bool) -> Self {
        self.config.system.debug_mode = enabled;
        self
    }

    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        ConfigBuilder::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_display() {
        let config = Config::default();
        assert_eq!(config.video.scale, 4);
        assert_eq!(config.video.frame_delay_ms, 16);
        assert_eq!(config.lcd.banner, "Hello, SDL3! LCD1602");
        assert!(config.lcd.display_on);
        assert!(!config.lcd.cursor_on);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml(
            r#"
            [video]
            scale = 2
            pixel_on = 0x00FF00

            [lcd]
            cursor_on = true
            "#,
        )
        .unwrap();
        assert_eq!(config.video.scale, 2);
        assert_eq!(config.video.pixel_on, 0x00FF00);
        assert_eq!(config.video.background, VideoConfig::default().background);
        assert!(config.lcd.cursor_on);
        assert_eq!(config.system, SystemConfig::default());
    }

    #[test]
    fn test_zero_scale_rejected() {
        assert!(matches!(
            Config::from_toml("[video]\nscale = 0\n"),
            Err(Error::Config(_))
        ));
        assert!(ConfigBuilder::new().scale(0).build().is_err());
    }

    #[test]
    fn test_huge_scale_rejected() {
        assert!(matches!(
            ConfigBuilder::new().scale(u32::MAX).build(),
            Err(Error::Config(_))
        ));
        assert!(Config::from_toml("[video]\nscale = 65\n").is_err());
        assert_eq!(ConfigBuilder::new().scale(MAX_SCALE).build().unwrap().video.scale, 64);
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        assert!(matches!(
            Config::from_toml("[video\nscale = "),
            Err(Error::ConfigParse(_))
        ));
    }

    #[test]
    fn test_builder_overrides() {
        let config = ConfigBuilder::new()
            .scale(8)
            .banner("LCD")
            .debug_mode(true)
            .build()
            .unwrap();
        assert_eq!(config.video.scale, 8);
        assert_eq!(config.lcd.banner, "LCD");
        assert!(config.system.debug_mode);
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        assert_eq!(Config::load(None).unwrap(), Config::default());
    }
}
