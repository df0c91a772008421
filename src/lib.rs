// LCD1602 (HD44780) 模擬器庫
pub mod config;
pub mod emulator;
pub mod error;
pub mod frontend;
pub mod input;
pub mod lcd;
pub mod render;
pub mod utils;

pub use crate::config::{Config, ConfigBuilder};
pub use crate::emulator::Emulator;
pub use crate::error::{Error, Result};
pub use crate::lcd::{Command, Controller, Cursor, DisplayFlags, FontProvider, Hd44780Font};
pub use crate::render::{FrameBuffer, RenderSink};
