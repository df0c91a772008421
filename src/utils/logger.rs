use crate::config::SystemConfig;
use chrono::Local;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// 帶時間戳的文件日誌
///
/// A logger whose file cannot be opened stays usable and writes nothing.
#[derive(Debug)]
pub struct Logger {
    pub debug_enabled: bool,
    file: Option<File>,
}

impl Logger {
    pub fn new(log_dir: &Path, debug_enabled: bool) -> Self {
        // Ensure logs directory exists
        let _ = fs::create_dir_all(log_dir);

        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let path = log_dir.join(format!("lcd1602_{}.log", timestamp));
        let file = OpenOptions::new().create(true).append(true).open(path).ok();

        Logger {
            debug_enabled,
            file,
        }
    }

    /// 依系統配置建立日誌（目錄與 debug 開關）
    pub fn from_config(config: &SystemConfig) -> Self {
        Logger::new(&config.log_dir, config.debug_mode)
    }

    /// 不寫任何文件的日誌（測試與 headless 模式用）
    pub fn disabled() -> Self {
        Logger {
            debug_enabled: false,
            file: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.file.is_some()
    }

    fn get_timestamp() -> String {
        Local::now().format("[%Y-%m-%d %H:%M:%S%.3f]").to_string()
    }

    pub fn log_lcd(&mut self, msg: &str) {
        self.log_line("LCD", msg);
    }

    pub fn log_input(&mut self, msg: &str) {
        if !self.debug_enabled {
            return;
        }
        self.log_line("INPUT", msg);
    }

    pub fn log_frame(&mut self, msg: &str) {
        if !self.debug_enabled {
            return;
        }
        self.log_line("FRAME", msg);
    }

    pub fn log_debug(&mut self, msg: &str) {
        if !self.debug_enabled {
            return;
        }
        self.log_line("DEBUG", msg);
    }

    pub fn log_error(&mut self, msg: &str) {
        self.log_line("ERROR", msg);
    }

    fn log_line(&mut self, area: &str, msg: &str) {
        if let Some(file) = self.file.as_mut() {
            let _ = writeln!(file, "{} {}: {}", Self::get_timestamp(), area, msg);
        }
    }

    /// 記錄 LCD 可見內容
    pub fn dump_rows(&mut self, rows: &[String]) {
        for (i, row) in rows.iter().enumerate() {
            self.log_lcd(&format!("row {}: |{}|", i, row));
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Logger::disabled()
    }
}
