use serde::Deserialize;
use std::path::PathBuf;

/// System-related configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct SystemConfig {
    pub debug_mode: bool,
    pub log_dir: PathBuf,
}

impl Default for SystemConfig {
    fn default() -> Self {
        SystemConfig {
            debug_mode: false,
            log_dir: PathBuf::from("logs"),
        }
    }
}
