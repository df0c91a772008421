use std::io;
use thiserror::Error;

/// LCD1602 模擬器的錯誤類型
///
/// The controller itself never fails; these are startup and frontend errors.
#[derive(Error, Debug)]
pub enum Error {
    /// IO 錯誤
    #[error("IO 錯誤: {0}")]
    Io(#[from] io::Error),

    /// 配置值無效
    #[error("配置錯誤: {0}")]
    Config(String),

    /// 配置文件解析失敗
    #[error("配置解析錯誤: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// 視窗建立或更新失敗
    #[error("視窗錯誤: {0}")]
    Window(String),
}

impl From<minifb::Error> for Error {
    fn from(err: minifb::Error) -> Self {
        Error::Window(err.to_string())
    }
}

/// 模擬器結果類型
pub type Result<T> = std::result::Result<T, Error>;
