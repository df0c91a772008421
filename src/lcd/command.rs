/// 清除顯示指令碼
pub const CMD_CLEAR_DISPLAY: u8 = 0x01;
/// 返回原點指令碼
pub const CMD_RETURN_HOME: u8 = 0x02;

/// A decoded controller instruction.
///
/// Only clear-display and return-home are modelled. Every other byte decodes to
/// `Unsupported`, which the controller ignores the same way the hardware does
/// for instructions it has no use for here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ClearDisplay,
    ReturnHome,
    Unsupported(u8),
}

impl Command {
    pub fn from_code(code: u8) -> Self {
        match code {
            CMD_CLEAR_DISPLAY => Command::ClearDisplay,
            CMD_RETURN_HOME => Command::ReturnHome,
            other => Command::Unsupported(other),
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Command::ClearDisplay => CMD_CLEAR_DISPLAY,
            Command::ReturnHome => CMD_RETURN_HOME,
            Command::Unsupported(code) => code,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Command::ClearDisplay => "CLEAR",
            Command::ReturnHome => "HOME",
            Command::Unsupported(_) => "UNSUPPORTED",
        }
    }
}
