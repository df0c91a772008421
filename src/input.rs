/*
================================================================================
LCD1602 模擬器 - 輸入轉換模組
================================================================================
將輸入事件同步轉換為控制器呼叫

對應：
- Escape / 關閉視窗  -> 結束主迴圈
- Ctrl+C            -> 清除顯示
- Ctrl+H            -> 返回原點
- 文字輸入           -> 逐字節寫入資料
================================================================================
*/

use crate::lcd::command::{CMD_CLEAR_DISPLAY, CMD_RETURN_HOME};
use crate::lcd::{Command, Controller};

/// Keys the input path cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LcdKey {
    Escape,
    C,
    H,
    Other,
}

/// 一個輸入事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown { key: LcdKey, ctrl: bool },
    Text(String),
}

/// A single controller call (or loop request) produced by an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Command(u8),
    Data(u8),
}

/// 主迴圈是否繼續
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// 將一個事件轉換為零個或多個動作
pub fn translate(event: &InputEvent) -> Vec<Action> {
    match event {
        InputEvent::Quit => vec![Action::Quit],
        InputEvent::KeyDown { key, ctrl } => match (key, ctrl) {
            (LcdKey::Escape, _) => vec![Action::Quit],
            (LcdKey::C, true) => vec![Action::Command(CMD_CLEAR_DISPLAY)],
            (LcdKey::H, true) => vec![Action::Command(CMD_RETURN_HOME)],
            _ => Vec::new(),
        },
        // UTF-8 bytes go in one by one, the same as a host writing a C string
        InputEvent::Text(text) => text.bytes().map(Action::Data).collect(),
    }
}

/// Applies every action in order; a quit only changes the returned flow.
pub fn apply(actions: &[Action], lcd: &mut Controller) -> Flow {
    apply_with(actions, lcd, |_| {})
}

/// Like [`apply`], reporting each executed command to `on_command`.
pub fn apply_with<F>(actions: &[Action], lcd: &mut Controller, mut on_command: F) -> Flow
where
    F: FnMut(Command),
{
    let mut flow = Flow::Continue;
    for action in actions {
        match *action {
            Action::Quit => flow = Flow::Quit,
            Action::Command(code) => on_command(lcd.execute_command(code)),
            Action::Data(byte) => lcd.write_data(byte),
        }
    }
    flow
}

/// 處理一個事件
pub fn dispatch(event: &InputEvent, lcd: &mut Controller) -> Flow {
    apply(&translate(event), lcd)
}

/// Keeps only characters a text-input event may carry.
pub fn printable_text(chars: impl IntoIterator<Item = char>) -> String {
    chars.into_iter().filter(|c| !c.is_control()).collect()
}
