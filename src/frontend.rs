// 視窗前端：minifb 視窗、鍵盤與文字輸入
use crate::config::VideoConfig;
use crate::error::Result;
use crate::input::{printable_text, InputEvent, LcdKey};
use crate::render::FrameBuffer;
use minifb::{InputCallback, Key, KeyRepeat, Window, WindowOptions};
use std::cell::RefCell;
use std::rc::Rc;

/// Everything the emulator loop needs from a host window.
pub trait Frontend {
    /// Events since the previous call, in the order they should be applied.
    fn poll_events(&mut self) -> Vec<InputEvent>;
    fn present(&mut self, frame: &FrameBuffer) -> Result<()>;
}

/// 文字輸入佇列，由 minifb 回呼寫入
struct TextQueue {
    chars: Rc<RefCell<Vec<char>>>,
}

impl InputCallback for TextQueue {
    fn add_char(&mut self, uni_char: u32) {
        if let Some(c) = char::from_u32(uni_char) {
            self.chars.borrow_mut().push(c);
        }
    }
}

fn map_key(key: Key) -> LcdKey {
    match key {
        Key::Escape => LcdKey::Escape,
        Key::C => LcdKey::C,
        Key::H => LcdKey::H,
        _ => LcdKey::Other,
    }
}

pub struct MinifbFrontend {
    window: Window,
    text: Rc<RefCell<Vec<char>>>,
}

impl MinifbFrontend {
    pub fn new(config: &VideoConfig, width: usize, height: usize) -> Result<Self> {
        let mut window = Window::new(&config.title, width, height, WindowOptions::default())?;

        let text = Rc::new(RefCell::new(Vec::new()));
        window.set_input_callback(Box::new(TextQueue {
            chars: Rc::clone(&text),
        }));

        Ok(Self { window, text })
    }

    fn ctrl_down(&self) -> bool {
        self.window.is_key_down(Key::LeftCtrl) || self.window.is_key_down(Key::RightCtrl)
    }
}

impl Frontend for MinifbFrontend {
    /// Key events of this poll come first, then the text typed during it.
    /// Text collected while Ctrl is held is dropped.
    fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        if !self.window.is_open() {
            events.push(InputEvent::Quit);
            return events;
        }

        let ctrl = self.ctrl_down();
        for key in self.window.get_keys_pressed(KeyRepeat::No) {
            events.push(InputEvent::KeyDown {
                key: map_key(key),
                ctrl,
            });
        }

        let typed = printable_text(self.text.borrow_mut().drain(..));
        // Ctrl 組合鍵產生的字元不算文字輸入
        if !typed.is_empty() && !ctrl {
            events.push(InputEvent::Text(typed));
        }
        events
    }

    fn present(&mut self, frame: &FrameBuffer) -> Result<()> {
        self.window
            .update_with_buffer(frame.pixels(), frame.width(), frame.height())?;
        Ok(())
    }
}
