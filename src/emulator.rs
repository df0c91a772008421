/*
================================================================================
LCD1602 模擬器 - 核心模擬器實現
================================================================================
整合控制器、字型、渲染與輸入的主迴圈
================================================================================
*/
use crate::config::Config;
use crate::error::Result;
use crate::frontend::Frontend;
use crate::input::{self, Flow, InputEvent};
use crate::lcd::{Controller, Hd44780Font, LCD_HEIGHT, LCD_WIDTH};
use crate::render::{render_display, FrameBuffer, Geometry, Palette};
use crate::utils::Logger;
use std::thread;
use std::time::Duration;

pub struct Emulator {
    pub lcd: Controller,
    pub font: Hd44780Font,
    pub geometry: Geometry,
    pub palette: Palette,
    pub frame: FrameBuffer,
    pub logger: Logger,
    pub frames: u64,
    frame_delay: Duration,
}

impl Emulator {
    pub fn new(config: &Config, logger: Logger) -> Self {
        let geometry = Geometry::new(config.video.scale);
        let mut lcd = Controller::new();
        lcd.set_flags(config.lcd.flags());

        Self {
            lcd,
            font: Hd44780Font::new(),
            geometry,
            palette: Palette::from_config(&config.video),
            frame: geometry.frame_buffer(),
            logger,
            frames: 0,
            frame_delay: Duration::from_millis(config.video.frame_delay_ms),
        }
    }

    /// 寫入開機文字，最多一整個畫面
    pub fn write_banner(&mut self, banner: &str) {
        for byte in banner.bytes().take(LCD_WIDTH * LCD_HEIGHT) {
            self.lcd.write_data(byte);
        }
        self.logger.log_lcd(&format!("banner written: {:?}", banner));
    }

    /// 處理一批輸入事件，遇到結束事件時回傳 `Flow::Quit`
    pub fn handle_events(&mut self, events: &[InputEvent]) -> Flow {
        let mut flow = Flow::Continue;
        for event in events {
            self.logger.log_input(&format!("{:?}", event));
            let actions = input::translate(event);
            let logger = &mut self.logger;
            let event_flow = input::apply_with(&actions, &mut self.lcd, |command| {
                logger.log_debug(&format!(
                    "command {} (0x{:02X})",
                    command.name(),
                    command.code()
                ));
            });
            if event_flow == Flow::Quit {
                flow = Flow::Quit;
            }
        }
        flow
    }

    pub fn render(&mut self) {
        render_display(
            &mut self.frame,
            &self.lcd,
            &self.font,
            &self.geometry,
            &self.palette,
        );
    }

    /// One loop iteration: input, then render, then present.
    pub fn step<F: Frontend + ?Sized>(&mut self, frontend: &mut F) -> Result<Flow> {
        let events = frontend.poll_events();
        if self.handle_events(&events) == Flow::Quit {
            return Ok(Flow::Quit);
        }

        self.render();
        frontend.present(&self.frame)?;
        self.frames += 1;
        if self.frames % 600 == 0 {
            let cursor = self.lcd.cursor();
            self.logger.log_frame(&format!(
                "frame {} cursor=({}, {})",
                self.frames, cursor.column, cursor.row
            ));
        }
        Ok(Flow::Continue)
    }

    /// 主迴圈，直到收到結束事件
    pub fn run<F: Frontend + ?Sized>(&mut self, frontend: &mut F) -> Result<()> {
        self.logger.log_lcd("emulation loop started");
        loop {
            match self.step(frontend) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e) => {
                    self.logger.log_error(&e.to_string());
                    return Err(e);
                }
            }
            if !self.frame_delay.is_zero() {
                thread::sleep(self.frame_delay);
            }
        }

        let rows = self.lcd.visible_text();
        self.logger.dump_rows(&rows);
        self.logger
            .log_lcd(&format!("emulation loop finished after {} frames", self.frames));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigBuilder;
    use crate::error::Error;
    use crate::input::LcdKey;
    use crate::lcd::Cursor;
    use std::collections::VecDeque;

    struct Scripted {
        frames: VecDeque<Vec<InputEvent>>,
        presented: usize,
        fail_present: bool,
    }

    impl Scripted {
        fn new(frames: Vec<Vec<InputEvent>>) -> Self {
            Self {
                frames: frames.into(),
                presented: 0,
                fail_present: false,
            }
        }
    }

    impl Frontend for Scripted {
        fn poll_events(&mut self) -> Vec<InputEvent> {
            self.frames.pop_front().unwrap_or_else(|| vec![InputEvent::Quit])
        }

        fn present(&mut self, frame: &FrameBuffer) -> Result<()> {
            if self.fail_present {
                return Err(Error::Window("gone".to_string()));
            }
            assert_eq!(frame.width(), 384);
            self.presented += 1;
            Ok(())
        }
    }

    fn emulator() -> Emulator {
        let mut config = ConfigBuilder::new().build().unwrap();
        config.video.frame_delay_ms = 0;
        Emulator::new(&config, Logger::disabled())
    }

    #[test]
    fn test_banner_truncated_to_one_screen() {
        let mut emu = emulator();
        emu.write_banner(&"x".repeat(40));
        // 32 字節後停止，游標回到原點
        assert_eq!(emu.lcd.cursor(), Cursor::HOME);
        assert_eq!(emu.lcd.row_text(1), "x".repeat(16));
    }

    #[test]
    fn test_run_until_quit() {
        let mut emu = emulator();
        let mut frontend = Scripted::new(vec![
            vec![InputEvent::Text("ab".to_string())],
            vec![InputEvent::KeyDown {
                key: LcdKey::H,
                ctrl: true,
            }],
            vec![],
        ]);
        emu.run(&mut frontend).unwrap();

        assert_eq!(frontend.presented, 3);
        assert_eq!(emu.frames, 3);
        assert_eq!(emu.lcd.row_text(0), "ab              ");
        assert_eq!(emu.lcd.cursor(), Cursor::HOME);
    }

    #[test]
    fn test_quit_skips_render() {
        let mut emu = emulator();
        let mut frontend = Scripted::new(vec![vec![
            InputEvent::Text("z".to_string()),
            InputEvent::KeyDown {
                key: LcdKey::Escape,
                ctrl: false,
            },
        ]]);
        emu.run(&mut frontend).unwrap();
        assert_eq!(frontend.presented, 0);
        // 同一批中先到的文字仍然生效
        assert_eq!(emu.lcd.read_cell(0, 0), b'z');
    }

    #[test]
    fn test_present_failure_is_fatal() {
        let mut emu = emulator();
        let mut frontend = Scripted::new(vec![vec![]]);
        frontend.fail_present = true;
        assert!(matches!(emu.run(&mut frontend), Err(Error::Window(_))));
    }

    #[test]
    fn test_commands_logged_in_debug_mode() {
        let dir = std::env::temp_dir().join(format!("lcd1602_emu_log_{}", std::process::id()));
        let mut config = Config::default();
        config.system.log_dir = dir.clone();
        config.system.debug_mode = true;
        {
            let mut emu = Emulator::new(&config, Logger::from_config(&config.system));
            emu.handle_events(&[
                InputEvent::KeyDown {
                    key: LcdKey::C,
                    ctrl: true,
                },
                InputEvent::KeyDown {
                    key: LcdKey::H,
                    ctrl: true,
                },
            ]);
        }
        let entry = std::fs::read_dir(&dir).unwrap().next().unwrap().unwrap();
        let text = std::fs::read_to_string(entry.path()).unwrap();
        assert!(text.contains("DEBUG: command CLEAR (0x01)"));
        assert!(text.contains("DEBUG: command HOME (0x02)"));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_config_flags_applied() {
        let mut config = Config::default();
        config.lcd.cursor_on = true;
        let emu = Emulator::new(&config, Logger::disabled());
        assert!(emu.lcd.flags().cursor_on);
    }
}
