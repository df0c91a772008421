// LCD1602 模擬器 - 主程式

use clap::Parser;
use lcd1602_emulator::frontend::MinifbFrontend;
use lcd1602_emulator::input::{self, InputEvent};
use lcd1602_emulator::utils::Logger;
use lcd1602_emulator::{Config, ConfigBuilder, Emulator, Result};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lcd1602", about = "HD44780 16x2 character LCD emulator")]
struct Cli {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Window pixels per LCD dot (overrides the config file)
    #[arg(long)]
    scale: Option<u32>,
    /// Text written to the display at startup
    #[arg(long)]
    banner: Option<String>,
    /// Print the display as text instead of opening a window
    #[arg(long)]
    headless: bool,
    /// Text typed after the banner (headless mode)
    #[arg(long = "type")]
    typed: Option<String>,
    /// Enable debug log lines (headless mode only writes a log with this flag)
    #[arg(long)]
    debug: bool,
}

fn build_config(cli: &Cli) -> Result<Config> {
    let mut builder = ConfigBuilder::from_config(Config::load(cli.config.as_deref())?);
    if let Some(scale) = cli.scale {
        builder = builder.scale(scale);
    }
    if let Some(banner) = &cli.banner {
        builder = builder.banner(banner.clone());
    }
    if cli.debug {
        builder = builder.debug_mode(true);
    }
    builder.build()
}

fn print_display(emulator: &Emulator) {
    let border = format!("+{}+", "-".repeat(16));
    println!("{}", border);
    for row in emulator.lcd.visible_text() {
        println!("|{}|", row);
    }
    println!("{}", border);
    let cursor = emulator.lcd.cursor();
    println!("cursor: ({}, {})", cursor.column, cursor.row);
}

fn run(cli: Cli) -> Result<()> {
    let config = build_config(&cli)?;

    if cli.headless {
        let logger = if config.system.debug_mode {
            Logger::from_config(&config.system)
        } else {
            Logger::disabled()
        };
        let mut emulator = Emulator::new(&config, logger);
        emulator.write_banner(&config.lcd.banner);
        if let Some(typed) = &cli.typed {
            let text = input::printable_text(typed.chars());
            emulator.handle_events(&[InputEvent::Text(text)]);
        }
        print_display(&emulator);
        return Ok(());
    }

    println!("🖥️  LCD1602 模擬器啟動中...");
    let logger = Logger::from_config(&config.system);
    let mut emulator = Emulator::new(&config, logger);

    let mut frontend = MinifbFrontend::new(
        &config.video,
        emulator.geometry.width(),
        emulator.geometry.height(),
    )?;
    println!("✅ 窗口創建成功");
    println!("💡 Ctrl+C 清除顯示, Ctrl+H 返回原點, Esc 結束");

    emulator.write_banner(&config.lcd.banner);
    emulator.run(&mut frontend)?;

    println!("🎉 LCD1602 模擬器結束");
    println!("📊 總幀數: {}", emulator.frames);
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}
