mod config;
mod error;
mod logging;
mod models;
mod random;
mod ui;

use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::{error, info};

use crate::config::{config_path, load_config};
use crate::random::RngSource;
use crate::ui::{App, render};

fn main() -> io::Result<()> {
    // 配置文件路径 (~/.config/guessing-game/config.toml)
    let config = load_config(&config_path()?)?;

    // guard 存活期间日志持续写入
    let _log_guard = logging::init(&config.log_level)?;
    info!(seeded = config.seed.is_some(), "guessing game starting");

    // 创建应用状态（同时开始第一局）
    let mut app = App::new(Box::new(RngSource::new(config.seed)), &config);

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match &result {
        Ok(()) => info!("guessing game exited"),
        Err(e) => error!(error = %e, "guessing game exited with error"),
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
            if key.kind == crossterm::event::KeyEventKind::Press && ui::handle_key_event(app, key.code)? {
                break;
            }
        }
    }
    Ok(())
}
