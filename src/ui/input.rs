//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use std::io;

use crossterm::event::KeyCode;

use super::actions::Action;
use super::state::App;
use crate::models::GameStatus;

/// 根据当前对局状态和按键获取对应的 Action
pub fn get_action(status: GameStatus, key: KeyCode) -> Option<Action> {
    match status {
        GameStatus::InProgress => match key {
            KeyCode::Esc => Some(Action::Quit),
            KeyCode::Tab => Some(Action::NewGame),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        },
        // 猜中后输入框隐藏，Enter 不再提交
        GameStatus::Won => match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Tab => Some(Action::NewGame),
            _ => None,
        },
    }
}

/// 处理按键事件
pub fn handle_key_event(app: &mut App, key: KeyCode) -> io::Result<bool> {
    if let Some(action) = get_action(app.session.status(), key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}
