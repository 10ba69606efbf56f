//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑

use tracing::{debug, info};

use super::actions::Action;
use super::state::App;
use crate::error::GuessError;
use crate::models::{GameSession, GuessOutcome};

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::NewGame => self.start_new_game(),
            Action::Submit => self.submit_guess(),

            Action::Input(c) => {
                if !self.session.is_won() {
                    self.input_buffer.push(c);
                }
            }

            Action::DeleteChar => {
                self.input_buffer.pop();
            }
        }
        false
    }

    /// 开始新游戏：整体替换当前对局
    pub fn start_new_game(&mut self) {
        if !self.session.is_won() && self.session.attempts() > 0 {
            info!(
                session = %self.session.id(),
                attempts = self.session.attempts(),
                "game abandoned"
            );
        }
        self.session = GameSession::start(self.source.as_mut());
        self.input_buffer.clear();
    }

    /// 提交输入框内容，有效猜测后清空输入
    pub fn submit_guess(&mut self) {
        match self.session.submit_guess(&self.input_buffer) {
            GuessOutcome::Rejected(GuessError::NotANumber { input }) => {
                debug!(session = %self.session.id(), %input, "guess rejected: not a number");
            }
            GuessOutcome::Rejected(GuessError::OutOfRange { value }) => {
                debug!(session = %self.session.id(), value, "guess rejected: out of range");
            }
            GuessOutcome::Ignored => {}
            GuessOutcome::TooLow | GuessOutcome::TooHigh | GuessOutcome::Correct => {
                self.input_buffer.clear();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::Config;
    use crate::models::GameStatus;
    use crate::random::FixedSecret;
    use crate::ui::actions::Action;
    use crate::ui::state::App;

    fn app_with(secret: u32) -> App {
        App::new(Box::new(FixedSecret(secret)), &Config::default())
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.dispatch(Action::Input(c));
        }
    }

    #[test]
    fn test_submit_clears_input_on_accept() {
        let mut app = app_with(50);
        type_str(&mut app, "30");
        app.dispatch(Action::Submit);

        assert!(app.input_buffer.is_empty());
        assert_eq!(app.session.history(), &[30]);
    }

    #[test]
    fn test_submit_keeps_input_on_reject() {
        let mut app = app_with(50);
        type_str(&mut app, "abc");
        app.dispatch(Action::Submit);

        assert_eq!(app.input_buffer, "abc");
        assert_eq!(app.session.attempts(), 0);
    }

    #[test]
    fn test_delete_char() {
        let mut app = app_with(50);
        type_str(&mut app, "123");
        app.dispatch(Action::DeleteChar);
        assert_eq!(app.input_buffer, "12");
    }

    #[test]
    fn test_new_game_replaces_session() {
        let mut app = app_with(50);
        type_str(&mut app, "50");
        app.dispatch(Action::Submit);
        assert_eq!(app.session.status(), GameStatus::Won);
        let old_id = app.session.id();

        type_str(&mut app, "9");
        assert!(app.input_buffer.is_empty());

        assert!(!app.dispatch(Action::NewGame));
        assert_ne!(app.session.id(), old_id);
        assert_eq!(app.session.status(), GameStatus::InProgress);
        assert_eq!(app.session.attempts(), 0);
        assert!(app.session.history().is_empty());
    }

    #[test]
    fn test_quit() {
        let mut app = app_with(50);
        assert!(app.dispatch(Action::Quit));
    }
}
