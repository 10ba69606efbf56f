//! App 状态定义 (Model)
//!
//! 持有唯一的一局游戏、随机来源和输入缓冲

use crate::config::Config;
use crate::models::GameSession;
use crate::random::SecretSource;

/// 应用状态
pub struct App {
    pub session: GameSession,
    pub source: Box<dyn SecretSource>,
    pub input_buffer: String,
    pub show_rules: bool,
}

impl App {
    /// 创建新的应用实例，并立即开始第一局
    pub fn new(mut source: Box<dyn SecretSource>, config: &Config) -> Self {
        let session = GameSession::start(source.as_mut());
        Self {
            session,
            source,
            input_buffer: String::new(),
            show_rules: config.show_rules,
        }
    }
}
