use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Local};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::GuessError;
use crate::random::SecretSource;

/// 秘密数字下界（含）
pub const SECRET_MIN: u32 = 1;
/// 秘密数字上界（含）
pub const SECRET_MAX: u32 = 100;

/// 对局状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    InProgress, // 进行中
    Won, // 已猜中，终态
}

/// 最近一次事件的反馈
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Feedback {
    #[default]
    Prompt,
    Invalid,
    TooLow,
    TooHigh,
    Won { attempts: u32 },
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::Prompt => write!(
                f,
                "I'm thinking of a number between {} and {}. Can you guess it?",
                SECRET_MIN, SECRET_MAX
            ),
            Feedback::Invalid => write!(
                f,
                "Please enter a valid number between {} and {}!",
                SECRET_MIN, SECRET_MAX
            ),
            Feedback::TooLow => write!(f, "Too low! Try a higher number."),
            Feedback::TooHigh => write!(f, "Too high! Try a lower number."),
            Feedback::Won { attempts } => write!(
                f,
                "🎉 Congratulations! You guessed it in {} {}!",
                attempts,
                if *attempts == 1 { "attempt" } else { "attempts" }
            ),
        }
    }
}

/// 一次 `submit_guess` 的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    Rejected(GuessError),
    Ignored, // 已经猜中后的提交
    TooLow,
    TooHigh,
    Correct,
}

/// 解析用户输入，允许首尾空白
pub fn parse_guess(input: &str) -> Result<u32, GuessError> {
    let trimmed = input.trim();
    let value: i64 = trimmed.parse().map_err(|_| GuessError::NotANumber {
        input: trimmed.to_string(),
    })?;

    if value < i64::from(SECRET_MIN) || value > i64::from(SECRET_MAX) {
        return Err(GuessError::OutOfRange { value });
    }

    // 已在 [1, 100] 内
    Ok(value as u32)
}

/// 一局游戏
///
/// 新游戏总是创建新的实例替换旧实例，不在原地重置
#[derive(Debug, Clone)]
pub struct GameSession {
    id: Uuid,
    secret: u32,
    attempts: u32,
    history: Vec<u32>,
    status: GameStatus,
    feedback: Feedback,
    started_at: DateTime<Local>,
}

impl GameSession {
    /// 开始新游戏：从 `source` 抽取秘密数字
    pub fn start(source: &mut dyn SecretSource) -> Self {
        let secret = source.draw(SECRET_MIN, SECRET_MAX);
        let session = Self::with_secret(secret);
        info!(session = %session.id, "new game started");
        debug!(session = %session.id, secret, "secret drawn");
        session
    }

    fn with_secret(secret: u32) -> Self {
        debug_assert!((SECRET_MIN..=SECRET_MAX).contains(&secret));
        Self {
            id: Uuid::new_v4(),
            secret,
            attempts: 0,
            history: Vec::new(),
            status: GameStatus::InProgress,
            feedback: Feedback::Prompt,
            started_at: Local::now(),
        }
    }

    /// 提交一次猜测
    ///
    /// 先校验输入，再检查是否已结束；无效输入只更新反馈信息
    pub fn submit_guess(&mut self, input: &str) -> GuessOutcome {
        let guess = match parse_guess(input) {
            Ok(guess) => guess,
            Err(err) => {
                self.feedback = Feedback::Invalid;
                return GuessOutcome::Rejected(err);
            }
        };

        if self.status == GameStatus::Won {
            warn!(session = %self.id, guess, "guess submitted after game was won");
            return GuessOutcome::Ignored;
        }

        self.attempts += 1;
        self.history.push(guess);
        debug!(session = %self.id, guess, attempts = self.attempts, "guess accepted");

        match guess.cmp(&self.secret) {
            Ordering::Equal => {
                self.status = GameStatus::Won;
                self.feedback = Feedback::Won {
                    attempts: self.attempts,
                };
                info!(session = %self.id, attempts = self.attempts, "game won");
                GuessOutcome::Correct
            }
            Ordering::Less => {
                self.feedback = Feedback::TooLow;
                GuessOutcome::TooLow
            }
            Ordering::Greater => {
                self.feedback = Feedback::TooHigh;
                GuessOutcome::TooHigh
            }
        }
    }

    /// 猜测值相对秘密数字的大小（用于历史着色）
    pub fn compare(&self, guess: u32) -> Ordering {
        guess.cmp(&self.secret)
    }

    #[allow(dead_code)]
    pub fn secret(&self) -> u32 {
        self.secret
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn history(&self) -> &[u32] {
        &self.history
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    pub fn last_message(&self) -> String {
        self.feedback.to_string()
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }
}
