use thiserror::Error;

/// 猜测输入校验错误
///
/// 两种情况对用户显示同一条提示，区分仅用于日志
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Please enter a valid number between 1 and 100!")]
    NotANumber { input: String },
    #[error("Please enter a valid number between 1 and 100!")]
    OutOfRange { value: i64 },
}
