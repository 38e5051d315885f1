use thiserror::Error;

pub type BubbleResult<T> = Result<T, BubbleError>;

#[derive(Debug, Error)]
pub enum BubbleError {
    #[error("invalid bubble options: {0}")]
    InvalidOptions(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
