use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("invalid time: {0}")]
    InvalidTime(String),
}
