use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShingleError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl ShingleError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

pub type ShingleResult<T> = Result<T, ShingleError>;
