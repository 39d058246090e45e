use thiserror::Error;

#[derive(Error, Debug)]
pub enum TroopError {
    #[error("Seed data error: {0}")]
    Seed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TroopError>;
