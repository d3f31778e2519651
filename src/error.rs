use thiserror::Error;

#[derive(Error, Debug)]
pub enum BingoError {
    #[error("Card sheet has no 'Player' column")]
    MissingPlayerColumn,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BingoError>;
