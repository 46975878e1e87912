use thiserror::Error;

#[derive(Debug, Error)]
pub enum BiteError {
    #[error("Journal entry not found: {0}")]
    EntryNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Vision model rejected the image (not a food photo)")]
    RejectedImage,

    #[error("Vision model response contains no JSON object")]
    NoJsonPayload,

    #[error("Journal has no entries")]
    EmptyJournal,
}

pub type Result<T> = std::result::Result<T, BiteError>;
