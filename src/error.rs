use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("Shopping item index {index} out of range (list has {len} items)")]
    ItemOutOfRange { index: usize, len: usize },

    #[error("Shopping item not found: {0}")]
    ItemNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl PlanError {
    /// Whether the error is a rejected check-off that leaves state intact.
    pub fn is_invalid_reference(&self) -> bool {
        matches!(self, PlanError::ItemOutOfRange { .. } | PlanError::ItemNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, PlanError>;
