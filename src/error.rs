use thiserror::Error;

#[derive(Error, Debug)]
pub enum ListError {
    #[error("Failed to allocate node for value {value}")]
    AllocationFailure { value: i32 },

    #[error("List contains a cycle")]
    CycleDetected,

    #[error("Failed to parse list: {input:?}")]
    Parse { input: String },

    #[error("Invalid list pattern: {0}")]
    Regex(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, ListError>;
