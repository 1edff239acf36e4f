use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskzError {
    #[error("Task {0} not found")]
    TaskNotFound(u64),

    #[error("Task description cannot be empty")]
    InvalidDescription,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TaskzError>;
