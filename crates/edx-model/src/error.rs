use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("exam not found: {0}")]
    UnknownExam(String),
    #[error("invalid exam id: {0:?}")]
    InvalidExamId(String),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
