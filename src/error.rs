use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Resource path not found: [provided={}]", .0.display())]
    NotFound(PathBuf),

    #[error("Context error: {0}")]
    Context(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Initialization error: {0}")]
    InitializationError(String),
}

pub type Result<T> = std::result::Result<T, Error>;
