use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Failed to parse input: {0}")]
    InputParseError(String),

    #[error("File not found or unreadable: {0}")]
    MissingFileError(String),

    #[error("Unsupported body type: {0}")]
    UnsupportedBodyTypeError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
