

use thiserror::Error;


#[derive(Error, Debug)]
pub enum KeywordError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Credential store error: {0}")]
    Credentials(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}


pub type Result<T> = std::result::Result<T, KeywordError>;
