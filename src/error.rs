use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptuaryError {
    #[error("Validation failed for field '{field}': {message}")]
    Validation { field: String, message: String },

    #[error("Request failed (HTTP {status} - {status_text}): {body}")]
    Request {
        status: u16,
        status_text: String,
        body: String,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PromptuaryError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        PromptuaryError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PromptuaryError>;
