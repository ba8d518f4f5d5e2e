use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiteError {
    #[error("Unknown page identifier: {0}")]
    UnknownPage(String),

    #[error("Unknown contact form field: {0}")]
    UnknownField(String),

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<serde_json::Error> for SiteError {
    fn from(err: serde_json::Error) -> Self {
        SiteError::Serialization {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
