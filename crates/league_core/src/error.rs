use thiserror::Error;

#[derive(Error, Debug)]
pub enum MergeError {
    /// A setting no league can be created with
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MergeError {
    /// Whether the message is meant to be shown to the user as is
    pub fn is_user_facing(&self) -> bool {
        matches!(self, MergeError::InvalidConfiguration(_))
    }
}

pub type Result<T> = std::result::Result<T, MergeError>;
