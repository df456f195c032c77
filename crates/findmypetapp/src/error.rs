use thiserror::Error;

#[derive(Error, Debug)]
pub enum FindMyPetError {
    #[error("Listing not found: {0}")]
    ListingNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    /// The backend refused a write because the slot would exceed its capacity.
    #[error("Storage quota exceeded: {needed} bytes needed, limit is {limit}")]
    QuotaExceeded { needed: usize, limit: usize },

    #[error("Invalid listing: {0}")]
    Validation(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<confique::Error> for FindMyPetError {
    fn from(err: confique::Error) -> Self {
        FindMyPetError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FindMyPetError>;
