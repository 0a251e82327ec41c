use thiserror::Error;

/// Contact-level errors
#[derive(Error, Debug)]
pub enum ContactError {
    #[error("Invalid birthday: {0}")]
    InvalidBirthday(String),

    #[error("Invalid contact record: {0}")]
    InvalidRecord(#[from] serde_json::Error),

    #[error(transparent)]
    DateError(#[from] birthbook_dates::DateError),

    #[error(transparent)]
    CoreError(#[from] birthbook_core::error::CoreError),
}

pub type ContactResult<T> = std::result::Result<T, ContactError>;
