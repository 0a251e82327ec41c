use thiserror::Error;

/// Date pattern and locale errors
#[derive(Error, Debug)]
pub enum DateError {
    #[error("Unsupported pattern symbol '{symbol}' x{count} in {pattern:?}")]
    UnsupportedSymbol {
        symbol: char,
        count: usize,
        pattern: String,
    },

    #[error("Unterminated quoted literal in {0:?}")]
    UnterminatedLiteral(String),

    #[error("Empty date pattern")]
    EmptyPattern,

    #[error(transparent)]
    CoreError(#[from] birthbook_core::error::CoreError),
}

pub type DateResult<T> = std::result::Result<T, DateError>;
