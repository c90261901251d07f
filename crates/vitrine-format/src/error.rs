use std::fmt;

/// Result type for vitrine-format operations
pub type Result<T> = std::result::Result<T, FormatError>;

/// Failures of the formatting functions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Currency code is not in the supported currency table
    UnsupportedCurrency(String),

    /// Timestamp could not be parsed (only under the strict date policy)
    InvalidDate(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::UnsupportedCurrency(code) => {
                write!(f, "Unsupported currency code: {}", code)
            }
            FormatError::InvalidDate(input) => write!(f, "Invalid date: {:?}", input),
        }
    }
}

impl std::error::Error for FormatError {}
