use std::fmt;

/// Result type for vitrine-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading storefront documents
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Document is not valid JSON for the requested shape
    Json(serde_json::Error),

    /// Value is not one of the known variants of a storefront enumeration
    UnknownVariant { kind: &'static str, value: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json(err) => write!(f, "Invalid document: {}", err),
            Error::UnknownVariant { kind, value } => write!(f, "Unknown {}: {}", kind, value),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::UnknownVariant { .. } => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
