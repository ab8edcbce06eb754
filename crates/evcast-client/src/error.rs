use std::fmt;

/// Result type for evcast-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur when talking to the prediction service
#[derive(Debug)]
pub enum Error {
    /// Transport-level failure: connection, timeout, or an unparseable body
    Http(reqwest::Error),

    /// The service answered with a non-success status
    Api { status: u16, message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(err) => write!(f, "Request failed: {}", err),
            Error::Api { message, .. } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            Error::Api { .. } => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}
