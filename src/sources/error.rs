use std::fmt;

/// What: Error type for loading a category data file.
///
/// Inputs: Produced by the file reader, the HTTP fetcher and the JSON parser.
///
/// Output: Implements `Display`/`Error` for ergonomic propagation.
///
/// Details:
/// - Any variant means the browser shows its error state; there is no retry.
#[derive(Debug)]
pub enum LoadError {
    /// Reading a local file failed.
    Io(std::io::Error),
    /// The HTTP request could not be completed.
    Http(reqwest::Error),
    /// The server answered with a non-success status.
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        code: u16,
    },
    /// The body was not a JSON array of records.
    Parse(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Http(err) => write!(f, "HTTP error: {err}"),
            Self::Status { url, code } => write!(f, "{url} returned HTTP {code}"),
            Self::Parse(msg) => write!(f, "invalid package data: {msg}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Http(err) => Some(err),
            Self::Status { .. } | Self::Parse(_) => None,
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<reqwest::Error> for LoadError {
    fn from(value: reqwest::Error) -> Self {
        Self::Http(value)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value.to_string())
    }
}
