/// Errors raised by the collaborators around the query mutator.
///
/// The mutator itself never fails; these cover the browser location, the
/// network transports and configuration loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The current location could not be read or assigned
    Navigation(String),
    /// A transport (page fetch, vote post) failed
    Transport(String),
    /// A response body could not be decoded
    Decode(String),
    /// Configuration could not be loaded
    Config(String),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Navigation(msg) => write!(f, "Navigation failed: {msg}"),
            Self::Transport(msg) => write!(f, "Transport failed: {msg}"),
            Self::Decode(msg) => write!(f, "Invalid response body: {msg}"),
            Self::Config(msg) => write!(f, "Invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Result type for fallible page operations
pub type Result<T> = core::result::Result<T, Error>;
