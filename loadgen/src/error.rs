use std::{error::Error, fmt, io};

/// The load generator's result type.
pub type Result<T> = std::result::Result<T, LoadErr>;

/// Load generator failures.
#[derive(Debug)]
pub enum LoadErr {
    /// The request could not be sent or its response could not be read.
    Transport {
        target: String,
        source: reqwest::Error,
    },
    Io(io::Error),
    Encode(serde_json::Error),
    InvalidConfig(String),
    /// A fail-fast run stopped at the given 1-based request.
    Aborted {
        request: usize,
        source: Box<LoadErr>,
    },
}

impl fmt::Display for LoadErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadErr::Transport { target, source } => {
                write!(f, "request to {target} failed: {source}")
            }
            LoadErr::Io(e) => write!(f, "io error: {e}"),
            LoadErr::Encode(e) => write!(f, "cannot encode payload: {e}"),
            LoadErr::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            LoadErr::Aborted { request, source } => {
                write!(f, "run aborted at request {request}: {source}")
            }
        }
    }
}

impl Error for LoadErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadErr::Transport { source, .. } => Some(source),
            LoadErr::Io(e) => Some(e),
            LoadErr::Encode(e) => Some(e),
            LoadErr::Aborted { source, .. } => Some(source.as_ref()),
            LoadErr::InvalidConfig(_) => None,
        }
    }
}

impl From<io::Error> for LoadErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for LoadErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}
