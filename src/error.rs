use thiserror::Error;

/// Discriminant of [`MushafError`], for callers that branch on the kind of
/// failure without caring about its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidFormat,
    OutOfRange,
    NotFound,
    Ambiguous,
    Corpus,
    Config,
    Io,
    Json,
}

#[derive(Error, Debug)]
pub enum MushafError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Out of range: {what} {value} is not within 1..={max}")]
    OutOfRange { what: &'static str, value: String, max: u16 },
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Ambiguous: '{query}' matches chapters {candidates:?}")]
    Ambiguous { query: String, candidates: Vec<u16> },
    #[error("Corpus error: {0}")]
    Corpus(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MushafError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidFormat(_) => ErrorKind::InvalidFormat,
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Ambiguous { .. } => ErrorKind::Ambiguous,
            Self::Corpus(_) => ErrorKind::Corpus,
            Self::Config(_) => ErrorKind::Config,
            Self::Io(_) => ErrorKind::Io,
            Self::Json(_) => ErrorKind::Json,
        }
    }
}

pub type Result<T> = std::result::Result<T, MushafError>;

// Helper conversions
impl From<config::ConfigError> for MushafError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
