use std::error::Error;
use std::fmt;
use std::io;

/// Enumeration of all possible errors that can occur while ingesting quotes
#[derive(Debug)]
pub enum QuoteError {
    Import(ImportError),
    Provider(ProviderError),
    Config(ConfigError),
    Other(io::Error),
}

/// Reasons an upload or fetched document is rejected before storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    EmptyTitle,
    InvalidYear(String),
    NoFileSelected,
    InvalidExtension(String),
    MissingImdbId(String),
    /// The document decoded but no block produced a usable entry
    NoEntries,
}

/// Errors raised by the remote subtitle and metadata services
#[derive(Debug)]
pub struct ProviderError {
    pub message: String,
    pub status: Option<u16>,
}

impl ProviderError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    /// Create an error for a non-success HTTP response.
    pub fn http(status: u16, context: &str) -> Self {
        Self {
            message: format!("{} returned HTTP {}", context, status),
            status: Some(status),
        }
    }
}

#[derive(Debug)]
pub struct ConfigError {
    pub message: String,
}

impl ConfigError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for QuoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuoteError::Other(err) => write!(f, "I/O error: {}", err),
            QuoteError::Import(err) => write!(f, "Import error: {}", err),
            QuoteError::Provider(err) => write!(f, "Provider error: {}", err),
            QuoteError::Config(err) => write!(f, "Config error: {}", err),
        }
    }
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::EmptyTitle => write!(f, "Movie title is required."),
            ImportError::InvalidYear(raw) => write!(f, "Invalid year format: {:?}", raw),
            ImportError::NoFileSelected => write!(f, "No selected file"),
            ImportError::InvalidExtension(name) => write!(
                f,
                "Invalid file format ({}). Please upload a .srt file.",
                name
            ),
            ImportError::MissingImdbId(title) => {
                write!(f, "Movie '{}' has no IMDb id to fetch subtitles by", title)
            }
            ImportError::NoEntries => write!(
                f,
                "Could not parse subtitles. The file format might be incorrect or empty."
            ),
        }
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for QuoteError {}
impl Error for ImportError {}
impl Error for ProviderError {}
impl Error for ConfigError {}

// Conversion implementations
impl From<io::Error> for QuoteError {
    fn from(err: io::Error) -> Self {
        QuoteError::Other(err)
    }
}

impl From<ImportError> for QuoteError {
    fn from(err: ImportError) -> Self {
        QuoteError::Import(err)
    }
}

impl From<ProviderError> for QuoteError {
    fn from(err: ProviderError) -> Self {
        QuoteError::Provider(err)
    }
}

impl From<ConfigError> for QuoteError {
    fn from(err: ConfigError) -> Self {
        QuoteError::Config(err)
    }
}

impl From<reqwest::Error> for QuoteError {
    fn from(err: reqwest::Error) -> Self {
        let mut provider = ProviderError::new(err.to_string());
        provider.status = err.status().map(|s| s.as_u16());
        QuoteError::Provider(provider)
    }
}

// Conversion to io::Error for callers that only speak io
impl From<QuoteError> for io::Error {
    fn from(err: QuoteError) -> Self {
        io::Error::other(err)
    }
}

impl From<ImportError> for io::Error {
    fn from(err: ImportError) -> Self {
        io::Error::other(err)
    }
}

// Type alias for Result with QuoteError
pub type QuoteResult<T> = Result<T, QuoteError>;
