/*!
 * Error types for the country-translator crate.
 *
 * Loading failures are collected in `LoadError` and surface to callers wrapped
 * in a single `TranslatorError::Initialization`, keeping the underlying cause
 * reachable through `std::error::Error::source`. Lookups never fail; absence is
 * reported through `Translation` values instead.
 */

use thiserror::Error;

/// Reasons a translation dataset could not be loaded
#[derive(Error, Debug)]
pub enum LoadError {
    /// The named resource does not exist in the provider
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The resource exists but reading it failed
    #[error("Failed to read resource: {0}")]
    Io(#[from] std::io::Error),

    /// The content is not a JSON array of objects
    #[error("Malformed translation data: {0}")]
    Format(#[from] serde_json::Error),

    /// A record is missing `alpha3` or holds a non-string value
    #[error("Invalid record at index {index}: {reason}")]
    InvalidRecord {
        /// Zero-based position of the record in the source array
        index: usize,
        /// What was wrong with it
        reason: String,
    },
}

/// Errors raised while constructing a translator
#[derive(Error, Debug)]
pub enum TranslatorError {
    /// Construction failed; no translator was built
    #[error("Failed to initialize translator from '{resource}': {source}")]
    Initialization {
        /// Logical name of the resource that was being loaded
        resource: String,
        /// Underlying cause
        #[source]
        source: LoadError,
    },
}

impl TranslatorError {
    /// Wrap a load failure for the given resource
    pub fn initialization(resource: impl Into<String>, source: LoadError) -> Self {
        Self::Initialization {
            resource: resource.into(),
            source,
        }
    }

    /// The load failure that caused this error
    pub fn load_error(&self) -> &LoadError {
        match self {
            Self::Initialization { source, .. } => source,
        }
    }
}

/// Application-level error used by the command line front-end
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from building the translator
    #[error("Translator error: {0}")]
    Translator(#[from] TranslatorError),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// The requested country code is not in the dataset
    #[error("Unknown country: {0}")]
    UnknownCountry(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}
