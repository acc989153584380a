//! Primary error enum for option loading flows.

use figment::Error as FigmentError;
use thiserror::Error;

/// Errors that can occur while reading job option records.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OptionsError {
    /// Error originating from an options file.
    #[error("Options file error in '{path}': {source}")]
    File {
        /// Path that triggered the failure.
        path: std::path::PathBuf,
        /// Underlying error reported by the file loader.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The document parsed but does not match the option schema.
    #[error("Failed to extract job options: {0}")]
    Parse(#[from] Box<FigmentError>),

    /// A job-level JSON record could not be decoded.
    #[error("Invalid job options JSON at line {line}, column {column}: {message}")]
    Json {
        /// Decoder message.
        message: String,
        /// One-based line of the failure.
        line: usize,
        /// One-based column of the failure.
        column: usize,
    },
}

impl OptionsError {
    /// Construct a parse error from a [`figment::Error`].
    ///
    /// # Examples
    ///
    /// ```
    /// use job_options::OptionsError;
    /// let e = OptionsError::parse(figment::Error::from("boom"));
    /// assert!(matches!(e, OptionsError::Parse(_)));
    /// ```
    #[must_use]
    pub fn parse(source: FigmentError) -> Self {
        Self::Parse(Box::new(source))
    }

    /// Construct a file error for `path`.
    #[must_use]
    pub fn file(
        path: &std::path::Path,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::File {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }
}
