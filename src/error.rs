//! Errors raised while reading an archive's entry stream.

use thiserror::Error;

/// Result type alias using [`ArchiveReadError`].
pub type Result<T> = std::result::Result<T, ArchiveReadError>;

/// Failure to read the entry stream of an archive.
///
/// Transport and format problems are reported through the same type: the
/// caller treats them identically and only the diagnostic text differs.
#[derive(Error, Debug)]
pub enum ArchiveReadError {
    /// The remote resource could not be connected to or streamed.
    #[error("transport error")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP request failed with status: {0}")]
    Status(reqwest::StatusCode),

    /// Reading a local source failed.
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    /// The byte stream is not a well-formed ZIP archive.
    #[error("invalid archive: {0}")]
    Format(String),
}

impl ArchiveReadError {
    pub(crate) fn format(message: impl Into<String>) -> Self {
        Self::Format(message.into())
    }

    /// Whether the failure came from the byte source rather than its content.
    pub fn is_transport(&self) -> bool {
        !matches!(self, Self::Format(_))
    }
}
