//! Error types for folio operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while parsing or loading blog content.
#[derive(Debug, Error)]
pub enum FolioError {
    /// The document contains no `---` fenced front matter block.
    ///
    /// Front matter is a hard precondition: a post without it is malformed,
    /// and returning empty metadata would silently hide the problem.
    #[error("document has no front matter: expected a `---` fenced header block")]
    MissingFrontmatter,

    /// A date string could not be parsed as `YYYY-MM-DD` or an ISO-8601 timestamp.
    #[error("invalid date '{input}': expected YYYY-MM-DD or an ISO-8601 timestamp")]
    InvalidDate {
        /// The original input string
        input: String,
    },

    /// Failed to read a post file.
    #[error("failed to read {}: {source}", path.display())]
    FileRead {
        /// The file that could not be read
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// Failed to list a posts directory.
    #[error("failed to read directory {}: {source}", path.display())]
    DirRead {
        /// The directory that could not be listed
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FolioError>;
