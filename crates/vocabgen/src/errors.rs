//! # Error Types

/// Errors from vocabgen operations.
#[derive(Debug, thiserror::Error)]
pub enum VocabgenError {
    /// An unrecognized sort mode name.
    #[error("invalid sort mode: {name:?}")]
    InvalidSortMode {
        /// The rejected name.
        name: String,
    },

    /// The target vocabulary size must be positive.
    #[error("target size must be > 0")]
    ZeroTargetSize,

    /// The number of split parts must be positive.
    #[error("number of parts must be > 0")]
    ZeroParts,

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for vocabgen operations.
pub type VgResult<T> = std::result::Result<T, VocabgenError>;
