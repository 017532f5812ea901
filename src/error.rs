use thiserror::Error;

/// Errors raised by the section core.
///
/// All failures surface synchronously to the immediate caller; nothing is
/// retried internally. Derivation is fail-fast: the first invalid stage
/// aborts the whole pass and no partial results are kept.
#[derive(Debug, Error)]
pub enum SectionError {
    /// Empty or degenerate boundary, a polygon with fewer than 3 points
    /// where one is required, or a derived line point outside the section.
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A section file parsed cleanly but contained zero sections.
    #[error("no sections found in file")]
    EmptyDocument,

    /// A section file that is not structurally valid JSON.
    #[error("malformed section file: {0}")]
    MalformedFile(#[from] serde_json::Error),

    /// File I/O failure while reading or writing a section file.
    #[error("i/o failure: {0}")]
    IoFailure(#[from] std::io::Error),
}

/// Convenience type alias for results using [`SectionError`].
pub type Result<T> = std::result::Result<T, SectionError>;
